use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "overstrike-cli")]
#[command(about = "Classify Marvel's Spider-Man 2 mod archives and plan their installation", long_about = None)]
pub struct Cli {
    /// Game configuration JSON (defaults to Marvel's Spider-Man 2)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Target game id, defaults to the configured game
    #[arg(long, global = true)]
    pub game: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the installer that supports an archive listing
    Classify {
        /// Listing file, one path per line ("-" for stdin)
        listing: PathBuf,
    },

    /// Print the install plan for an archive listing as JSON
    Plan {
        /// Listing file, one path per line ("-" for stdin)
        listing: PathBuf,

        /// Staging directory the archive was extracted to
        #[arg(long, default_value = ".")]
        staging: PathBuf,
    },

    /// Print the deployment directory of a mod type
    Destination {
        /// Mod type id, e.g. marvelsspiderman2-osmod
        mod_type: String,

        #[command(flatten)]
        paths: PathArgs,
    },

    /// List registered mod types and installers
    Kinds,

    /// Show game settings derived from a discovered install directory
    Game {
        #[command(flatten)]
        paths: PathArgs,

        /// Store the game was installed from (steam, epic, gog, xbox)
        #[arg(long)]
        store: Option<String>,
    },
}

/// Placeholder values; unset flags fall back to OVERSTRIKE_* environment variables
#[derive(clap::Args, Debug, Default)]
pub struct PathArgs {
    #[arg(long)]
    pub game_path: Option<PathBuf>,

    #[arg(long)]
    pub documents: Option<PathBuf>,

    #[arg(long)]
    pub local_app_data: Option<PathBuf>,

    #[arg(long)]
    pub app_data: Option<PathBuf>,
}
