use clap::{Args, Parser, Subcommand};
use kodomotrip_core::FilterState;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kodomotrip")]
#[command(version)]
#[command(about = "Family-friendly outing spots and events")]
pub struct Cli {
    /// Data directory (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// JSON catalog to use instead of the built-in places
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record an app start and show the install dialog when due
    Visit,

    /// Install dialog: "remind me later"
    Dismiss,

    /// Install dialog: close without postponing
    Close,

    /// Show install prompt state as JSON
    Status,

    /// List outing spots
    Places {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List time-limited events
    Events {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show one place
    Show {
        /// Place id
        place_id: String,
    },

    /// Print version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Age group: all, 0-1, 2-3, 4-6
    #[arg(long, default_value = "all")]
    pub age: String,

    /// Category: all, park, indoor, event, museum, shopping
    #[arg(long, default_value = "all")]
    pub category: String,
}

impl FilterArgs {
    pub fn to_state(&self) -> FilterState {
        FilterState::new(&self.age, &self.category)
    }
}
