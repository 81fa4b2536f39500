pub mod commands;

use clap::Parser;

pub use commands::{Commands, ListSectionsArgs, PublishArgs, RenderArgs};

/// hubdigest: weekly Security Hub insight digest
///
/// Collects custom insight results, renders them into a fixed-width
/// plain-text report and publishes it to a notification topic.
#[derive(Parser, Debug)]
#[command(
    name = "hubdigest",
    version,
    about = "Weekly Security Hub insight digest",
    long_about = "hubdigest renders Security Hub custom insight results into a plain-text\nweekly report with per-section console links, and publishes it to a\nnotification topic."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}
