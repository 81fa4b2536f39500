use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the digest without publishing it
    Render(RenderArgs),

    /// Render the digest and publish it to the configured destination
    Publish(PublishArgs),

    /// Initialize a .hubdigest.toml config file in the current directory
    Init,

    /// List the configured report sections
    ListSections(ListSectionsArgs),
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// JSON file with captured GetInsightResults responses
    #[arg(short, long)]
    pub results: PathBuf,

    /// Config file (defaults to .hubdigest.toml, then the environment)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the digest to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct PublishArgs {
    /// JSON file with captured GetInsightResults responses
    #[arg(short, long)]
    pub results: PathBuf,

    /// Config file (defaults to .hubdigest.toml, then the environment)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Deliver into this file instead of printing to stdout
    #[arg(long)]
    pub outbox: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ListSectionsArgs {
    /// Config file (defaults to .hubdigest.toml, then the environment)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
