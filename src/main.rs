mod cli;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use hubdigest::config::{self, ReportConfig};
use hubdigest::report::{render_report, terminal};
use hubdigest::source::{FilePublisher, FixtureSource, StdoutPublisher};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the digest itself
    let filter = if cli.verbose {
        EnvFilter::new("hubdigest=debug")
    } else if cli.quiet {
        EnvFilter::new("hubdigest=error")
    } else {
        EnvFilter::new("hubdigest=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    info!("hubdigest v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        cli::Commands::Render(args) => {
            let config = ReportConfig::resolve(args.config.as_deref())?;
            let sections = config.section_specs()?;
            let source = FixtureSource::load(&args.results)?;
            info!("Using insight results from {}", source);

            let report = render_report(
                &sections,
                &source,
                &config.header_text,
                &config.footer_text,
                &config.footer_url,
            )?;

            if let Some(ref path) = args.out {
                std::fs::write(path, &report.text)?;
                info!("Report written to {}", path.display());
            } else {
                let mut out = std::io::stdout().lock();
                out.write_all(report.text.as_bytes())?;
                out.flush()?;
            }
        }
        cli::Commands::Publish(args) => {
            let config = ReportConfig::resolve(args.config.as_deref())?;
            let source = FixtureSource::load(&args.results)?;
            info!("Using insight results from {}", source);

            let outcome = match args.outbox {
                Some(ref path) => hubdigest::run_digest(&config, &source, &FilePublisher::new(path))?,
                None => hubdigest::run_digest(&config, &source, &StdoutPublisher)?,
            };

            for link in &outcome.links {
                tracing::debug!("{} {}", link.label, link.url);
            }
            info!(
                "Digest with {} sections delivered to {}",
                outcome.sections, outcome.destination
            );
        }
        cli::Commands::Init => {
            config::init_config()?;
        }
        cli::Commands::ListSections(args) => {
            let config = ReportConfig::resolve(args.config.as_deref())?;
            terminal::print_sections(&config.section_specs()?);
        }
    }

    Ok(())
}
