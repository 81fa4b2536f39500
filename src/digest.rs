use tracing::info;

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::report::{render_report, SectionLink};
use crate::source::{InsightSource, Publisher};

/// What one successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestOutcome {
    pub destination: String,
    pub sections: usize,
    pub bytes: usize,
    pub links: Vec<SectionLink>,
}

/// Render the digest for `config` and publish it once.
///
/// Nothing is published unless every section rendered.
pub fn run_digest(
    config: &ReportConfig,
    source: &dyn InsightSource,
    publisher: &dyn Publisher,
) -> Result<DigestOutcome, ReportError> {
    let sections = config.section_specs()?;
    info!("Rendering {} sections", sections.len());

    let report = render_report(
        &sections,
        source,
        &config.header_text,
        &config.footer_text,
        &config.footer_url,
    )?;

    publisher.publish(&config.destination, &report.text)?;
    info!("Published {} bytes to {}", report.text.len(), config.destination);

    Ok(DigestOutcome {
        destination: config.destination.clone(),
        sections: sections.len(),
        bytes: report.text.len(),
        links: report.links,
    })
}
