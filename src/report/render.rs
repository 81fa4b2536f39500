use tracing::debug;

use crate::error::{ConfigError, ReportError};
use crate::report::line::{double_line, single_line};
use crate::report::section::{ResultRow, SectionSpec};
use crate::report::{RenderedReport, SectionLink};
use crate::source::InsightSource;

/// Title line of the digest, between the two banner rules
pub const HEADER_TEXT: &str = "Weekly Security Hub Report \n";

/// Closing link to the standards page of the console
pub const FOOTER_URL: &str = "https://console.aws.amazon.com/securityhub/home/standards#/standards";

/// Rows shown per section; anything past this is dropped silently
pub const MAX_ROWS: usize = 10;

pub const NO_RESULTS: &str = "NO RESULTS \n";

const ROW_DIVIDER: &str = "\t - \t";

/// Region segment (fourth field) of a colon-delimited ARN
pub fn region_from_arn(arn: &str) -> Result<&str, ConfigError> {
    match arn.split(':').nth(3) {
        Some(region) if !region.is_empty() => Ok(region),
        _ => Err(ConfigError::MalformedArn(arn.to_string())),
    }
}

/// Console link to one insight
pub fn deep_link(region: &str, insight_arn: &str) -> String {
    format!(
        "https://{region}.console.aws.amazon.com/securityhub/home?region={region}#/insights/{insight_arn}"
    )
}

/// Render one section table and return it together with its deep link.
///
/// `rows` is only read; reversal happens on the iterator.
pub fn format_section(spec: &SectionSpec, rows: &[ResultRow], region: &str) -> (String, String) {
    let mut block = String::new();

    block.push_str(&spec.label);
    block.push('\n');
    block.push_str(&single_line());

    if rows.is_empty() {
        block.push_str(NO_RESULTS);
    }

    let ordered: Box<dyn Iterator<Item = &ResultRow>> = if spec.reverse_sort {
        Box::new(rows.iter().rev())
    } else {
        Box::new(rows.iter())
    };

    for row in ordered.take(MAX_ROWS) {
        block.push_str(&row.count.to_string());
        block.push_str(ROW_DIVIDER);
        if spec.is_summary {
            block.push_str("TOTAL ");
            block.push_str(&row.group_label);
            block.push_str(" CHECKS");
        } else {
            block.push_str(&row.group_label);
        }
        block.push('\n');
    }

    block.push_str(&single_line());
    block.push_str(" \n");

    let link = deep_link(region, &spec.source_arn);
    block.push_str(&link);
    block.push_str(" \n\n");

    (block, link)
}

/// Fetch every section in order and assemble the full digest.
///
/// The region of the first section's ARN is used for every deep link.
/// The first failing fetch aborts the render.
pub fn render_report(
    sections: &[SectionSpec],
    source: &dyn InsightSource,
    header_text: &str,
    footer_text: &str,
    footer_url: &str,
) -> Result<RenderedReport, ReportError> {
    let region = match sections.first() {
        Some(first) => region_from_arn(&first.source_arn)?,
        None => "",
    };

    let mut text = String::new();
    text.push_str(&double_line());
    text.push_str(header_text);
    text.push_str(&double_line());
    text.push_str("\n\n");

    let mut links = Vec::with_capacity(sections.len());

    for spec in sections {
        let rows = source
            .get_results(&spec.source_arn)
            .map_err(|source| ReportError::Fetch {
                arn: spec.source_arn.clone(),
                source,
            })?;

        debug!(
            "Section '{}': {} rows{}",
            spec.label,
            rows.len(),
            if rows.len() > MAX_ROWS { " (truncated)" } else { "" }
        );

        let (block, url) = format_section(spec, &rows, region);
        text.push_str(&block);
        links.push(SectionLink {
            label: spec.label.clone(),
            url,
        });
    }

    text.push_str(footer_text);
    text.push('\n');
    text.push_str(&single_line());
    text.push_str(footer_url);

    Ok(RenderedReport { text, links })
}
