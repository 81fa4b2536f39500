use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One report section, backed by one insight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    /// Heading printed above the section table
    pub label: String,

    /// Insight ARN, used both for the query and the console deep link
    #[serde(rename = "arn")]
    pub source_arn: String,

    /// Display rows in the opposite order to the one the API returned
    #[serde(default)]
    pub reverse_sort: bool,

    /// Decorate row labels as `TOTAL <label> CHECKS`
    #[serde(default, rename = "summary")]
    pub is_summary: bool,
}

impl SectionSpec {
    pub fn new(label: impl Into<String>, source_arn: impl Into<String>) -> Self {
        SectionSpec {
            label: label.into(),
            source_arn: source_arn.into(),
            reverse_sort: false,
            is_summary: false,
        }
    }

    pub fn reversed(mut self) -> Self {
        self.reverse_sort = true;
        self
    }

    pub fn summary(mut self) -> Self {
        self.is_summary = true;
        self
    }
}

/// A single count for one group-by value, as the findings API returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "Count")]
    pub count: u64,

    #[serde(rename = "GroupByAttributeValue")]
    pub group_label: String,
}

impl ResultRow {
    pub fn new(count: u64, group_label: impl Into<String>) -> Self {
        ResultRow {
            count,
            group_label: group_label.into(),
        }
    }
}

/// Placement of one section in the standard weekly layout
struct LayoutEntry {
    label: &'static str,
    reverse_sort: bool,
    is_summary: bool,
}

/// The seven insights of the weekly report, in print order.
/// Severity-grouped insights come back lowest-first and are flipped.
const DEFAULT_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry {
        label: "AWS Foundational Security Best Practices security checks:",
        reverse_sort: false,
        is_summary: true,
    },
    LayoutEntry {
        label: "AWS Foundational Security Best Practices failed security checks by severity:",
        reverse_sort: true,
        is_summary: false,
    },
    LayoutEntry {
        label: "GuardDuty threat detection findings by severity:",
        reverse_sort: true,
        is_summary: false,
    },
    LayoutEntry {
        label: "IAM Access Analyzer findings by severity:",
        reverse_sort: true,
        is_summary: false,
    },
    LayoutEntry {
        label: "Unresolved findings by severity:",
        reverse_sort: true,
        is_summary: false,
    },
    LayoutEntry {
        label: "New findings in the last 7 days:",
        reverse_sort: false,
        is_summary: false,
    },
    LayoutEntry {
        label: "Top 10 Resource Types with findings:",
        reverse_sort: false,
        is_summary: false,
    },
];

/// Number of insight identifiers the standard layout expects
pub const DEFAULT_SECTION_COUNT: usize = DEFAULT_LAYOUT.len();

/// Pair the configured insight ARNs with the standard labels and flags.
pub fn default_sections(identifiers: &[String]) -> Result<Vec<SectionSpec>, ConfigError> {
    if identifiers.len() != DEFAULT_SECTION_COUNT {
        return Err(ConfigError::SectionCount {
            expected: DEFAULT_SECTION_COUNT,
            found: identifiers.len(),
        });
    }

    Ok(DEFAULT_LAYOUT
        .iter()
        .zip(identifiers)
        .map(|(entry, arn)| SectionSpec {
            label: entry.label.to_string(),
            source_arn: arn.clone(),
            reverse_sort: entry.reverse_sort,
            is_summary: entry.is_summary,
        })
        .collect())
}
