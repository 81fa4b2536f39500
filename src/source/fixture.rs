use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::FetchError;
use crate::report::section::ResultRow;
use crate::source::InsightSource;

/// One `GetInsightResults` response body
#[derive(Debug, Deserialize)]
struct InsightResponse {
    #[serde(rename = "InsightResults")]
    insight_results: InsightResults,
}

#[derive(Debug, Deserialize)]
struct InsightResults {
    #[serde(rename = "InsightArn")]
    insight_arn: String,

    #[serde(rename = "GroupByAttribute", default)]
    group_by_attribute: Option<String>,

    #[serde(rename = "ResultValues", default)]
    result_values: Vec<ResultRow>,
}

/// Insight results captured ahead of time, e.g. with
/// `aws securityhub get-insight-results` for each insight.
///
/// The file holds a JSON array of response bodies; each one is looked up by
/// its `InsightArn`.
#[derive(Debug)]
pub struct FixtureSource {
    path: PathBuf,
    results: HashMap<String, Vec<ResultRow>>,
}

impl FixtureSource {
    pub fn load(path: &Path) -> Result<Self, FetchError> {
        let content = std::fs::read_to_string(path).map_err(|source| FetchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &content)
    }

    pub fn from_json(path: &Path, content: &str) -> Result<Self, FetchError> {
        let responses: Vec<InsightResponse> =
            serde_json::from_str(content).map_err(|source| FetchError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut results = HashMap::new();
        for response in responses {
            let insight = response.insight_results;
            debug!(
                "Loaded {} rows for {} (grouped by {})",
                insight.result_values.len(),
                insight.insight_arn,
                insight.group_by_attribute.as_deref().unwrap_or("?")
            );
            if results.contains_key(&insight.insight_arn) {
                return Err(FetchError::DuplicateInsight {
                    path: path.to_path_buf(),
                    arn: insight.insight_arn,
                });
            }
            results.insert(insight.insight_arn, insight.result_values);
        }

        Ok(FixtureSource {
            path: path.to_path_buf(),
            results,
        })
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl InsightSource for FixtureSource {
    fn get_results(&self, insight_arn: &str) -> Result<Vec<ResultRow>, FetchError> {
        self.results
            .get(insight_arn)
            .cloned()
            .ok_or_else(|| FetchError::UnknownInsight(insight_arn.to_string()))
    }
}

impl std::fmt::Display for FixtureSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} insights)", self.path.display(), self.results.len())
    }
}
