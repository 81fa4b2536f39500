use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::report::render::{FOOTER_URL, HEADER_TEXT};
use crate::report::section::{default_sections, SectionSpec, DEFAULT_SECTION_COUNT};

pub const CONFIG_FILE_NAME: &str = ".hubdigest.toml";

/// Environment variable carrying extra footer text for the digest
pub const ENV_FOOTER_TEXT: &str = "AdditionalEmailFooterText";

/// Environment variable carrying the notification topic ARN
pub const ENV_DESTINATION: &str = "SNSTopic";

/// Environment variable holding the n-th insight ARN (1-based, two digits)
pub fn insight_env_var(n: usize) -> String {
    format!("ARNInsight{:02}", n)
}

/// Everything a digest run needs, resolved once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Free text printed above the closing rule
    pub footer_text: String,

    /// Insight ARNs for the standard seven-section layout
    #[serde(default)]
    pub section_identifiers: Vec<String>,

    /// Notification topic the digest is published to
    pub destination: String,

    /// Explicit section list; takes precedence over `section_identifiers`
    #[serde(default)]
    pub sections: Vec<SectionSpec>,

    #[serde(default = "default_header_text")]
    pub header_text: String,

    #[serde(default = "default_footer_url")]
    pub footer_url: String,
}

fn default_header_text() -> String {
    HEADER_TEXT.to_string()
}

fn default_footer_url() -> String {
    FOOTER_URL.to_string()
}

impl ReportConfig {
    /// Read the deployment variables from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup (the environment, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| lookup(key).ok_or_else(|| ConfigError::Missing(key.to_string()));

        let footer_text = require(ENV_FOOTER_TEXT)?;
        let section_identifiers = (1..=DEFAULT_SECTION_COUNT)
            .map(|n| require(&insight_env_var(n)))
            .collect::<Result<Vec<_>, _>>()?;
        let destination = require(ENV_DESTINATION)?;

        Ok(ReportConfig {
            footer_text,
            section_identifiers,
            destination,
            sections: Vec::new(),
            header_text: default_header_text(),
            footer_url: default_footer_url(),
        })
    }

    /// Parse a `.hubdigest.toml` file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str::<ReportConfig>(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load .hubdigest.toml from the given directory or its parents.
    /// `None` only when no file exists; a file that exists must parse.
    pub fn discover(start: &Path) -> Result<Option<Self>, ConfigError> {
        let Some(config_path) = find_config_file(start) else {
            return Ok(None);
        };
        debug!("Found config: {}", config_path.display());

        let config = Self::from_file(&config_path)?;
        info!("Loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    /// Resolve the config for a run: an explicit file, then a discovered
    /// `.hubdigest.toml`, then the process environment.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            let config = Self::from_file(path)?;
            info!("Loaded config from {}", path.display());
            return Ok(config);
        }

        let cwd = std::env::current_dir().map_err(|source| ConfigError::Read {
            path: PathBuf::from("."),
            source,
        })?;
        if let Some(config) = Self::discover(&cwd)? {
            return Ok(config);
        }

        info!("No {} found, reading configuration from environment", CONFIG_FILE_NAME);
        Self::from_env()
    }

    /// Sections to render, in print order
    pub fn section_specs(&self) -> Result<Vec<SectionSpec>, ConfigError> {
        if !self.sections.is_empty() {
            return Ok(self.sections.clone());
        }
        if self.section_identifiers.is_empty() {
            return Err(ConfigError::NoSections);
        }
        default_sections(&self.section_identifiers)
    }
}

/// Walk up from the start directory to find .hubdigest.toml
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let config = current.join(CONFIG_FILE_NAME);
        if config.exists() {
            return Some(config);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Create a default .hubdigest.toml in the current directory
pub fn init_config() -> Result<()> {
    let config_path = std::env::current_dir()?.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        println!("⚠️  {} already exists in this directory", CONFIG_FILE_NAME);
        return Ok(());
    }

    let default_config = r#"# Weekly Security Hub digest configuration

# Text printed at the end of the digest, above the standards link
footer_text = "Questions about this report? Contact the security team."

# SNS topic the digest is published to
destination = "arn:aws:sns:us-east-1:111122223333:weekly-security-report"

# The seven custom insights of the standard layout, in order:
#   1. FSBP security checks (summary)
#   2. FSBP failed checks by severity
#   3. GuardDuty findings by severity
#   4. IAM Access Analyzer findings by severity
#   5. Unresolved findings by severity
#   6. New findings in the last 7 days
#   7. Top 10 resource types with findings
# Deep links use the region of the first insight.
section_identifiers = [
    "arn:aws:securityhub:us-east-1:111122223333:insight/111122223333/custom/00000000-0000-0000-0000-000000000001",
    "arn:aws:securityhub:us-east-1:111122223333:insight/111122223333/custom/00000000-0000-0000-0000-000000000002",
    "arn:aws:securityhub:us-east-1:111122223333:insight/111122223333/custom/00000000-0000-0000-0000-000000000003",
    "arn:aws:securityhub:us-east-1:111122223333:insight/111122223333/custom/00000000-0000-0000-0000-000000000004",
    "arn:aws:securityhub:us-east-1:111122223333:insight/111122223333/custom/00000000-0000-0000-0000-000000000005",
    "arn:aws:securityhub:us-east-1:111122223333:insight/111122223333/custom/00000000-0000-0000-0000-000000000006",
    "arn:aws:securityhub:us-east-1:111122223333:insight/111122223333/custom/00000000-0000-0000-0000-000000000007",
]

# Or list sections explicitly instead (replaces section_identifiers):
# [[sections]]
# label = "Unresolved findings by severity:"
# arn = "arn:aws:securityhub:us-east-1:111122223333:insight/..."
# reverse_sort = true
# summary = false
"#;

    std::fs::write(&config_path, default_config)?;
    println!("✅ Created {}", CONFIG_FILE_NAME);
    println!("   Replace the insight ARNs with your own.");

    Ok(())
}
