use std::path::PathBuf;

/// Failure to obtain the result rows of one insight
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("no results recorded for insight '{0}'")]
    UnknownInsight(String),

    #[error("failed to read insight results from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed insight results in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("insight '{arn}' appears more than once in {path}")]
    DuplicateInsight { path: PathBuf, arn: String },

    #[error("findings query failed: {0}")]
    Transport(String),
}

/// Failure to hand the finished digest to the notification channel
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("failed to write digest to {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("publish to '{destination}' rejected: {reason}")]
    Rejected { destination: String, reason: String },
}

/// A required configuration value is absent or unusable
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required configuration value '{0}'")]
    Missing(String),

    #[error("expected {expected} insight identifiers, found {found}")]
    SectionCount { expected: usize, found: usize },

    #[error("insight identifier '{0}' has no region component")]
    MalformedArn(String),

    #[error("no report sections configured")]
    NoSections,

    #[error("failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Everything that can stop a digest run. Nothing is retried and no
/// partial report is produced.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("fetching insight '{arn}' failed")]
    Fetch {
        arn: String,
        #[source]
        source: FetchError,
    },

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
