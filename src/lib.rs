//! Weekly Security Hub insight digest.
//!
//! Fetches the results of a fixed list of custom insights, renders them into
//! a plain-text report with one table and console link per insight, and
//! publishes the report once.

pub mod config;
pub mod digest;
pub mod error;
pub mod report;
pub mod source;

pub use config::ReportConfig;
pub use digest::{run_digest, DigestOutcome};
pub use error::{ConfigError, FetchError, PublishError, ReportError};
pub use report::{render_report, RenderedReport, ResultRow, SectionSpec};
pub use source::{InsightSource, Publisher};
