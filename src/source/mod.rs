pub mod fixture;
pub mod publish;

use crate::error::{FetchError, PublishError};
use crate::report::section::ResultRow;

pub use fixture::FixtureSource;
pub use publish::{FilePublisher, StdoutPublisher};

/// Where insight results come from.
/// The report asks once per section, in section order, and never retries.
pub trait InsightSource {
    /// Grouped counts for one insight, in the order the backend returns them
    fn get_results(&self, insight_arn: &str) -> Result<Vec<ResultRow>, FetchError>;
}

impl<F> InsightSource for F
where
    F: Fn(&str) -> Result<Vec<ResultRow>, FetchError>,
{
    fn get_results(&self, insight_arn: &str) -> Result<Vec<ResultRow>, FetchError> {
        self(insight_arn)
    }
}

/// Where the finished digest goes. Called once per run with the whole document.
pub trait Publisher {
    fn publish(&self, destination: &str, message: &str) -> Result<(), PublishError>;
}
