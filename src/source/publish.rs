use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::error::PublishError;
use crate::source::Publisher;

/// Print the digest on stdout, for dry runs and piping into other tools
#[derive(Debug, Default)]
pub struct StdoutPublisher;

impl Publisher for StdoutPublisher {
    fn publish(&self, destination: &str, message: &str) -> Result<(), PublishError> {
        info!("Publishing digest for {} to stdout", destination);
        let mut out = std::io::stdout().lock();
        out.write_all(message.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|source| PublishError::Io {
                path: PathBuf::from("<stdout>"),
                source,
            })
    }
}

/// Write the digest into a file (an outbox picked up by the mail relay)
#[derive(Debug)]
pub struct FilePublisher {
    path: PathBuf,
}

impl FilePublisher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FilePublisher { path: path.into() }
    }
}

impl Publisher for FilePublisher {
    fn publish(&self, destination: &str, message: &str) -> Result<(), PublishError> {
        std::fs::write(&self.path, message).map_err(|source| PublishError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(
            "Digest for {} written to {}",
            destination,
            self.path.display()
        );
        Ok(())
    }
}
