//! Output sink abstraction
//!
//! The collector hands its serialized content to an [`OutputSink`]; the
//! default [`FileSink`] writes it to the local filesystem, overwriting any
//! existing file at the destination. Write failures are not specially
//! handled and propagate as I/O errors.

use crate::domain::result::Result;
use async_trait::async_trait;
use std::path::Path;

/// Destination for serialized event log content
#[async_trait]
pub trait OutputSink: Send + Sync {
    /// Writes `content` to `path`, replacing any existing file
    async fn write(&self, path: &Path, content: &str) -> Result<()>;
}

/// Sink that writes to the local filesystem
#[derive(Debug, Default)]
pub struct FileSink;

impl FileSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputSink for FileSink {
    async fn write(&self, path: &Path, content: &str) -> Result<()> {
        tokio::fs::write(path, content).await?;
        tracing::info!(path = %path.display(), bytes = content.len(), "Wrote output file");
        Ok(())
    }
}
