//! Collection coordinator - main orchestrator for one collection run
//!
//! Sequences the whole pipeline: acquire a session, fetch and isolate the
//! event log XML, parse it into rows, normalize, serialize, and hand the
//! content to the output sink. Every stage's failure propagates unhandled to
//! the CLI boundary; a failed run writes nothing.

use crate::adapters::modem::{parse_event_rows, ModemClient};
use crate::adapters::sink::{FileSink, OutputSink};
use crate::config::ModlogConfig;
use crate::core::normalize::normalize_rows;
use crate::core::serialize::serialize_events;
use crate::domain::result::Result;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Outcome of a completed collection run
#[derive(Debug)]
pub struct CollectSummary {
    /// Number of events written
    pub events: usize,

    /// Destination the content was (or would have been) written to
    pub output_path: PathBuf,

    /// Wall-clock duration of the run
    pub duration: Duration,

    /// Whether the file write was skipped
    pub dry_run: bool,
}

/// Collection coordinator
pub struct CollectCoordinator {
    config: ModlogConfig,
    client: ModemClient,
    sink: Box<dyn OutputSink>,
}

impl CollectCoordinator {
    /// Creates a coordinator writing through the default file sink
    pub fn new(config: ModlogConfig) -> Result<Self> {
        Self::with_sink(config, Box::new(FileSink::new()))
    }

    /// Creates a coordinator with a custom output sink
    pub fn with_sink(config: ModlogConfig, sink: Box<dyn OutputSink>) -> Result<Self> {
        let client = ModemClient::new(config.modem.clone())?;
        Ok(Self {
            config,
            client,
            sink,
        })
    }

    /// Executes one full collection cycle
    ///
    /// The network steps run strictly sequentially; each depends on the
    /// previous step's artifact. With `dry_run` set, everything up to and
    /// including serialization runs, but no file is written.
    pub async fn execute_collect(&self, dry_run: bool) -> Result<CollectSummary> {
        let start_time = Instant::now();

        tracing::info!(address = %self.client.address(), "Starting event log collection");

        let session_id = self.client.acquire_session().await?;
        let xml = self.client.fetch_event_log(&session_id).await?;

        let rows = parse_event_rows(
            &xml,
            &self.config.events.root_element,
            &self.config.events.row_element,
        )?;
        tracing::info!(rows = rows.len(), "Parsed event log rows");

        let events = normalize_rows(&rows, &self.config.events);
        let content = serialize_events(
            &events,
            &self.config.events.fields,
            self.config.output.format,
        )?;

        // The file name timestamp reflects the moment of the write, not the
        // start of the run.
        let output_path = self.output_path(Local::now());

        if dry_run {
            tracing::info!(
                path = %output_path.display(),
                events = events.len(),
                "Dry run - skipping file write"
            );
        } else {
            self.sink.write(&output_path, &content).await?;
        }

        Ok(CollectSummary {
            events: events.len(),
            output_path,
            duration: start_time.elapsed(),
            dry_run,
        })
    }

    fn output_path(&self, now: DateTime<Local>) -> PathBuf {
        let file_name = now
            .format(&self.config.output.file_name_pattern)
            .to_string();
        Path::new(&self.config.output.base_path).join(file_name)
    }
}
