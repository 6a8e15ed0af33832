//! Run instrumentation, kept out of the pipeline stages.
//!
//! The stages themselves carry no timing or counting beyond what they
//! already return; this module wraps the pipeline entry point and reports on
//! the run from the outside. Gated behind the `metrics` feature (on by
//! default).

use crate::pipeline::{self, PipelineConfig};
use crate::report::Summary;
use anyhow::Result;
use serde::Serialize;
use serde_json::{Value, json};
use std::path::Path;
use std::time::{Duration, Instant};

/// Counters and timing for one pipeline run.
#[derive(Clone, Debug, Serialize)]
pub struct PipelineMetrics {
    /// Wall-clock duration of the whole run.
    pub elapsed: Duration,
    /// Raw chunks produced by the reader.
    pub chunks: u64,
    /// Valid segments emitted by the reassembler.
    pub segments: u64,
    /// Scanner workers in the pool.
    pub workers: usize,
    /// Distinct entities in the final aggregate.
    pub entities: usize,
    /// Total records aggregated.
    pub records: i64,
}

impl PipelineMetrics {
    /// All metrics as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "elapsed_ms": self.elapsed.as_millis() as u64,
            "chunks": self.chunks,
            "segments": self.segments,
            "workers": self.workers,
            "entities": self.entities,
            "records": self.records,
        })
    }

    /// Print the metrics to stderr in a human-readable format.
    pub fn print(&self) {
        eprintln!("========== Pipeline Metrics ==========");
        eprintln!(
            "Execution Time: {:.3}s ({} ms)",
            self.elapsed.as_secs_f64(),
            self.elapsed.as_millis()
        );
        eprintln!("Chunks: {}", self.chunks);
        eprintln!("Segments: {}", self.segments);
        eprintln!("Workers: {}", self.workers);
        eprintln!("Entities: {}", self.entities);
        eprintln!("Records: {}", self.records);
        eprintln!("======================================");
    }
}

/// Run the pipeline and report on it.
///
/// Identical semantics to [`pipeline::run`]; the only addition is the
/// [`PipelineMetrics`] snapshot taken around it.
///
/// # Errors
/// Propagates any pipeline failure; no metrics survive a failed run.
pub fn run_instrumented(
    path: impl AsRef<Path>,
    config: &PipelineConfig,
) -> Result<(Summary, PipelineMetrics)> {
    let start = Instant::now();
    let outcome = pipeline::execute(path, config)?;
    let elapsed = start.elapsed();

    let metrics = PipelineMetrics {
        elapsed,
        chunks: outcome.chunks,
        segments: outcome.segments,
        workers: config.workers.max(1),
        entities: outcome.summary.stats().len(),
        records: outcome.summary.total_count(),
    };
    Ok((outcome.summary, metrics))
}
