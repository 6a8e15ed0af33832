//! # Ironstat
//!
//! A **parallel streaming aggregator** for semicolon-delimited measurement
//! files. Ironstat ingests `<entity>;<value>` records — values are decimal
//! text with exactly one fractional digit — and computes, per distinct
//! entity, the minimum, maximum, and average, plus the total record count,
//! emitting a lexicographically sorted textual report.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ironstat::{PipelineConfig, run};
//! # use anyhow::Result;
//!
//! # fn main() -> Result<()> {
//! let summary = run("measurements.txt", &PipelineConfig::default())?;
//! print!("{}", summary.render());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! Five components form a linear pipeline with one fan-out/fan-in stage,
//! connected by bounded queues:
//!
//! 1. **Chunk producer** ([`chunk`]) — reads the input in large fixed-size
//!    blocks on a dedicated thread.
//! 2. **Line-boundary reassembler** ([`segment`]) — re-cuts blocks on record
//!    boundaries so every downstream buffer holds only whole records.
//! 3. **Scanner pool** ([`scan`]) — N workers, each parsing its share of
//!    segments with a byte-level state machine into a private per-entity
//!    map. No shared state, no locks on the hot loop.
//! 4. **Reduce merger** ([`reduce`]) — streams worker partials into one
//!    global aggregate as they finish; the combine is associative and
//!    commutative, so arrival order is irrelevant.
//! 5. **Sort & format** ([`report`]) — renders the sorted report and total.
//!
//! Backpressure is entirely queue-based: a full queue blocks its producer,
//! an empty one blocks its consumer, so memory stays bounded regardless of
//! input size.
//!
//! ## Input semantics
//!
//! Ironstat does **not** validate its input. Entity names are truncated at
//! [`record::KEY_CAPACITY`] bytes (identical long names still aggregate into
//! one bucket), and malformed records are absorbed by the scanner's state
//! machine into deterministic — if semantically surprising — buckets. Values
//! are handled in ×10 fixed point end to end; floating point appears only at
//! report rendering.
//!
//! ## Errors
//!
//! A file that cannot be opened or read aborts the whole run before any
//! output is produced; there is no partial-report contract and no retry.
//!
//! ## Feature Flags
//!
//! - `metrics` *(default)* — the [`metrics`] instrumentation wrapper around
//!   the pipeline entry point.

pub mod chunk;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod pipeline;
pub mod record;
pub mod reduce;
pub mod report;
pub mod scan;
pub mod segment;
pub mod testing;

// General re-exports
pub use pipeline::{PipelineConfig, run};
pub use record::{EntityKey, KEY_CAPACITY, Measure};
pub use report::Summary;

// Gated re-exports
#[cfg(feature = "metrics")]
pub use metrics::{PipelineMetrics, run_instrumented};
