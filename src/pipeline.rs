//! Pipeline assembly: stage threads, bounded queues, and the fan-out/fan-in
//! around the scanner pool.
//!
//! Data flows producer → reassembler → scanner pool → reducer → report.
//! Every hand-off is a bounded [`crossbeam_channel`] queue; a full queue
//! blocks its producer and an empty one blocks its consumer, which is the
//! only backpressure in the system. Order is preserved up to the segment
//! queue (single producer, single consumer) and deliberately abandoned
//! across the pool, because the reduce combine is associative and
//! commutative.

use crate::chunk::read_chunks;
use crate::reduce;
use crate::report::Summary;
use crate::scan::{PartialAggregate, run_worker};
use crate::segment::reassemble;
use anyhow::{Result, anyhow};
use crossbeam_channel::bounded;
use std::path::Path;
use std::thread::{self, JoinHandle};

/// Tunables for a pipeline run.
///
/// The defaults match the intended workload: block reads in the tens of
/// megabytes, shallow queues (backpressure, not buffering), one scanner per
/// logical CPU.
#[derive(Clone, Copy, Debug)]
pub struct PipelineConfig {
    /// Size of each block read by the chunk producer, in bytes.
    pub chunk_size: usize,
    /// Capacity of the raw-chunk and segment queues.
    pub queue_depth: usize,
    /// Number of scanner workers.
    pub workers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: 32 * 1024 * 1024,
            queue_depth: 8,
            workers: num_cpus::get().max(1),
        }
    }
}

/// A finished run plus the stage counters the instrumented wrapper reports.
pub(crate) struct RunOutcome {
    pub(crate) summary: Summary,
    pub(crate) chunks: u64,
    pub(crate) segments: u64,
}

/// Execute the full pipeline over `path` and return the finalized summary.
///
/// # Errors
/// Returns the first stage failure: an unopenable or unreadable input, a
/// queue torn down early, or a panicked stage thread. Any of these aborts
/// the run with no partial output.
pub fn run(path: impl AsRef<Path>, config: &PipelineConfig) -> Result<Summary> {
    execute(path, config).map(|outcome| outcome.summary)
}

pub(crate) fn execute(path: impl AsRef<Path>, config: &PipelineConfig) -> Result<RunOutcome> {
    let path = path.as_ref().to_path_buf();
    let workers = config.workers.max(1);

    let (raw_tx, raw_rx) = bounded::<Vec<u8>>(config.queue_depth.max(1));
    let (seg_tx, seg_rx) = bounded::<Vec<u8>>(config.queue_depth.max(1));
    let (out_tx, out_rx) = bounded::<PartialAggregate>(workers);

    let chunk_size = config.chunk_size.max(1);
    let producer = thread::spawn(move || read_chunks(path, chunk_size, raw_tx));
    let reassembler = thread::spawn(move || reassemble(raw_rx, seg_tx));

    let pool: Vec<JoinHandle<Result<()>>> = (0..workers)
        .map(|_| {
            let rx = seg_rx.clone();
            let tx = out_tx.clone();
            thread::spawn(move || run_worker(rx, tx))
        })
        .collect();
    // The spawned clones are the live ends; holding these would keep both
    // queues open and the reducer waiting forever.
    drop(seg_rx);
    drop(out_tx);

    // Reduce on this thread, streaming as workers publish.
    let global = reduce::drain(out_rx);

    let chunks = join_stage(producer, "chunk producer")?;
    let segments = join_stage(reassembler, "reassembler")?;
    for worker in pool {
        join_stage(worker, "scanner worker")?;
    }

    Ok(RunOutcome {
        summary: Summary::new(global),
        chunks,
        segments,
    })
}

fn join_stage<T>(handle: JoinHandle<Result<T>>, stage: &str) -> Result<T> {
    handle
        .join()
        .map_err(|_| anyhow!("{stage} thread panicked"))?
}
