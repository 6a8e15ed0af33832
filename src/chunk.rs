//! Chunk producer: sequential fixed-size block reads feeding the pipeline.

use anyhow::{Context, Result};
use crossbeam_channel::Sender;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read `path` into fixed-size blocks and push each non-empty block onto the
/// raw-chunk queue. The queue is closed by dropping `tx` on return.
///
/// Blocks may come back shorter than `chunk_size`; they are forwarded at
/// whatever length the read returned. Record boundaries are not considered
/// here at all — that is the reassembler's job.
///
/// # Returns
/// The number of chunks produced.
///
/// # Errors
/// Returns an error if the file cannot be opened or any read fails. Either
/// case is fatal for the whole run: the sender is dropped, downstream stages
/// drain what they already have, and the orchestrator surfaces this error
/// before any report is emitted.
pub fn read_chunks(path: impl AsRef<Path>, chunk_size: usize, tx: Sender<Vec<u8>>) -> Result<u64> {
    let path = path.as_ref();
    let mut file = File::open(path).with_context(|| format!("open {}", path.display()))?;

    let mut buf = vec![0u8; chunk_size];
    let mut chunks = 0u64;
    loop {
        let read = file
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if read == 0 {
            break;
        }
        if tx.send(buf[..read].to_vec()).is_err() {
            // Receiver is gone; nothing left to feed.
            break;
        }
        chunks += 1;
    }
    Ok(chunks)
}
