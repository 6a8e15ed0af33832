//! Line-boundary reassembly.
//!
//! Raw chunks are cut at arbitrary byte offsets, so a record can straddle two
//! (or more) consecutive chunks. The [`Reassembler`] re-cuts the stream on
//! the last newline of each chunk, holding the tail over to the next one, so
//! that every segment it emits contains only complete, newline-terminated
//! records. Concatenating the emitted segments reproduces the input stream
//! byte for byte.

use anyhow::{Result, anyhow};
use crossbeam_channel::{Receiver, Sender};
use memchr::memrchr;

/// Splits a stream of raw chunks into valid segments.
///
/// Order-sensitive: chunks must be fed in file order, by a single caller.
#[derive(Default)]
pub struct Reassembler {
    remainder: Vec<u8>,
}

impl Reassembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb one chunk. Returns the valid segment it completes, if any.
    ///
    /// If the chunk contains a newline, the segment is the held-over
    /// remainder plus the chunk up to and including its last newline, and
    /// the bytes after it become the new remainder. A chunk with no newline
    /// produces nothing and is appended to the remainder whole, which is
    /// what handles a record spanning more than two chunks.
    pub fn push(&mut self, chunk: &[u8]) -> Option<Vec<u8>> {
        match memrchr(b'\n', chunk) {
            Some(last) => {
                let mut segment = std::mem::take(&mut self.remainder);
                segment.extend_from_slice(&chunk[..=last]);
                self.remainder.extend_from_slice(&chunk[last + 1..]);
                if segment.is_empty() { None } else { Some(segment) }
            }
            None => {
                self.remainder.extend_from_slice(chunk);
                None
            }
        }
    }

    /// Flush the final remainder at end-of-input.
    ///
    /// Non-empty only when the input does not end with a newline; the
    /// segment then carries an unterminated trailing record, which the
    /// scanner will silently drop.
    pub fn finish(self) -> Option<Vec<u8>> {
        if self.remainder.is_empty() {
            None
        } else {
            Some(self.remainder)
        }
    }
}

/// Drive a [`Reassembler`] over the raw-chunk queue until it closes, pushing
/// valid segments downstream. Closes the segment queue by dropping `tx`.
///
/// # Returns
/// The number of segments emitted.
///
/// # Errors
/// Returns an error if the segment queue closes early, i.e. every worker is
/// already gone.
pub fn reassemble(rx: Receiver<Vec<u8>>, tx: Sender<Vec<u8>>) -> Result<u64> {
    let mut reassembler = Reassembler::new();
    let mut segments = 0u64;
    for chunk in rx {
        if let Some(segment) = reassembler.push(&chunk) {
            tx.send(segment)
                .map_err(|_| anyhow!("segment queue closed before end of input"))?;
            segments += 1;
        }
    }
    if let Some(tail) = reassembler.finish() {
        tx.send(tail)
            .map_err(|_| anyhow!("segment queue closed before end of input"))?;
        segments += 1;
    }
    Ok(segments)
}
