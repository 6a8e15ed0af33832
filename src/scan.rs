//! The per-worker byte scanner and its private aggregate.
//!
//! Each pool worker owns one [`Scanner`] and feeds it valid segments in
//! whatever order they arrive; segment boundaries always fall on record
//! boundaries, so scanner state never carries across segments in practice.
//! The scan is a single pass over raw bytes with no UTF-8 decoding, no
//! allocation per record, and no shared state.

use crate::record::{EntityKey, KEY_CAPACITY, Measure};
use anyhow::{Result, anyhow};
use crossbeam_channel::{Receiver, Sender};
use rustc_hash::FxHashMap;

/// A worker-private aggregate, published to the reducer when the worker's
/// segment queue is exhausted.
pub type PartialAggregate = FxHashMap<EntityKey, Measure>;

/// Byte-level state machine parsing `<name>;<value>\n` records into a
/// private per-entity aggregate.
///
/// The value is decimal text with one fractional digit; the `.` is skipped
/// and the surrounding digits concatenated, so the accumulator holds the
/// value ×10. Name bytes beyond [`KEY_CAPACITY`] are dropped, and `;` ends
/// the name by saturating the length to capacity — meaning a name that hits
/// the cap before its `;` leaves the machine already in value position, and
/// later name bytes are folded into the value as if they were digits. That
/// bucketing is deterministic and intentionally left as is; input
/// well-formedness is not this machine's problem.
pub struct Scanner {
    stats: PartialAggregate,
    key: EntityKey,
    key_len: usize,
    value: i16,
    negative: bool,
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            stats: PartialAggregate::with_capacity_and_hasher(10_000, Default::default()),
            key: EntityKey::empty(),
            key_len: 0,
            value: 0,
            negative: false,
        }
    }

    /// Scan one valid segment, folding every terminated record it contains
    /// into the aggregate. A trailing unterminated record (possible only in
    /// the reassembler's final flush) is left in scanner state and never
    /// registered.
    pub fn consume(&mut self, segment: &[u8]) {
        for &b in segment {
            match b {
                b'\n' => {
                    let value = if self.negative {
                        self.value.wrapping_neg()
                    } else {
                        self.value
                    };
                    self.stats
                        .entry(self.key)
                        .and_modify(|m| m.record(value))
                        .or_insert_with(|| Measure::new(value));

                    self.key = EntityKey::empty();
                    self.key_len = 0;
                    self.value = 0;
                    self.negative = false;
                }
                b';' => self.key_len = KEY_CAPACITY,
                b'.' => {}
                b'-' => self.negative = true,
                _ => {
                    if self.key_len < KEY_CAPACITY {
                        self.key_len = self.key.push_truncating(self.key_len, b);
                    } else {
                        // Value digit; wrapping keeps non-digit garbage
                        // deterministic instead of panicking.
                        self.value = self
                            .value
                            .wrapping_mul(10)
                            .wrapping_add(i16::from(b.wrapping_sub(b'0')));
                    }
                }
            }
        }
    }

    /// Freeze the aggregate for publication.
    pub fn into_partial(self) -> PartialAggregate {
        self.stats
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Pool worker loop: pull segments until the queue closes, then publish the
/// finished partial aggregate to the results queue.
///
/// # Errors
/// Returns an error if the results queue is already closed at publication.
pub fn run_worker(rx: Receiver<Vec<u8>>, tx: Sender<PartialAggregate>) -> Result<()> {
    let mut scanner = Scanner::new();
    for segment in rx {
        scanner.consume(&segment);
    }
    tx.send(scanner.into_partial())
        .map_err(|_| anyhow!("results queue closed before publication"))
}
