//! Streaming reduction of worker partials into the global aggregate.

use crate::record::{EntityKey, Measure};
use crate::scan::PartialAggregate;
use crossbeam_channel::Receiver;
use rustc_hash::FxHashMap;

/// The fully merged per-entity aggregate.
pub type GlobalAggregate = FxHashMap<EntityKey, Measure>;

/// Fold one partial aggregate into the global one.
///
/// Keys absent from the global map adopt the incoming record; present keys
/// combine via [`Measure::merge`]. The combine is associative and
/// commutative, so the fold order carries no meaning.
pub fn fold(global: &mut GlobalAggregate, partial: PartialAggregate) {
    for (key, measure) in partial {
        global
            .entry(key)
            .and_modify(|m| m.merge(&measure))
            .or_insert(measure);
    }
}

/// Drain the results queue, folding partials as workers publish them.
///
/// This runs concurrently with still-working scanners — it is a streaming
/// consumer, not a barrier — and returns once the queue closes, i.e. after
/// every worker has published.
pub fn drain(rx: Receiver<PartialAggregate>) -> GlobalAggregate {
    let mut global = GlobalAggregate::with_capacity_and_hasher(10_000, Default::default());
    for partial in rx {
        fold(&mut global, partial);
    }
    global
}
