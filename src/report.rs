//! Sorted report rendering over the finalized global aggregate.

use crate::record::{EntityKey, Measure};
use crate::reduce::GlobalAggregate;
use std::fmt::Write;

/// The finalized result of a pipeline run: the global aggregate, read-only.
#[derive(Debug)]
pub struct Summary {
    stats: GlobalAggregate,
}

impl Summary {
    pub fn new(stats: GlobalAggregate) -> Self {
        Self { stats }
    }

    /// Read access to the per-entity aggregates.
    pub fn stats(&self) -> &GlobalAggregate {
        &self.stats
    }

    /// Total record count across all entities.
    pub fn total_count(&self) -> i64 {
        self.stats.values().map(|m| i64::from(m.count)).sum()
    }

    /// Entity keys in ascending byte-wise lexicographic order of their raw
    /// padded bytes.
    pub fn sorted_keys(&self) -> Vec<EntityKey> {
        let mut keys: Vec<EntityKey> = self.stats.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Render the full report: a brace-delimited listing with one
    /// `"<name>":[<min>,<max>,<avg>]` entry per line in key order, followed
    /// by the total record count on its own line.
    pub fn render(&self) -> String {
        let keys = self.sorted_keys();
        let mut out = String::with_capacity(keys.len() * 40 + 16);

        out.push_str("{\n");
        let mut iter = keys.iter().peekable();
        while let Some(key) = iter.next() {
            let m = &self.stats[key];
            write_entry(&mut out, key, m);
            if iter.peek().is_some() {
                out.push(',');
            }
            out.push('\n');
        }
        out.push_str("}\n");

        let _ = writeln!(out, "{}", self.total_count());
        out
    }
}

fn write_entry(out: &mut String, key: &EntityKey, m: &Measure) {
    // The mean must scale the sum down by 10 before dividing by the count;
    // reordering shifts the rounding of the last decimal for some inputs.
    let _ = write!(
        out,
        "\t\"{}\":[{:.1},{:.1},{:.1}]",
        key,
        f64::from(m.min) / 10.0,
        f64::from(m.max) / 10.0,
        m.sum as f64 / 10.0 / f64::from(m.count),
    );
}
