//! Genome-wide, strand-aware overlap counting.
//!
//! [`StrandedGenomeIndex`] keeps one [`IntervalIndex`] per `(chromosome, strand)` pair, so a
//! query only ever sees breakpoints on its own chromosome and strand.
//!
//! ```
//! use breakwig_core::models::{BreakpointRecord, Strand};
//! use breakwig_overlaprs::{Bits, StrandedGenomeIndex};
//!
//! let records = vec![BreakpointRecord {
//!     chr: "chr1".to_string(),
//!     start: 150,
//!     end: 151,
//!     feature: "join".to_string(),
//!     score: 0.0,
//!     strand: Strand::Negative,
//! }];
//!
//! let index: StrandedGenomeIndex<Bits<u32>> = StrandedGenomeIndex::from_records(&records);
//! assert_eq!(index.count("chr1", Strand::Negative, 100, 200), 1);
//! assert_eq!(index.count("chr1", Strand::Positive, 100, 200), 0);
//! ```
use std::collections::HashMap;

use breakwig_core::models::{BreakpointRecord, Interval, Strand};

use crate::IntervalIndex;

/// Position of a strand's index in the per-chromosome pair.
fn slot(strand: Strand) -> usize {
    match strand {
        Strand::Positive => 0,
        Strand::Negative => 1,
    }
}

/// One overlap index per chromosome and strand. Both strands of a chromosome share a map entry,
/// the strand missing from the input gets an empty index.
pub struct StrandedGenomeIndex<X>
where
    X: IntervalIndex<u32>,
{
    index_maps: HashMap<String, [X; 2]>,
}

impl<X> StrandedGenomeIndex<X>
where
    X: IntervalIndex<u32>,
{
    pub fn from_records(records: &[BreakpointRecord]) -> Self {
        let mut intervals: HashMap<String, [Vec<Interval<u32, ()>>; 2]> = HashMap::default();

        for record in records {
            intervals.entry(record.chr.clone()).or_default()[slot(record.strand)].push(Interval {
                start: record.start,
                end: record.end,
                val: (),
            });
        }

        let index_maps = intervals
            .into_iter()
            .map(|(chr, [pos, neg])| (chr, [X::build(pos), X::build(neg)]))
            .collect();

        StrandedGenomeIndex { index_maps }
    }

    /// Number of indexed intervals on `chr`/`strand` overlapping `[start, end)`. Unknown
    /// chromosomes count zero.
    pub fn count(&self, chr: &str, strand: Strand, start: u32, end: u32) -> usize {
        self.index_maps
            .get(chr)
            .map_or(0, |indexes| indexes[slot(strand)].count(start, end))
    }

    /// Total number of indexed intervals.
    pub fn len(&self) -> usize {
        self.index_maps
            .values()
            .flat_map(|indexes| indexes.iter())
            .map(|index| index.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
