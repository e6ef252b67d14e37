use num_traits::{PrimInt, Unsigned};

use super::IntervalIndex;
use breakwig_core::models::Interval;

/// A Binary Interval Search index.
///
/// From the journal article: <https://academic.oup.com/bioinformatics/article/29/1/1/273289>
///
/// Keeps the start and end coordinates in two independently sorted vectors, so the number of
/// intervals overlapping a query is `len - (ends <= start) - (starts >= stop)`, two binary
/// searches with no allocation. This is what window coverage needs: one count per window.
///
/// # Examples
///
/// ```
/// use breakwig_overlaprs::{Bits, IntervalIndex, Interval};
///
/// let breaks = vec![
///     Interval { start: 100u32, end: 150, val: () },
///     Interval { start: 200, end: 250, val: () },
///     Interval { start: 225, end: 275, val: () },
/// ];
///
/// let bits = Bits::build(breaks);
/// assert_eq!(bits.count(210, 240), 2);
/// assert_eq!(bits.count(150, 200), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Bits<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    /// Sorted start positions
    starts: Vec<I>,
    /// Sorted end positions
    ends: Vec<I>,
}

impl<I> IntervalIndex<I> for Bits<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    fn build<T>(intervals: Vec<Interval<I, T>>) -> Self
    where
        Self: Sized,
    {
        let (mut starts, mut ends): (Vec<I>, Vec<I>) =
            intervals.iter().map(|iv| (iv.start, iv.end)).unzip();
        starts.sort();
        ends.sort();

        Bits { starts, ends }
    }

    #[inline]
    fn count(&self, start: I, stop: I) -> usize {
        // intervals ending at or before `start` and intervals starting at or after `stop`
        // are the only ones that can't overlap
        let ended_before = self.ends.partition_point(|&e| e <= start);
        let starting_before_stop = self.starts.partition_point(|&s| s < stop);
        starting_before_stop.saturating_sub(ended_before)
    }

    fn len(&self) -> usize {
        self.starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn intervals() -> Vec<Interval<u32, &'static str>> {
        vec![
            Interval { start: 1, end: 5, val: "a" },
            Interval { start: 3, end: 7, val: "b" },
            Interval { start: 6, end: 10, val: "c" },
            Interval { start: 8, end: 12, val: "d" },
            Interval { start: 0, end: 40, val: "wide" },
        ]
    }

    fn naive_count(intervals: &[Interval<u32, &str>], start: u32, stop: u32) -> usize {
        intervals.iter().filter(|iv| iv.start < stop && iv.end > start).count()
    }

    #[rstest]
    fn test_build_and_len(intervals: Vec<Interval<u32, &'static str>>) {
        let bits = Bits::build(intervals.clone());
        assert_eq!(bits.len(), intervals.len());
        assert!(!bits.is_empty());
    }

    #[rstest]
    fn test_count_matches_naive_scan(intervals: Vec<Interval<u32, &'static str>>) {
        let bits = Bits::build(intervals.clone());
        for start in 0..45u32 {
            for stop in (start + 1)..46 {
                assert_eq!(
                    bits.count(start, stop),
                    naive_count(&intervals, start, stop),
                    "count mismatch for query ({start}, {stop})"
                );
            }
        }
    }

    #[rstest]
    fn test_unsorted_input(intervals: Vec<Interval<u32, &'static str>>) {
        let mut reversed = intervals.clone();
        reversed.reverse();
        let bits = Bits::build(reversed);
        assert_eq!(bits.count(9, 11), 3);
        assert_eq!(bits.count(40, 41), 0);
        assert_eq!(bits.count(39, 40), 1);
    }

    #[rstest]
    fn test_abutting_intervals_do_not_overlap() {
        let bits = Bits::build(vec![
            Interval { start: 0u32, end: 10, val: () },
            Interval { start: 20, end: 30, val: () },
        ]);
        assert_eq!(bits.count(10, 20), 0);
        assert_eq!(bits.count(9, 21), 2);
    }

    #[rstest]
    fn test_empty_index() {
        let bits: Bits<u32> = Bits::build::<()>(vec![]);
        assert!(bits.is_empty());
        assert_eq!(bits.count(0, 100), 0);
    }
}
