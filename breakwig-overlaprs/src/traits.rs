use num_traits::{PrimInt, Unsigned};

pub use breakwig_core::models::Interval;

/// A static index over a set of intervals answering half-open overlap queries.
///
/// An interval `[s, e)` overlaps a query `[start, end)` iff `s < end && e > start`.
/// Interval payloads are not kept.
pub trait IntervalIndex<I>: Send + Sync
where
    I: PrimInt + Unsigned + Send + Sync,
{
    fn build<T>(intervals: Vec<Interval<I, T>>) -> Self
    where
        Self: Sized;

    /// Number of stored intervals overlapping `[start, end)`.
    fn count(&self, start: I, end: I) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
