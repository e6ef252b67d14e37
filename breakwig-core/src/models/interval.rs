use num_traits::{PrimInt, Unsigned};

/// A half-open range `[start, end)` carrying a payload.
///
/// This is the unit handed to overlap indexes when they are built.
#[derive(Debug, Clone)]
pub struct Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    pub start: I,
    pub end: I,
    pub val: T,
}
