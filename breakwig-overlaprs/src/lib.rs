//! Interval overlap counting for breakwig.
//!
//! Coverage aggregation only needs one question answered per window: how many breakpoints on
//! the same chromosome and strand overlap it? This crate answers it behind the
//! [`IntervalIndex`] trait, so the windowing code never depends on a concrete index.
//!
//! ```rust
//! use breakwig_overlaprs::{Bits, IntervalIndex, Interval};
//!
//! let breaks = vec![
//!     Interval { start: 100u32, end: 101, val: () },
//!     Interval { start: 150, end: 151, val: () },
//!     Interval { start: 400, end: 401, val: () },
//! ];
//!
//! let index = Bits::build(breaks);
//! assert_eq!(index.count(0, 200), 2);
//! ```

/// Binary Interval Search implementation.
///
/// See [`Bits`] for details.
pub mod bits;

/// Per chromosome and strand indexing of breakpoint records.
pub mod stranded_index;

/// Core traits for overlap operations.
///
/// See [`IntervalIndex`] for the main trait.
pub mod traits;

// re-exports
pub use self::bits::Bits;
pub use self::stranded_index::StrandedGenomeIndex;
pub use self::traits::{Interval, IntervalIndex};
