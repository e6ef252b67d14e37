pub mod breakpoint;
pub mod interval;
pub mod strand;
pub mod window;

// re-export for cleaner imports
pub use self::breakpoint::BreakpointRecord;
pub use self::interval::Interval;
pub use self::strand::Strand;
pub use self::window::{ChromosomeExtent, CoverageWindow, Window};
