//! Core data model shared by the breakwig crates.
//!
//! Holds the breakpoint, window and coverage types, the generic [`models::Interval`] stored in
//! overlap indexes, the [`errors::BreakwigError`] type and a handful of file utilities.
pub mod errors;
pub mod models;
pub mod utils;

/// Constants used throughout the workspace.
pub mod consts {
    /// Default sliding window width in base pairs.
    pub const DEFAULT_WINDOW_SIZE: u32 = 100_000;
    /// Default distance between consecutive window starts.
    pub const DEFAULT_WINDOW_STEP: u32 = 10_000;
    /// Column names every breaks file header must carry.
    pub const BREAKS_COLUMNS: [&str; 6] = ["Chromosome", "Start", "End", "Feature", "Score", "Strand"];
    /// File stem of the positive strand track.
    pub const POS_TRACK_STEM: &str = "pos";
    /// File stem of the negative strand track.
    pub const NEG_TRACK_STEM: &str = "neg";
    /// Name of the genome browser track descriptor.
    pub const CUSTOM_TRACKS_FILE: &str = "custom_tracks.txt";
}
