//! # Input/Output for breakwig.
//!
//! Reading side: expanding input patterns and loading stranded breaks files
//! ([`load_breakpoints`]). Writing side: the [`TrackWriter`] seam with a bigWig and a bedGraph
//! implementation, plus the UCSC custom track descriptor written next to the tracks.
//!
pub mod bedgraph;
pub mod bigwig;
pub mod descriptor;
pub mod records;
pub mod tracks;

// re-expose core functions
pub use bedgraph::*;
pub use bigwig::*;
pub use descriptor::*;
pub use records::*;
pub use tracks::*;
