//! # Sliding-window breakpoint coverage.
//!
//! Loads stranded breakpoints, derives each chromosome's observed extent, lays fixed-width
//! windows over it on both strands, counts same-strand overlaps per window and writes the
//! signed counts as a positive and a negative track.
//!
//! ```no_run
//! use breakwig_bed2wig::{Bed2WigConfig, bed2wig_main};
//!
//! let config = Bed2WigConfig::new(
//!     vec!["breaks/sample_chr*_breaks.bed".to_string()],
//!     "hg38.chrom.sizes",
//!     "tracks/sample",
//! );
//! let tracks = bed2wig_main(&config).unwrap();
//! println!("{}", tracks.descriptor.display());
//! ```
pub mod config;
pub mod coverage;
pub mod extents;
pub mod windows;

use std::collections::HashMap;

use log::{info, warn};

use breakwig_core::errors::Result;
use breakwig_core::models::ChromosomeExtent;
use breakwig_core::utils::get_chrom_sizes;
use breakwig_io::{EmittedTracks, emit_tracks, load_breakpoints};

pub use config::Bed2WigConfig;
pub use coverage::aggregate_coverage;
pub use extents::{chrom_lengths, chromosome_extents};
pub use windows::{generate_windows, window_count};

pub mod consts {
    pub const BED2WIG_CMD: &str = "bed2wig";
    pub const DEFAULT_ZOOM_LEVELS: u32 = 5;
    /// Track name used when none is given and the output path has no usable base name.
    pub const DEFAULT_TRACK_NAME: &str = "breaks";
}

///
/// Run the whole pipeline: load, extents, windows, coverage, tracks.
///
/// Returns the paths of the two tracks and of the descriptor that were written.
///
pub fn bed2wig_main(config: &Bed2WigConfig) -> Result<EmittedTracks> {
    config.validate()?;

    let records = load_breakpoints(&config.inputs)?;

    let chrom_sizes = get_chrom_sizes(&config.chromsizes)?;
    let extents = chromosome_extents(&records);
    check_against_chrom_sizes(&extents, &chrom_sizes);

    let windows = generate_windows(&extents, config.window_size, config.window_step)?;
    info!(
        "Generated {} window(s) over {} chromosome(s) (size {}, step {})",
        windows.len(),
        extents.len(),
        config.window_size,
        config.window_step
    );

    let coverage = aggregate_coverage(windows, &records);

    let writer = config.output_type.writer(config.zoom);
    let lengths = chrom_lengths(&extents);
    let tracks = emit_tracks(
        writer.as_ref(),
        &config.output_dir,
        &config.resolved_track_name(),
        &lengths,
        coverage,
    )?;

    info!("Custom track descriptor written to {}", tracks.descriptor.display());

    Ok(tracks)
}

/// Warn about chromosomes the sizes table does not know, or whose breakpoints run past the
/// declared size. Tracks are keyed by extents regardless.
fn check_against_chrom_sizes(extents: &[ChromosomeExtent], chrom_sizes: &HashMap<String, u32>) {
    for extent in extents {
        match chrom_sizes.get(&extent.chr) {
            None => warn!("{} is not listed in the chromosome sizes table", extent.chr),
            Some(&size) if extent.end > size => warn!(
                "{}: breakpoints end at {}, past the declared size {}",
                extent.chr, extent.end, size
            ),
            Some(_) => {}
        }
    }
}
