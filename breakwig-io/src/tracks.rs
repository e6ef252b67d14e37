use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;

use breakwig_core::consts::{CUSTOM_TRACKS_FILE, NEG_TRACK_STEM, POS_TRACK_STEM};
use breakwig_core::errors::{BreakwigError, Result};
use breakwig_core::models::{CoverageWindow, Strand};

use crate::bedgraph::BedGraphTrackWriter;
use crate::bigwig::BigWigTrackWriter;
use crate::descriptor::write_custom_tracks;

pub trait TrackWriter {
    /// File extension of the tracks this writer produces, without the dot.
    fn extension(&self) -> &'static str;

    /// Track `type=` value announced in the genome browser descriptor.
    fn track_type(&self) -> &'static str;

    ///
    /// Serialize one strand's coverage windows.
    ///
    /// # Arguments
    /// - path: file to create, overwritten if present
    /// - chrom_lengths: chromosome name to length table the track is keyed by
    /// - windows: windows of a single strand, each chromosome contiguous and start-sorted
    fn write_track(
        &self,
        path: &Path,
        chrom_lengths: &HashMap<String, u32>,
        windows: &[CoverageWindow],
    ) -> Result<()>;
}

/// Output formats understood by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    BigWig,
    BedGraph,
}

impl OutputType {
    pub fn writer(&self, zoom: u32) -> Box<dyn TrackWriter> {
        match self {
            OutputType::BigWig => Box::new(BigWigTrackWriter { zoom }),
            OutputType::BedGraph => Box::new(BedGraphTrackWriter),
        }
    }
}

impl FromStr for OutputType {
    type Err = BreakwigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bigwig" | "bw" => Ok(OutputType::BigWig),
            "bedgraph" => Ok(OutputType::BedGraph),
            _ => Err(BreakwigError::UnknownOutputType(s.to_string())),
        }
    }
}

/// Files written by [`emit_tracks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedTracks {
    pub pos: PathBuf,
    pub neg: PathBuf,
    pub descriptor: PathBuf,
}

///
/// Split coverage windows by strand and write the positive track, the negative track and the
/// genome browser descriptor into `output_dir`.
///
/// The directory is created when missing; an existing one is reused and its track files are
/// overwritten.
///
pub fn emit_tracks(
    writer: &dyn TrackWriter,
    output_dir: &Path,
    track_name: &str,
    chrom_lengths: &HashMap<String, u32>,
    windows: Vec<CoverageWindow>,
) -> Result<EmittedTracks> {
    std::fs::create_dir_all(output_dir)?;

    let (pos_windows, neg_windows): (Vec<CoverageWindow>, Vec<CoverageWindow>) = windows
        .into_iter()
        .partition(|w| w.strand == Strand::Positive);

    let pos_name = format!("{}.{}", POS_TRACK_STEM, writer.extension());
    let neg_name = format!("{}.{}", NEG_TRACK_STEM, writer.extension());

    let pos = output_dir.join(&pos_name);
    writer.write_track(&pos, chrom_lengths, &pos_windows)?;
    info!("Wrote {} positive strand window(s) to {}", pos_windows.len(), pos.display());

    let neg = output_dir.join(&neg_name);
    writer.write_track(&neg, chrom_lengths, &neg_windows)?;
    info!("Wrote {} negative strand window(s) to {}", neg_windows.len(), neg.display());

    let descriptor = output_dir.join(CUSTOM_TRACKS_FILE);
    write_custom_tracks(&descriptor, track_name, writer.track_type(), &pos_name, &neg_name)?;

    Ok(EmittedTracks {
        pos,
        neg,
        descriptor,
    })
}
