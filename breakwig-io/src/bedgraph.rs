use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::warn;

use breakwig_core::errors::Result;
use breakwig_core::models::CoverageWindow;

use crate::tracks::TrackWriter;

/// Plain text track: one `chrom start end breaks` line per window, full window width.
///
/// Unlike bigWig, bedGraph lines may overlap, so sliding windows are written unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct BedGraphTrackWriter;

impl TrackWriter for BedGraphTrackWriter {
    fn extension(&self) -> &'static str {
        "bedGraph"
    }

    fn track_type(&self) -> &'static str {
        "bedGraph"
    }

    fn write_track(
        &self,
        path: &Path,
        chrom_lengths: &HashMap<String, u32>,
        windows: &[CoverageWindow],
    ) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        let mut unknown: HashSet<&str> = HashSet::new();

        for window in windows {
            if !chrom_lengths.contains_key(&window.chr) && unknown.insert(window.chr.as_str()) {
                warn!(
                    "{}: chromosome '{}' is not in the chromosome length table",
                    path.display(),
                    window.chr
                );
            }
            writeln!(writer, "{}", window.as_bedgraph_line())?;
        }

        writer.flush()?;
        Ok(())
    }
}
