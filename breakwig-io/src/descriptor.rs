use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use breakwig_core::errors::Result;

const CUSTOM_TRACKS_HEADER: &str = "#\n\
# You need to manually replace url to positive and negative strand tracks and \n\
# add each custom track individually to UCSC genome browser\n\
#\n";

///
/// Write the UCSC custom track descriptor for a positive/negative track pair.
///
/// # Arguments
/// - path: descriptor file to create
/// - track_name: name shown in the genome browser, suffixed with `(pos)`/`(neg)`
/// - track_type: `type=` of both tracks, e.g. `bigWig`
/// - pos_url: data url of the positive strand track
/// - neg_url: data url of the negative strand track
///
pub fn write_custom_tracks(
    path: &Path,
    track_name: &str,
    track_type: &str,
    pos_url: &str,
    neg_url: &str,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    writer.write_all(CUSTOM_TRACKS_HEADER.as_bytes())?;
    writeln!(
        writer,
        "track type={track_type} name=\"{track_name} (pos)\" description=\"This track represents joins to similar strand\" color=255,0,0, bigDataUrl={pos_url}"
    )?;
    writeln!(
        writer,
        "track type={track_type} name=\"{track_name} (neg)\" description=\"This track represents joins to opposite strand\" color=0,255,0, bigDataUrl={neg_url}"
    )?;

    writer.flush()?;
    Ok(())
}
