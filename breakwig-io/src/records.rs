use std::io::BufRead;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use breakwig_core::consts::BREAKS_COLUMNS;
use breakwig_core::errors::{BreakwigError, Result};
use breakwig_core::models::BreakpointRecord;
use breakwig_core::utils::{chrom_from_filename, get_dynamic_reader};

///
/// Expand input patterns into concrete file paths.
///
/// Order is pattern order, then match order within a pattern. A pattern that matches nothing
/// is an error, so a typo never silently shrinks the input set.
///
/// # Arguments
/// - patterns: glob patterns or plain paths
///
pub fn expand_inputs<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let matches = glob::glob(pattern).map_err(|e| BreakwigError::InvalidGlob {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        let before = paths.len();
        for entry in matches {
            let path = entry.map_err(|e| BreakwigError::FileReadError(e.to_string()))?;
            if path.is_file() {
                paths.push(path);
            }
        }

        if paths.len() == before {
            return Err(BreakwigError::EmptyGlob(pattern.to_string()));
        }
    }

    Ok(paths)
}

///
/// Read one breaks file, keeping only the rows on the chromosome named in its file name.
///
/// The first line is the header and is skipped. Blank lines are ignored. A malformed data
/// row aborts the read with the file and line number.
///
/// # Arguments
/// - path: path to a tab separated breaks file, optionally gzipped
///
pub fn read_breaks_file(path: &Path) -> Result<Vec<BreakpointRecord>> {
    let chrom = chrom_from_filename(path)
        .ok_or_else(|| BreakwigError::ChromosomeNotInFilename(path.display().to_string()))?;

    let reader = get_dynamic_reader(path)?;

    let mut records = Vec::new();
    let mut dropped: usize = 0;
    let mut header_seen = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        if !header_seen {
            header_seen = true;
            let columns: Vec<&str> = line.split('\t').map(str::trim).collect();
            if columns != BREAKS_COLUMNS {
                warn!(
                    "Unexpected header in {}: {:?}. Columns are read as {:?}",
                    path.display(),
                    columns,
                    BREAKS_COLUMNS
                );
            }
            continue;
        }

        let record: BreakpointRecord =
            line.parse()
                .map_err(|reason| BreakwigError::RecordParseError {
                    path: path.display().to_string(),
                    line: idx + 1,
                    reason,
                })?;

        if record.chr == chrom {
            records.push(record);
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        warn!(
            "{}: dropped {} record(s) not on {}, the chromosome named in the file name",
            path.display(),
            dropped,
            chrom
        );
    }

    debug!("{}: {} record(s) on {}", path.display(), records.len(), chrom);

    Ok(records)
}

///
/// Load every breakpoint record matched by `patterns` into a single vector.
///
/// Records keep file order, then in-file row order.
///
pub fn load_breakpoints<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<BreakpointRecord>> {
    let paths = expand_inputs(patterns)?;

    let mut records = Vec::new();
    for path in paths.iter() {
        records.extend(read_breaks_file(path)?);
    }

    info!(
        "Loaded {} breakpoint record(s) from {} file(s)",
        records.len(),
        paths.len()
    );

    Ok(records)
}
