use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::LazyLock;

use flate2::read::MultiGzDecoder;
use regex::Regex;

use crate::errors::{BreakwigError, Result};

// greedy prefix: the last `chr<token>_` in the name wins
static CHROM_IN_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^.*(chr[^_]+)_").expect("valid chromosome pattern"));

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)
        .map_err(|e| BreakwigError::FileReadError(format!("{}: {}", path.display(), e)))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Infer the chromosome a breaks file belongs to from its file name.
///
/// Looks for `chr<token>` directly followed by an underscore (case-insensitive) in the base
/// name and returns it lower-cased, e.g. `sample_ChrX_breaks.bed` gives `chrx`. Returns `None`
/// when the name carries no such token.
///
pub fn chrom_from_filename(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    CHROM_IN_FILENAME
        .captures(&name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
}

///
/// Read a chromosome sizes table (`chrom<whitespace>size` per line).
///
/// Blank lines are skipped. Any other line that does not hold a name and an unsigned size is
/// an error.
///
pub fn get_chrom_sizes<T: AsRef<Path>>(path: T) -> Result<HashMap<String, u32>> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;

    let mut chrom_sizes: HashMap<String, u32> = HashMap::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let parse_error = |reason: String| BreakwigError::ChromSizesParseError {
            path: path.display().to_string(),
            line: idx + 1,
            reason,
        };

        let mut parts = line.split_whitespace();
        let chrom = parts
            .next()
            .ok_or_else(|| parse_error("missing chromosome name".to_string()))?;
        let size = parts
            .next()
            .ok_or_else(|| parse_error("missing chromosome size".to_string()))?
            .parse::<u32>()
            .map_err(|e| parse_error(e.to_string()))?;

        chrom_sizes.insert(chrom.to_string(), size);
    }

    Ok(chrom_sizes)
}
