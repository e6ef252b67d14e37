use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bigtools::beddata::BedParserStreamingIterator;
use bigtools::{BigWigWrite, InputSortType, Value};
use byteorder::{LittleEndian, WriteBytesExt};
use log::{debug, warn};
use tokio::runtime;

use breakwig_core::errors::{BreakwigError, Result};
use breakwig_core::models::CoverageWindow;

use crate::tracks::TrackWriter;

/// bigWig track written with `bigtools`.
///
/// bigWig data sections may not contain overlapping items, while sliding windows overlap
/// whenever the step is smaller than the window. Each window's count is therefore recorded
/// over `[start, next_start)` within its chromosome and the last window keeps its full width.
/// Windows that don't overlap their successor are written unchanged.
///
/// A strand without any window still gets a valid bigWig, holding the chromosome table and no
/// data (see [`write_empty_bigwig`]).
#[derive(Debug, Clone, Copy)]
pub struct BigWigTrackWriter {
    /// Number of zoom levels to build.
    pub zoom: u32,
}

impl TrackWriter for BigWigTrackWriter {
    fn extension(&self) -> &'static str {
        "bw"
    }

    fn track_type(&self) -> &'static str {
        "bigWig"
    }

    fn write_track(
        &self,
        path: &Path,
        chrom_lengths: &HashMap<String, u32>,
        windows: &[CoverageWindow],
    ) -> Result<()> {
        let track_error = |reason: String| BreakwigError::TrackWriteError {
            path: path.display().to_string(),
            reason,
        };

        if path.exists() {
            debug!("{} already exists. Overwriting existing file", path.display());
        }

        let values = non_overlapping_values(windows);
        for (chr, value) in values.iter() {
            match chrom_lengths.get(chr) {
                Some(length) if value.end <= *length => {}
                Some(length) => {
                    return Err(track_error(format!(
                        "window {}:{}-{} ends past the chromosome length {}",
                        chr, value.start, value.end, length
                    )));
                }
                None => {
                    return Err(track_error(format!(
                        "chromosome '{}' is not in the chromosome length table",
                        chr
                    )));
                }
            }
        }

        if values.is_empty() {
            debug!("{}: no windows, writing an empty track", path.display());
            return write_empty_bigwig(path, chrom_lengths);
        }

        let mut outb = create_bw_writer(path, chrom_lengths.clone(), self.zoom)?;
        outb.options.channel_size = 0;
        let runtime = runtime::Builder::new_current_thread().build()?;

        let data = BedParserStreamingIterator::wrap_iter(
            values.into_iter().map(Ok::<_, std::io::Error>),
            true,
        );

        if let Err(err) = outb.write(data, runtime) {
            // Delete the partially written file
            std::fs::remove_file(path).unwrap_or_else(|e| {
                warn!("Error deleting partial track {}: {}", path.display(), e);
            });
            return Err(track_error(err.to_string()));
        }

        Ok(())
    }
}

/// Creates the bigwig writer struct for use with the bigtools crate
fn create_bw_writer(
    path: &Path,
    chrom_map: HashMap<String, u32>,
    zoom: u32,
) -> Result<BigWigWrite<File>> {
    let mut outb = BigWigWrite::create_file(path, chrom_map).map_err(|e| {
        BreakwigError::TrackWriteError {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    })?;
    outb.options.max_zooms = zoom;
    outb.options.compress = true;
    outb.options.input_sort_type = InputSortType::START;
    outb.options.block_size = 256;
    outb.options.inmemory = false;

    Ok(outb)
}

const BIGWIG_MAGIC: u32 = 0x888F_FC26;
const CHROM_TREE_MAGIC: u32 = 0x78CA_8C91;
const CIR_TREE_MAGIC: u32 = 0x2468_ACE0;
const BBI_VERSION: u16 = 4;
const HEADER_SIZE: u64 = 64;
const TOTAL_SUMMARY_SIZE: u64 = 40;
const CIR_TREE_BLOCK_SIZE: u32 = 256;
const CIR_TREE_ITEMS_PER_SLOT: u32 = 1024;

///
/// Write a bigWig without data items.
///
/// `bigtools` refuses empty input, so the file is laid out by hand: header, all-zero total
/// summary, a single-leaf chromosome B+ tree (names sorted, ids in that order), a zero data
/// count and an R-tree index whose root leaf has no children. No zoom levels.
///
/// # Arguments
/// - path: file to create, overwritten if present
/// - chrom_lengths: chromosome table stored in the file
///
pub fn write_empty_bigwig(path: &Path, chrom_lengths: &HashMap<String, u32>) -> Result<()> {
    let mut chroms: Vec<(&String, &u32)> = chrom_lengths.iter().collect();
    chroms.sort();

    let item_count = u16::try_from(chroms.len()).map_err(|_| BreakwigError::TrackWriteError {
        path: path.display().to_string(),
        reason: format!("too many chromosomes for a single tree block: {}", chroms.len()),
    })?;
    let key_size = chroms.iter().map(|(chr, _)| chr.len()).max().unwrap_or(0);

    let chrom_tree_offset = HEADER_SIZE + TOTAL_SUMMARY_SIZE;
    let chrom_tree_size = 32 + 4 + chroms.len() as u64 * (key_size as u64 + 8);
    let full_data_offset = chrom_tree_offset + chrom_tree_size;
    let full_index_offset = full_data_offset + 8;

    let mut writer = BufWriter::new(File::create(path)?);

    // header
    writer.write_u32::<LittleEndian>(BIGWIG_MAGIC)?;
    writer.write_u16::<LittleEndian>(BBI_VERSION)?;
    writer.write_u16::<LittleEndian>(0)?; // zoom levels
    writer.write_u64::<LittleEndian>(chrom_tree_offset)?;
    writer.write_u64::<LittleEndian>(full_data_offset)?;
    writer.write_u64::<LittleEndian>(full_index_offset)?;
    writer.write_u16::<LittleEndian>(0)?; // field count
    writer.write_u16::<LittleEndian>(0)?; // defined field count
    writer.write_u64::<LittleEndian>(0)?; // autoSql offset
    writer.write_u64::<LittleEndian>(HEADER_SIZE)?; // total summary offset
    writer.write_u32::<LittleEndian>(0)?; // uncompress buffer size, 0 = uncompressed
    writer.write_u64::<LittleEndian>(0)?; // extension offset

    // total summary: bases covered, min, max, sum, sum of squares
    writer.write_u64::<LittleEndian>(0)?;
    for _ in 0..4 {
        writer.write_f64::<LittleEndian>(0.0)?;
    }

    // chromosome tree
    writer.write_u32::<LittleEndian>(CHROM_TREE_MAGIC)?;
    writer.write_u32::<LittleEndian>(u32::from(item_count.max(1)))?;
    writer.write_u32::<LittleEndian>(key_size as u32)?;
    writer.write_u32::<LittleEndian>(8)?; // chrom id + chrom size
    writer.write_u64::<LittleEndian>(item_count as u64)?;
    writer.write_u64::<LittleEndian>(0)?; // reserved
    writer.write_u8(1)?; // leaf
    writer.write_u8(0)?;
    writer.write_u16::<LittleEndian>(item_count)?;
    for (id, (chr, length)) in chroms.iter().enumerate() {
        let mut key = chr.as_bytes().to_vec();
        key.resize(key_size, 0);
        writer.write_all(&key)?;
        writer.write_u32::<LittleEndian>(id as u32)?;
        writer.write_u32::<LittleEndian>(**length)?;
    }

    // data section count
    writer.write_u64::<LittleEndian>(0)?;

    // R-tree index
    writer.write_u32::<LittleEndian>(CIR_TREE_MAGIC)?;
    writer.write_u32::<LittleEndian>(CIR_TREE_BLOCK_SIZE)?;
    writer.write_u64::<LittleEndian>(0)?; // item count
    for _ in 0..4 {
        writer.write_u32::<LittleEndian>(0)?; // start chrom, start base, end chrom, end base
    }
    writer.write_u64::<LittleEndian>(full_index_offset)?; // end of data
    writer.write_u32::<LittleEndian>(CIR_TREE_ITEMS_PER_SLOT)?;
    writer.write_u32::<LittleEndian>(0)?; // reserved
    writer.write_u8(1)?; // leaf
    writer.write_u8(0)?;
    writer.write_u16::<LittleEndian>(0)?;

    writer.write_u32::<LittleEndian>(BIGWIG_MAGIC)?;
    writer.flush()?;

    Ok(())
}

///
/// Turn sliding windows into non-overlapping bigWig values.
///
/// `windows` must hold each chromosome contiguously with ascending starts, which is how the
/// window generator emits them.
///
pub fn non_overlapping_values(windows: &[CoverageWindow]) -> Vec<(String, Value)> {
    windows
        .iter()
        .enumerate()
        .map(|(i, window)| {
            let end = match windows.get(i + 1) {
                Some(next) if next.chr == window.chr && next.start < window.end => next.start,
                _ => window.end,
            };
            debug_assert!(end > window.start, "windows must have ascending starts");

            (
                window.chr.clone(),
                Value {
                    start: window.start,
                    end,
                    value: window.breaks as f32,
                },
            )
        })
        .collect()
}
