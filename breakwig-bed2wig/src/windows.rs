use log::debug;

use breakwig_core::errors::{BreakwigError, Result};
use breakwig_core::models::{ChromosomeExtent, Strand, Window};

/// Number of windows of width `size`, `step` apart, that fit in `span`.
///
/// `floor((span - size) / step) + 1` when `span >= size`, otherwise zero: a chromosome whose
/// observed span is narrower than one window gets no windows at all.
pub fn window_count(span: u32, size: u32, step: u32) -> u64 {
    if span < size || step == 0 {
        return 0;
    }
    (span - size) as u64 / step as u64 + 1
}

///
/// Generate the sliding windows of every extent, on both strands.
///
/// Per chromosome the positive strand windows come first, then the same `(start, end)` pairs
/// on the negative strand. Starts are `extent.start + k * step`; windows always have width
/// `size` and are never clipped.
///
/// # Arguments
/// - extents: chromosome extents, in the order windows should be emitted
/// - size: window width, must be positive
/// - step: distance between consecutive starts, must be positive
///
pub fn generate_windows(extents: &[ChromosomeExtent], size: u32, step: u32) -> Result<Vec<Window>> {
    if size == 0 || step == 0 {
        return Err(BreakwigError::InvalidWindowParameters(format!(
            "window size ({size}) and step ({step}) must both be positive"
        )));
    }

    let total: u64 = extents
        .iter()
        .map(|extent| 2 * window_count(extent.span(), size, step))
        .sum();
    let mut windows = Vec::with_capacity(total as usize);

    for extent in extents {
        let count = window_count(extent.span(), size, step);
        if count == 0 {
            debug!(
                "{}: span {} is narrower than the window size {}, no windows generated",
                extent.chr,
                extent.span(),
                size
            );
            continue;
        }

        for strand in Strand::BOTH {
            debug!("{} ({}): {} window(s)", extent.chr, strand, count);
            windows.extend((0..count).map(|k| {
                // bounded by extent.end, so it always fits in u32
                let start = (extent.start as u64 + k * step as u64) as u32;
                Window {
                    chr: extent.chr.clone(),
                    start,
                    end: start + size,
                    strand,
                }
            }));
        }
    }

    Ok(windows)
}
