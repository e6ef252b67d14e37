use log::debug;

use breakwig_core::models::{BreakpointRecord, CoverageWindow, Window};
use breakwig_overlaprs::{Bits, StrandedGenomeIndex};

///
/// Count the same-strand breakpoints overlapping each window and sign the count by strand.
///
/// A breakpoint `[s, e)` overlaps window `[ws, we)` when `s < we && ws < e`. Windows come back in
/// the order they went in; windows without overlaps carry `0`.
///
/// # Arguments
/// - windows: windows to score
/// - records: all breakpoints, from every input file
///
pub fn aggregate_coverage(windows: Vec<Window>, records: &[BreakpointRecord]) -> Vec<CoverageWindow> {
    let index: StrandedGenomeIndex<Bits<u32>> = StrandedGenomeIndex::from_records(records);
    debug!("Indexed {} breakpoint(s)", index.len());

    windows
        .into_iter()
        .map(|window| {
            let count = index.count(&window.chr, window.strand, window.start, window.end);
            CoverageWindow::from_count(window, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use breakwig_core::models::Strand;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn record(chr: &str, start: u32, end: u32, strand: Strand) -> BreakpointRecord {
        BreakpointRecord {
            chr: chr.to_string(),
            start,
            end,
            feature: "join".to_string(),
            score: 0.0,
            strand,
        }
    }

    fn window(chr: &str, start: u32, end: u32, strand: Strand) -> Window {
        Window {
            chr: chr.to_string(),
            start,
            end,
            strand,
        }
    }

    #[rstest]
    fn test_counts_are_strand_matched_and_signed() {
        let records = vec![
            record("chr1", 150, 151, Strand::Negative),
            record("chr1", 10, 20, Strand::Positive),
            record("chr1", 15, 25, Strand::Positive),
        ];
        let windows = vec![
            window("chr1", 0, 100, Strand::Positive),
            window("chr1", 100, 200, Strand::Positive),
            window("chr1", 0, 100, Strand::Negative),
            window("chr1", 100, 200, Strand::Negative),
        ];

        let breaks: Vec<i64> = aggregate_coverage(windows, &records)
            .iter()
            .map(|w| w.breaks)
            .collect();
        assert_eq!(breaks, vec![2, 0, 0, -1]);
    }

    #[rstest]
    fn test_overlap_is_half_open() {
        let records = vec![record("chr1", 100, 200, Strand::Positive)];
        let windows = vec![
            window("chr1", 0, 100, Strand::Positive),
            window("chr1", 99, 101, Strand::Positive),
            window("chr1", 199, 300, Strand::Positive),
            window("chr1", 200, 300, Strand::Positive),
        ];

        let breaks: Vec<i64> = aggregate_coverage(windows, &records)
            .iter()
            .map(|w| w.breaks)
            .collect();
        assert_eq!(breaks, vec![0, 1, 1, 0]);
    }

    #[rstest]
    fn test_other_chromosomes_do_not_count() {
        let records = vec![record("chr2", 0, 1_000, Strand::Positive)];
        let coverage = aggregate_coverage(vec![window("chr1", 0, 1_000, Strand::Positive)], &records);
        assert_eq!(coverage[0].breaks, 0);
    }

    #[rstest]
    fn test_signs_follow_strand() {
        let records = vec![
            record("chr1", 0, 10, Strand::Positive),
            record("chr1", 0, 10, Strand::Negative),
            record("chr1", 5, 15, Strand::Negative),
        ];
        let windows = vec![
            window("chr1", 0, 20, Strand::Positive),
            window("chr1", 0, 20, Strand::Negative),
        ];

        for cov in aggregate_coverage(windows, &records) {
            match cov.strand {
                Strand::Positive => assert_eq!(cov.breaks, 1),
                Strand::Negative => assert_eq!(cov.breaks, -2),
            }
        }
    }
}
