use crate::models::Strand;

///
/// Observed `[min start, max end]` span of the breakpoints on one chromosome.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromosomeExtent {
    pub chr: String,
    pub start: u32,
    pub end: u32,
}

impl ChromosomeExtent {
    pub fn span(&self) -> u32 {
        self.end - self.start
    }
}

/// A fixed-width aggregation bucket on one strand of one chromosome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub strand: Strand,
}

/// A window together with its sign-encoded breakpoint count.
///
/// `breaks` is `>= 0` on the positive strand and `<= 0` on the negative strand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageWindow {
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub strand: Strand,
    pub breaks: i64,
}

impl CoverageWindow {
    /// Attach a raw (unsigned) overlap count to `window`, applying the strand sign.
    pub fn from_count(window: Window, count: usize) -> Self {
        let breaks = window.strand.sign() * count as i64;
        CoverageWindow {
            chr: window.chr,
            start: window.start,
            end: window.end,
            strand: window.strand,
            breaks,
        }
    }

    ///
    /// Get bedGraph line of the window (`chrom start end value`)
    ///
    pub fn as_bedgraph_line(&self) -> String {
        format!("{}\t{}\t{}\t{}", self.chr, self.start, self.end, self.breaks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn window(strand: Strand) -> Window {
        Window {
            chr: "chr2".to_string(),
            start: 10,
            end: 30,
            strand,
        }
    }

    #[rstest]
    #[case(Strand::Positive, 3, 3)]
    #[case(Strand::Negative, 3, -3)]
    #[case(Strand::Negative, 0, 0)]
    fn test_from_count_signs_by_strand(
        #[case] strand: Strand,
        #[case] count: usize,
        #[case] expected: i64,
    ) {
        let cov = CoverageWindow::from_count(window(strand), count);
        assert_eq!(cov.breaks, expected);
        assert_eq!((cov.start, cov.end), (10, 30));
    }

    #[rstest]
    fn test_bedgraph_line() {
        let cov = CoverageWindow::from_count(window(Strand::Negative), 2);
        assert_eq!(cov.as_bedgraph_line(), "chr2\t10\t30\t-2");
    }

    #[rstest]
    fn test_extent_span() {
        let extent = ChromosomeExtent {
            chr: "chr2".to_string(),
            start: 1_000,
            end: 211_000,
        };
        assert_eq!(extent.span(), 210_000);
    }
}
