use std::str::FromStr;

use crate::models::Strand;

///
/// One detected structural-variant join, as read from a breaks file.
///
/// Columns are fixed: `Chromosome Start End Feature Score Strand`.
///
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointRecord {
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub feature: String,
    pub score: f64,
    pub strand: Strand,
}

impl FromStr for BreakpointRecord {
    type Err = String;

    /// Parse one data line. The error is a human readable reason; callers attach file and
    /// line number.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 6 {
            return Err(format!("expected 6 tab separated fields, found {}", fields.len()));
        }

        let start = fields[1]
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid Start '{}': {}", fields[1], e))?;
        let end = fields[2]
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid End '{}': {}", fields[2], e))?;
        if start >= end {
            return Err(format!("Start ({}) must be smaller than End ({})", start, end));
        }

        let score = fields[4]
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid Score '{}': {}", fields[4], e))?;
        let strand = fields[5].trim().parse::<Strand>().map_err(|e| e.to_string())?;

        Ok(BreakpointRecord {
            chr: fields[0].to_string(),
            start,
            end,
            feature: fields[3].to_string(),
            score,
            strand,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_parse_record() {
        let record: BreakpointRecord = "chr1\t100\t101\tjoin_1\t0.5\t-".parse().unwrap();
        assert_eq!(
            record,
            BreakpointRecord {
                chr: "chr1".to_string(),
                start: 100,
                end: 101,
                feature: "join_1".to_string(),
                score: 0.5,
                strand: Strand::Negative,
            }
        );
    }

    #[rstest]
    #[case("chr1\t100\t101\tf\t0")]
    #[case("chr1\tabc\t101\tf\t0\t+")]
    #[case("chr1\t100\t-5\tf\t0\t+")]
    #[case("chr1\t100\t101\tf\tscore\t+")]
    #[case("chr1\t100\t101\tf\t0\t.")]
    #[case("chr1\t200\t200\tf\t0\t+")]
    #[case("chr1\t300\t200\tf\t0\t+")]
    fn test_parse_record_rejects_malformed(#[case] line: &str) {
        assert!(line.parse::<BreakpointRecord>().is_err());
    }
}
