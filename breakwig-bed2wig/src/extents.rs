use std::collections::{BTreeMap, HashMap};

use breakwig_core::models::{BreakpointRecord, ChromosomeExtent};

///
/// Compute the `[min start, max end]` extent of every chromosome that has records.
///
/// Extents come back sorted by chromosome name. Chromosomes without records are absent.
///
pub fn chromosome_extents(records: &[BreakpointRecord]) -> Vec<ChromosomeExtent> {
    let mut spans: BTreeMap<&str, (u32, u32)> = BTreeMap::new();

    for record in records {
        spans
            .entry(record.chr.as_str())
            .and_modify(|(start, end)| {
                *start = (*start).min(record.start);
                *end = (*end).max(record.end);
            })
            .or_insert((record.start, record.end));
    }

    spans
        .into_iter()
        .map(|(chr, (start, end))| ChromosomeExtent {
            chr: chr.to_string(),
            start,
            end,
        })
        .collect()
}

/// Chromosome length table the tracks are keyed by: each chromosome ends at its extent end.
pub fn chrom_lengths(extents: &[ChromosomeExtent]) -> HashMap<String, u32> {
    extents
        .iter()
        .map(|extent| (extent.chr.clone(), extent.end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use breakwig_core::models::Strand;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn record(chr: &str, start: u32, end: u32) -> BreakpointRecord {
        BreakpointRecord {
            chr: chr.to_string(),
            start,
            end,
            feature: "f".to_string(),
            score: 0.0,
            strand: Strand::Positive,
        }
    }

    #[rstest]
    fn test_extents_take_min_start_and_max_end() {
        let records = vec![
            record("chr2", 500, 600),
            record("chr1", 100, 200),
            record("chr2", 50, 60),
            record("chr1", 150, 900),
        ];

        let extents = chromosome_extents(&records);
        assert_eq!(
            extents,
            vec![
                ChromosomeExtent {
                    chr: "chr1".to_string(),
                    start: 100,
                    end: 900
                },
                ChromosomeExtent {
                    chr: "chr2".to_string(),
                    start: 50,
                    end: 600
                },
            ]
        );
    }

    #[rstest]
    fn test_extents_empty() {
        assert!(chromosome_extents(&[]).is_empty());
    }

    #[rstest]
    fn test_chrom_lengths() {
        let extents = chromosome_extents(&[record("chrA", 0, 50_000), record("chrA", 60_000, 70_000)]);
        let lengths = chrom_lengths(&extents);
        assert_eq!(lengths.len(), 1);
        assert_eq!(lengths["chrA"], 70_000);
    }
}
