use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;

use breakwig_bed2wig::{Bed2WigConfig, bed2wig_main};
use breakwig_io::OutputType;

/// Split the shared positional list into `(inputs, chromsizes, output_path)`.
fn split_paths(paths: Vec<String>) -> Result<(Vec<String>, String, String)> {
    let mut inputs = paths;
    let output_path = inputs.pop();
    let chromsizes = inputs.pop();

    match (chromsizes, output_path) {
        (Some(chromsizes), Some(output_path)) if !inputs.is_empty() => {
            Ok((inputs, chromsizes, output_path))
        }
        _ => Err(anyhow!(
            "Expected at least one input, a chromosome sizes file and an output path"
        )),
    }
}

pub fn build_config(matches: &ArgMatches) -> Result<Bed2WigConfig> {
    let paths: Vec<String> = matches
        .get_many::<String>("paths")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let (inputs, chromsizes, output_path) = split_paths(paths)?;

    let mut config = Bed2WigConfig::new(inputs, chromsizes, output_path);
    config.track_name = matches.get_one::<String>("track-name").cloned();

    if let Some(size) = matches.get_one::<u32>("window-size") {
        config.window_size = *size;
    }
    if let Some(step) = matches.get_one::<u32>("window-step") {
        config.window_step = *step;
    }
    if let Some(zoom) = matches.get_one::<u32>("zoom") {
        config.zoom = *zoom;
    }
    if let Some(output_type) = matches.get_one::<String>("output-type") {
        config.output_type = output_type.parse::<OutputType>()?;
    }

    Ok(config)
}

pub fn run_bed2wig(matches: &ArgMatches) -> Result<()> {
    let config = build_config(matches)?;

    bed2wig_main(&config).with_context(|| {
        format!(
            "Failed to build tracks in {}",
            config.output_dir.display()
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::bed2wig::cli::create_bed2wig_cli;

    fn parse(args: &[&str]) -> Result<Bed2WigConfig> {
        let matches = create_bed2wig_cli().try_get_matches_from(args.iter().copied())?;
        build_config(&matches)
    }

    #[rstest]
    fn test_defaults() {
        let config = parse(&["bed2wig", "a_chr1_.bed", "b_chr2_.bed", "hg38.sizes", "out/HEK"]).unwrap();

        assert_eq!(config.inputs, vec!["a_chr1_.bed", "b_chr2_.bed"]);
        assert_eq!(config.chromsizes, PathBuf::from("hg38.sizes"));
        assert_eq!(config.output_dir, PathBuf::from("out/HEK"));
        assert_eq!(config.track_name, None);
        assert_eq!(config.window_size, 100_000);
        assert_eq!(config.window_step, 10_000);
        assert_eq!(config.output_type, OutputType::BigWig);
        assert_eq!(config.zoom, 5);
    }

    #[rstest]
    fn test_options() {
        let config = parse(&[
            "bed2wig",
            "breaks/*.bed",
            "hg38.sizes",
            "out",
            "--track-name",
            "my track",
            "-w",
            "5000",
            "--window-step",
            "500",
            "-o",
            "bedgraph",
            "-z",
            "2",
        ])
        .unwrap();

        assert_eq!(config.inputs, vec!["breaks/*.bed"]);
        assert_eq!(config.track_name.as_deref(), Some("my track"));
        assert_eq!(config.window_size, 5_000);
        assert_eq!(config.window_step, 500);
        assert_eq!(config.output_type, OutputType::BedGraph);
        assert_eq!(config.zoom, 2);
    }

    #[rstest]
    fn test_too_few_positionals() {
        assert!(parse(&["bed2wig", "hg38.sizes", "out"]).is_err());
    }

    #[rstest]
    fn test_unknown_output_type() {
        assert!(parse(&["bed2wig", "a.bed", "hg38.sizes", "out", "-o", "wig"]).is_err());
    }

    #[rstest]
    fn test_non_numeric_window_size() {
        assert!(parse(&["bed2wig", "a.bed", "hg38.sizes", "out", "-w", "1e5"]).is_err());
    }
}
