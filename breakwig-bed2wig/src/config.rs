use std::path::{Path, PathBuf};

use breakwig_core::consts::{DEFAULT_WINDOW_SIZE, DEFAULT_WINDOW_STEP};
use breakwig_core::errors::{BreakwigError, Result};
use breakwig_io::OutputType;

use crate::consts::{DEFAULT_TRACK_NAME, DEFAULT_ZOOM_LEVELS};

/// Everything a single bed2wig run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bed2WigConfig {
    /// Glob patterns or paths of the breaks files.
    pub inputs: Vec<String>,
    pub chromsizes: PathBuf,
    pub output_dir: PathBuf,
    /// Falls back to the output directory's base name when `None`.
    pub track_name: Option<String>,
    pub window_size: u32,
    pub window_step: u32,
    pub output_type: OutputType,
    /// Zoom levels of the bigWig tracks; ignored for bedGraph.
    pub zoom: u32,
}

impl Bed2WigConfig {
    pub fn new(inputs: Vec<String>, chromsizes: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        Bed2WigConfig {
            inputs,
            chromsizes: chromsizes.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            track_name: None,
            window_size: DEFAULT_WINDOW_SIZE,
            window_step: DEFAULT_WINDOW_STEP,
            output_type: OutputType::BigWig,
            zoom: DEFAULT_ZOOM_LEVELS,
        }
    }

    ///
    /// Check the run parameters before any file is touched.
    ///
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(BreakwigError::InvalidWindowParameters(
                "window size must be a positive integer".to_string(),
            ));
        }
        if self.window_step == 0 {
            return Err(BreakwigError::InvalidWindowParameters(
                "window step must be a positive integer".to_string(),
            ));
        }
        if self.inputs.is_empty() {
            return Err(BreakwigError::EmptyGlob(
                "no input files were given".to_string(),
            ));
        }
        Ok(())
    }

    /// Name announced in the track descriptor.
    pub fn resolved_track_name(&self) -> String {
        if let Some(name) = &self.track_name {
            return name.clone();
        }

        self.output_dir
            .components()
            .next_back()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .filter(|name| !name.is_empty() && name != "." && name != "..")
            .unwrap_or_else(|| DEFAULT_TRACK_NAME.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn config() -> Bed2WigConfig {
        Bed2WigConfig::new(vec!["breaks_chr1_*.bed".to_string()], "hg38.chrom.sizes", "out/HEK293")
    }

    #[rstest]
    fn test_defaults() {
        let config = config();
        assert_eq!(config.window_size, 100_000);
        assert_eq!(config.window_step, 10_000);
        assert_eq!(config.output_type, OutputType::BigWig);
        assert_eq!(config.zoom, 5);
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case(0, 10)]
    #[case(10, 0)]
    fn test_zero_window_parameters_are_rejected(#[case] size: u32, #[case] step: u32) {
        let mut config = config();
        config.window_size = size;
        config.window_step = step;
        assert!(matches!(
            config.validate(),
            Err(BreakwigError::InvalidWindowParameters(_))
        ));
    }

    #[rstest]
    #[case("out/HEK293", "HEK293")]
    #[case("out/HEK293/", "HEK293")]
    #[case("tracks", "tracks")]
    #[case(".", "breaks")]
    fn test_track_name_defaults_to_dir_name(#[case] dir: &str, #[case] expected: &str) {
        let mut config = config();
        config.output_dir = PathBuf::from(dir);
        assert_eq!(config.resolved_track_name(), expected);
    }

    #[rstest]
    fn test_explicit_track_name_wins() {
        let mut config = config();
        config.track_name = Some("my breaks".to_string());
        assert_eq!(config.resolved_track_name(), "my breaks");
    }
}
