use thiserror::Error;

#[derive(Error, Debug)]
pub enum BreakwigError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Invalid input pattern {pattern}: {reason}")]
    InvalidGlob { pattern: String, reason: String },

    #[error("No files match the input pattern: {0}")]
    EmptyGlob(String),

    #[error("No chromosome token (chr<name>_) found in file name: {0}")]
    ChromosomeNotInFilename(String),

    #[error("Error parsing record at {path}:{line}: {reason}")]
    RecordParseError {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("Invalid strand '{0}', expected '+' or '-'")]
    InvalidStrand(String),

    #[error("Error parsing chrom sizes file {path} at line {line}: {reason}")]
    ChromSizesParseError {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("Invalid window parameters: {0}")]
    InvalidWindowParameters(String),

    #[error("Unknown output type: {0}. Valid options are 'bigwig' or 'bedgraph'")]
    UnknownOutputType(String),

    #[error("Failed to write track {path}: {reason}")]
    TrackWriteError { path: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BreakwigError>;
