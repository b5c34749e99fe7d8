use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Everything that can go wrong while turning an input molecule into a job document.
///
/// None of these are recoverable within a single conversion: the caller reports
/// the error and no output is written.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(
        "malformed geometry: {symbols} symbols require {required} coordinates, found {geometry}",
        required = 3 * symbols
    )]
    MalformedGeometry { symbols: usize, geometry: usize },

    #[error("schema length mismatch: `{field}` has {found} entries, expected {expected}")]
    SchemaLengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("fragment id {fragid} of atom {atom} is out of range, valid ids are 1..={nfrag}")]
    FragmentIndexOutOfRange {
        atom: usize,
        fragid: serde_json::Number,
        nfrag: usize,
    },

    #[error("failed to read input file '{path}': {source}", path = path.display())]
    InputFile {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to write output file '{path}': {source}", path = path.display())]
    OutputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Short name of the error kind, used when reporting failures.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedGeometry { .. } => "MalformedGeometryError",
            Self::SchemaLengthMismatch { .. } => "SchemaLengthMismatchError",
            Self::FragmentIndexOutOfRange { .. } => "FragmentIndexOutOfRangeError",
            Self::InputFile { .. } => "InputFileError",
            Self::OutputFile { .. } => "OutputFileError",
        }
    }

    pub(crate) fn input_file(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::InputFile {
            path: path.into(),
            source: source.into(),
        }
    }
}
