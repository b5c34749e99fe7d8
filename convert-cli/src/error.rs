use fragment_core::ConvertError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{kind}: {0}", kind = .0.kind())]
    Convert(#[from] ConvertError),

    #[error("UsageError: {0}")]
    Usage(#[source] clap::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Convert(_) => 1,
            Self::Usage(_) => 2,
        }
    }
}
