use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown format: {format}. Use one of: {}", .known.join(", "))]
    UnknownFormat { format: String, known: Vec<String> },

    #[error("format already registered: {0}")]
    DuplicateFormat(String),

    #[error("invalid report source: {0}")]
    Source(String),
}

impl Error {
    /// Get the process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidArgument(_) | Error::Source(_) => 2,
            Error::UnknownFormat { .. } => 3,
            Error::DuplicateFormat(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
