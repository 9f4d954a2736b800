use std::path::PathBuf;

/// Broad classes of failure, for callers that only care which rule was broken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required input was absent altogether.
    MissingArgument,
    /// An input was present but structurally wrong.
    InvalidArgument,
    /// The board is not in a state that allows the call.
    InvalidState,
}

/// Errors raised by shield construction, board setup and scoring.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("shield must have at least one peg")]
    EmptyShield,

    #[error("shield size must be > 0")]
    InvalidShieldSize,

    #[error("total rows must be > 0")]
    InvalidTotalRows,

    #[error("shield has {actual} pegs, board expects {expected}")]
    ShieldLengthMismatch { expected: usize, actual: usize },

    #[error("code has {actual} pegs, shield has {expected}")]
    CodeLengthMismatch { expected: usize, actual: usize },

    #[error("{total} key pegs is outside [0, {max}]")]
    KeyPegsOutOfRange { total: usize, max: usize },

    #[error("unknown peg color {0:?}")]
    UnknownColor(String),

    #[error("no shield was provided")]
    MissingShield,

    #[error("no shield has been registered on this board")]
    ShieldNotRegistered,

    #[error("a shield is already registered on this board")]
    ShieldAlreadyRegistered,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingShield => ErrorKind::MissingArgument,
            Error::ShieldNotRegistered | Error::ShieldAlreadyRegistered => {
                ErrorKind::InvalidState
            }
            Error::EmptyShield
            | Error::InvalidShieldSize
            | Error::InvalidTotalRows
            | Error::ShieldLengthMismatch { .. }
            | Error::CodeLengthMismatch { .. }
            | Error::KeyPegsOutOfRange { .. }
            | Error::UnknownColor(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Errors that can occur when loading a game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid game config: {0}")]
    Invalid(#[from] Error),
}
