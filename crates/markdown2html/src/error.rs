use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Failure = 1,
    Io = 2,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{0}")]
    Usage(String),

    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Usage(_) | Self::MissingInput(_) => ExitCode::Failure,
            Self::Io { .. } => ExitCode::Io,
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
