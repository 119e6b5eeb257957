use std::collections::TryReserveError;

use thiserror::Error;

/// Error type for fallible `RunMap` operations.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn out_of_resources(context: impl Into<String>, source: TryReserveError) -> Error {
        Error(
            ErrorKind::OutOfResources {
                context: context.into(),
                source,
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("out of resources while {context}: {source}")]
    OutOfResources {
        context: String,
        source: TryReserveError,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
