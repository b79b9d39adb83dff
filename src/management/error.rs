use std::{fmt, io::Error};

#[derive(Debug)]
pub enum StoreError {
    IoError(Error),
    CriticalError(String),
}

impl From<Error> for StoreError {
    fn from(err: Error) -> Self {
        StoreError::IoError(err)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "I/O error: {}", e),
            StoreError::CriticalError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
