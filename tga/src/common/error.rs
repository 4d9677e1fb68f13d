use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed header: {0}")]
    MalformedHeader(String),
    #[error("Truncated image data: stream ended inside the {0}")]
    Truncated(&'static str),
    #[error("Cannot allocate pixel buffer for {0} pixels")]
    Allocation(usize),
    #[error("Dimension mismatch: expected {expected} pixels, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl Error {
    /// Maps an I/O error hit while reading `section`, turning end-of-stream into
    /// [`Error::Truncated`].
    pub(crate) fn from_read(err: io::Error, section: &'static str) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => Error::Truncated(section),
            _ => Error::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
