#[derive(Debug, thiserror::Error)]
pub enum Error {
    //
    // Invalid build-time identity
    //
    #[error("Invalid version, expected <major>.<minor>.<patch>: {0}")]
    InvalidVersion(String),
    #[error("Version component does not fit in 0..=255: {0}")]
    VersionOutOfRange(String),

    //
    // System error
    //
    #[error(transparent)]
    UnknownIo(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
