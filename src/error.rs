use thiserror::Error;

// Grammar and assembly failures inside the library are deliberately a bare
// `None`; this error type serves the binary surface around it.
#[derive(Error, Debug)]
pub enum OpenHoursError {
    #[error("Unparseable description: {0}")]
    Unparseable(String),
    #[error("Invalid query: {0}")]
    Query(String),
    #[error("Usage error: {0}")]
    Usage(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OpenHoursError>;
