use std::fmt;

/// Result type for doclens-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the client layer
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure (connection, TLS, body decode)
    Http(reqwest::Error),

    /// Backend answered with a non-success status. The reason is the HTTP
    /// status text, surfaced verbatim as the failure reason.
    Backend { status: u16, reason: String },

    /// Candidate failed validation
    Candidate(doclens_types::Error),

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "{}", err),
            Error::Backend { reason, .. } => write!(f, "{}", reason),
            Error::Candidate(err) => write!(f, "{}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Candidate(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Backend { .. } | Error::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<doclens_types::Error> for Error {
    fn from(err: doclens_types::Error) -> Self {
        Error::Candidate(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
