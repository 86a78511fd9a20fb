use std::fmt;

/// Custom error type for RTMS operations
#[derive(Debug)]
pub enum RtmsError {
    /// Transport-level failure (connection refused, timeout, ...)
    Network(reqwest::Error),
    /// API answered with a non-2xx status
    Remote { status: u16, body: String },
    /// Response body or page envelope could not be decoded
    Decode(String),
    /// Invalid configuration or argument (format name, page size, settings file)
    Config(String),
    /// Server kept returning empty pages before the advertised total was reached
    StalledPagination {
        offset: usize,
        total: usize,
        empty_pages: u32,
    },
    /// API key not found in any source
    ApiKeyNotFound(String),
}

impl fmt::Display for RtmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RtmsError::Network(e) => write!(f, "HTTP request failed: {}", e),
            RtmsError::Remote { status, body } => {
                if body.is_empty() {
                    write!(f, "API request failed with status code {}", status)
                } else {
                    write!(f, "API request failed with status code {}: {}", status, body)
                }
            }
            RtmsError::Decode(msg) => write!(f, "JSON decode error: {}", msg),
            RtmsError::Config(msg) => write!(f, "Configuration error: {}", msg),
            RtmsError::StalledPagination {
                offset,
                total,
                empty_pages,
            } => write!(
                f,
                "Pagination stalled: {} consecutive empty pages at offset {} of {}",
                empty_pages, offset, total
            ),
            RtmsError::ApiKeyNotFound(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RtmsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RtmsError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RtmsError {
    fn from(err: reqwest::Error) -> Self {
        RtmsError::Network(err)
    }
}

impl From<serde_json::Error> for RtmsError {
    fn from(err: serde_json::Error) -> Self {
        RtmsError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for RtmsError {
    fn from(err: std::io::Error) -> Self {
        RtmsError::Config(err.to_string())
    }
}

/// Result type alias for RTMS operations
pub type Result<T> = std::result::Result<T, RtmsError>;
