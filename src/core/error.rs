use std::fmt;

/// Failure of a call against the activities API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response, or its body could not be read.
    Network(String),
    /// The server answered with a non-2xx status.
    Status { status: u16, detail: Option<String> },
    /// A 2xx response whose body did not have the expected shape.
    Decode(String),
}

impl ApiError {
    /// Server-provided explanation, if the server sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail: Some(detail), .. } => Some(detail),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "network error: {}", e),
            ApiError::Status { status, detail: Some(detail) } => write!(f, "HTTP {}: {}", status, detail),
            ApiError::Status { status, detail: None } => write!(f, "HTTP {}", status),
            ApiError::Decode(e) => write!(f, "unexpected response body: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
