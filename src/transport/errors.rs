use std::fmt;

#[derive(Debug)]
pub enum ViewerError {
    UnsupportedFormat(String),
    MalformedInput(String),
    Fetch(String),
    Io(String),
    InvalidConfig(String),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::UnsupportedFormat(message) => write!(f, "unsupported format: {message}"),
            ViewerError::MalformedInput(message) => write!(f, "malformed input: {message}"),
            ViewerError::Fetch(message) => write!(f, "fetch error: {message}"),
            ViewerError::Io(message) => write!(f, "io error: {message}"),
            ViewerError::InvalidConfig(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl std::error::Error for ViewerError {}

impl From<std::io::Error> for ViewerError {
    fn from(error: std::io::Error) -> Self {
        ViewerError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for ViewerError {
    fn from(error: serde_json::Error) -> Self {
        ViewerError::MalformedInput(error.to_string())
    }
}

impl From<reqwest::Error> for ViewerError {
    fn from(error: reqwest::Error) -> Self {
        ViewerError::Fetch(error.to_string())
    }
}
