//! Error types for Folio

use thiserror::Error;

/// Failure to obtain a catalog from any configured source.
#[derive(Error, Debug)]
pub enum LoadError {
    /// No catalog source was configured or available
    #[error("No catalog source available")]
    NoSources,

    /// Reading a catalog document from disk failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Remote catalog answered with a non-success status
    #[error("HTTP {0}")]
    Http(u16),

    /// Remote catalog request could not be completed
    #[error("Request error: {0}")]
    Request(String),

    /// Document was fetched but is not a list of project records
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Remote base URL could not be parsed or joined
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LoadError::Http(status.as_u16()),
            None => LoadError::Request(err.to_string()),
        }
    }
}

/// Preference storage failures.
#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Contact form validation failures.
///
/// The display text is shown inline under the form as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all required fields.")]
    MissingField,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Scanning a media folder tree into a catalog failed.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Projects directory not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(LoadError::Http(404).to_string(), "HTTP 404");
        assert_eq!(
            ContactError::MissingField.to_string(),
            "Please fill in all required fields."
        );
        assert_eq!(
            ContactError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let load_err: LoadError = io_err.into();
        assert!(matches!(load_err, LoadError::Io(_)));
    }

    #[test]
    fn test_decode_error_converts() {
        let err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let load_err: LoadError = err.into();
        assert!(load_err.to_string().starts_with("Decode error"));
    }
}
