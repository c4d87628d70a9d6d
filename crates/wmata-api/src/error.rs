//! Error type shared by every WMATA service.

use std::fmt;

/// Errors returned by the WMATA client.
#[derive(Debug)]
pub enum Error {
    /// A required argument was empty. No request was sent.
    MissingArgument(&'static str),
    /// The endpoint path could not be joined onto the base URL.
    Url(url::ParseError),
    /// The request could not be built, sent, or its body read.
    Request(reqwest::Error),
    /// The API answered with a non-2xx status.
    Status {
        /// HTTP status code.
        status: u16,
        /// Message from the WMATA error document, or the raw body.
        message: String,
    },
    /// The body was not valid JSON for the expected shape.
    Json(serde_json::Error),
    /// The body was not valid XML for the expected shape.
    Xml(quick_xml::DeError),
}

impl Error {
    /// Returns `true` for local argument validation failures.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::MissingArgument(_))
    }

    /// Returns `true` for failures reaching the API or reported by it.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { .. })
    }

    /// Returns `true` when the body arrived but could not be decoded.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Json(_) | Self::Xml(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument(name) => write!(f, "missing required argument: {name}"),
            Self::Url(e) => write!(f, "invalid endpoint URL: {e}"),
            Self::Request(e) => write!(f, "request failed: {e}"),
            Self::Status { status, message } => {
                write!(f, "WMATA API error (HTTP {status}): {message}")
            }
            Self::Json(e) => write!(f, "JSON decoding failed: {e}"),
            Self::Xml(e) => write!(f, "XML decoding failed: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Url(e) => Some(e),
            Self::Request(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Xml(e) => Some(e),
            Self::MissingArgument(_) | Self::Status { .. } => None,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Url(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<quick_xml::DeError> for Error {
    fn from(err: quick_xml::DeError) -> Self {
        Self::Xml(err)
    }
}

/// Result alias for WMATA client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fails with [`Error::MissingArgument`] when `value` is empty.
pub(crate) fn require(value: &str, name: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::MissingArgument(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_missing_argument_display() {
        // Arrange
        let err = Error::MissingArgument("StationCode");

        // Act & Assert
        assert_eq!(err.to_string(), "missing required argument: StationCode");
        assert!(err.is_validation());
        assert!(!err.is_transport());
        assert!(!err.is_decode());
    }

    #[test]
    fn test_status_display() {
        // Arrange
        let err = Error::Status {
            status: 401,
            message: String::from("Access denied"),
        };

        // Act & Assert
        assert_eq!(err.to_string(), "WMATA API error (HTTP 401): Access denied");
        assert!(err.is_transport());
    }

    #[test]
    fn test_json_error_is_decode() {
        // Arrange
        let source = serde_json::from_str::<u32>("not json").unwrap_err();

        // Act
        let err = Error::from(source);

        // Assert
        assert!(err.is_decode());
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("JSON decoding failed"));
    }

    #[test]
    fn test_require_rejects_empty() {
        // Arrange & Act
        let empty = require("", "StopID");
        let present = require("1001195", "StopID");

        // Assert
        assert!(matches!(empty, Err(Error::MissingArgument("StopID"))));
        assert!(present.is_ok());
    }
}
