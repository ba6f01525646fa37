//! Error types for geobeacon

use std::fmt;
use std::io;

use crate::provider::AcquisitionError;

/// Result type for geobeacon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in geobeacon operations
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(io::Error),

    /// HTTP transport error
    Http(reqwest::Error),

    /// Invalid configuration value
    Config(String),

    /// Coordinate is not a finite, in-range latitude/longitude pair
    InvalidCoordinate(String),

    /// The platform has no location capability
    CapabilityMissing,

    /// The position query failed
    Acquisition(AcquisitionError),

    /// The endpoint rejected the submission
    Submission(String),

    /// An action was attempted before its precondition held
    PreconditionNotMet(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Http(e) => write!(f, "HTTP error: {}", e),
            Error::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {}", msg),
            Error::CapabilityMissing => write!(f, "Location capability missing"),
            Error::Acquisition(e) => write!(f, "Acquisition failed: {}", e),
            Error::Submission(msg) => write!(f, "Submission failed: {}", msg),
            Error::PreconditionNotMet(msg) => write!(f, "Precondition not met: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Http(e) => Some(e),
            Error::Acquisition(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Http(error)
    }
}

impl From<AcquisitionError> for Error {
    fn from(error: AcquisitionError) -> Self {
        Error::Acquisition(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Submission("server responded with 500".to_string());
        assert_eq!(err.to_string(), "Submission failed: server responded with 500");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::AddrInUse, "port taken");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_acquisition_conversion_keeps_kind() {
        let err: Error = AcquisitionError::Timeout.into();
        assert!(matches!(err, Error::Acquisition(AcquisitionError::Timeout)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_precondition_message() {
        let err = Error::PreconditionNotMet("location required".to_string());
        assert!(err.to_string().contains("location required"));
    }
}
