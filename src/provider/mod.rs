//! Location providers
//!
//! A provider answers one-shot position queries. Each query hands back a
//! [`PositionRequest`] that resolves exactly once; a provider that drops
//! the sending half without answering is treated as having no position.

use std::fmt;

use tokio::sync::oneshot;

use crate::geo::Coordinate;

pub mod fixed;
pub mod scripted;

pub use fixed::FixedProvider;
pub use scripted::ScriptedProvider;

/// Outcome of a single position query
pub type PositionResult = std::result::Result<Coordinate, AcquisitionError>;

/// Pending answer to a position query
pub type PositionRequest = oneshot::Receiver<PositionResult>;

/// Sending half handed to whoever answers a query
pub type PositionResponder = oneshot::Sender<PositionResult>;

/// Why a position query failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionError {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
}

impl fmt::Display for AcquisitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcquisitionError::PermissionDenied => write!(f, "permission denied"),
            AcquisitionError::PositionUnavailable => write!(f, "position unavailable"),
            AcquisitionError::Timeout => write!(f, "timed out"),
        }
    }
}

impl std::error::Error for AcquisitionError {}

/// Source of the current position
pub trait LocationProvider: Send + Sync {
    /// Starts a one-shot query for the current position
    fn request_position(&self) -> PositionRequest;
}

/// Creates a query channel pair
pub fn position_channel() -> (PositionResponder, PositionRequest) {
    oneshot::channel()
}
