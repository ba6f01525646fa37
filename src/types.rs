//! Core state and notification types for geobeacon

use crate::geo::Coordinate;

/// Failure reason when the platform offers no location capability
pub const REASON_UNSUPPORTED: &str = "unsupported";

/// Failure reason for any failed position query
pub const REASON_UNAVAILABLE: &str = "unable to retrieve location";

/// State of the current acquisition cycle
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AcquisitionState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A position query is outstanding
    Requesting,
    /// The latest query produced a coordinate
    Succeeded(Coordinate),
    /// The latest query failed
    Failed(String),
}

impl AcquisitionState {
    /// Returns the captured coordinate, if any
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            AcquisitionState::Succeeded(coord) => Some(*coord),
            _ => None,
        }
    }

    /// Returns true while a query is outstanding
    pub fn is_requesting(&self) -> bool {
        matches!(self, AcquisitionState::Requesting)
    }

    /// Returns the failure reason, if any
    pub fn failure(&self) -> Option<&str> {
        match self {
            AcquisitionState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Result of transmitting a coordinate to the endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent,
    SendFailed(String),
}

/// Visual weight of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Default,
    Destructive,
}

/// Transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Submission(SubmissionOutcome),
    LocationRequired,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Submission(SubmissionOutcome::Sent) => "Location sent successfully",
            Notice::Submission(SubmissionOutcome::SendFailed(_)) => "Error",
            Notice::LocationRequired => "Location Required",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Notice::Submission(SubmissionOutcome::Sent) => {
                "Your current location has been securely transmitted."
            }
            Notice::Submission(SubmissionOutcome::SendFailed(_)) => {
                "Failed to send location to server."
            }
            Notice::LocationRequired => "Please allow location access before using SOS.",
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Notice::Submission(SubmissionOutcome::Sent) => Variant::Default,
            _ => Variant::Destructive,
        }
    }
}
