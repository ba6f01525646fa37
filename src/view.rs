//! Text rendering of the acquisition status

use std::fmt;

use crate::types::{AcquisitionState, REASON_UNAVAILABLE, REASON_UNSUPPORTED};

/// What a status panel shows for a given state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub error: Option<String>,
    pub loading: bool,
    pub location: Option<String>,
    pub action_label: &'static str,
}

impl StatusView {
    pub fn from_state(state: &AcquisitionState) -> Self {
        let error = state.failure().map(|reason| match reason {
            REASON_UNSUPPORTED => "Location services are not supported on this platform".to_string(),
            REASON_UNAVAILABLE => "Unable to retrieve your location".to_string(),
            other => other.to_string(),
        });

        Self {
            error,
            loading: state.is_requesting(),
            location: state.coordinate().map(|coord| coord.to_string()),
            action_label: if state.is_requesting() {
                "Getting Location..."
            } else {
                "Get My Location"
            },
        }
    }
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            writeln!(f, "! {}", error)?;
        }
        if self.loading {
            writeln!(f, "...")?;
        } else if let Some(location) = &self.location {
            writeln!(f, "{}", location)?;
        }
        write!(f, "[{}]", self.action_label)
    }
}
