use std::time::Duration;

use super::{position_channel, LocationProvider, PositionRequest, PositionResult};
use crate::geo::Coordinate;

/// Provider that always reports the same answer
#[derive(Debug, Clone)]
pub struct FixedProvider {
    answer: PositionResult,
    delay: Duration,
}

impl FixedProvider {
    /// Reports `coord` immediately
    pub fn new(coord: Coordinate) -> Self {
        Self {
            answer: Ok(coord),
            delay: Duration::ZERO,
        }
    }

    /// Reports the given result, success or failure
    pub fn answering(answer: PositionResult) -> Self {
        Self {
            answer,
            delay: Duration::ZERO,
        }
    }

    /// Holds each answer back for `delay`
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl LocationProvider for FixedProvider {
    fn request_position(&self) -> PositionRequest {
        let (tx, rx) = position_channel();
        let answer = self.answer.clone();

        if self.delay.is_zero() {
            let _ = tx.send(answer);
        } else {
            let delay = self.delay;
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send(answer);
            });
        }

        rx
    }
}
