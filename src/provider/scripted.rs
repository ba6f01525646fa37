//! Provider whose queries stay pending until resolved by hand

use std::sync::{Mutex, MutexGuard};

use super::{position_channel, LocationProvider, PositionRequest, PositionResponder, PositionResult};

/// Test provider: every query is parked until [`ScriptedProvider::resolve`]
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    responders: Mutex<Vec<Option<PositionResponder>>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queries issued so far
    pub fn requests(&self) -> usize {
        self.lock().len()
    }

    /// Number of queries still waiting for an answer
    pub fn pending(&self) -> usize {
        self.lock().iter().filter(|r| r.is_some()).count()
    }

    /// Answers query `index` (0-based, in issue order)
    ///
    /// Returns false if there is no such query, it was already answered,
    /// or nobody is listening any more.
    pub fn resolve(&self, index: usize, result: PositionResult) -> bool {
        let responder = self.lock().get_mut(index).and_then(Option::take);
        match responder {
            Some(tx) => tx.send(result).is_ok(),
            None => false,
        }
    }

    /// Drops query `index` without answering it
    pub fn abandon(&self, index: usize) {
        if let Some(slot) = self.lock().get_mut(index) {
            slot.take();
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Option<PositionResponder>>> {
        // A panic while holding the lock leaves the slots intact.
        self.responders.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl LocationProvider for ScriptedProvider {
    fn request_position(&self) -> PositionRequest {
        let (tx, rx) = position_channel();
        self.lock().push(Some(tx));
        rx
    }
}
