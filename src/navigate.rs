//! Hand-off to an external map view

use std::sync::Mutex;

/// Opens a URL somewhere outside the controller; nothing comes back
pub trait Navigator: Send + Sync {
    fn open(&self, url: &str);
}

/// Prints the URL for the user to follow
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutNavigator;

impl Navigator for StdoutNavigator {
    fn open(&self, url: &str) {
        println!("Open in browser: {}", url);
    }
}

/// Keeps every URL it is asked to open
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    opened: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, oldest first
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open(&self, url: &str) {
        self.opened
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(url.to_string());
    }
}
