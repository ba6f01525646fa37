//! geobeacon - capture the current position and hand it off
//!
//! geobeacon runs one location acquisition cycle at a time: ask a
//! [`LocationProvider`] for the current position, record the result in a
//! single state cell, post the coordinate to a submission endpoint in the
//! background, and offer an emergency map search once a position is known.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use geobeacon::{Coordinate, FixedProvider, LocationClient, LocationController};
//!
//! # async fn run() -> geobeacon::Result<()> {
//! let client = LocationClient::new("http://127.0.0.1:3000/api/location", Duration::from_secs(10))?;
//! let controller = LocationController::builder(client)
//!     .provider(Arc::new(FixedProvider::new(Coordinate::new(40.0, -73.0)?)))
//!     .build();
//!
//! controller.start()?;
//! println!("{:?}", controller.settled().await);
//! controller.trigger_emergency()?;
//! # Ok(())
//! # }
//! ```
//!
//! The `api-server` binary serves the matching stub endpoint.

pub mod error;
pub mod types;
pub mod geo;
pub mod provider;
pub mod client;
pub mod notify;
pub mod navigate;
pub mod controller;
pub mod view;
pub mod config;
pub mod api;

pub use error::{Error, Result};
pub use types::{AcquisitionState, Notice, SubmissionOutcome, Variant};
pub use geo::{Coordinate, MapsSearch};
pub use provider::{AcquisitionError, FixedProvider, LocationProvider, ScriptedProvider};
pub use client::LocationClient;
pub use notify::{ChannelNotifier, LogNotifier, Notifier};
pub use navigate::{Navigator, RecordingNavigator, StdoutNavigator};
pub use controller::{ControllerBuilder, LocationController};
pub use view::StatusView;
pub use config::Config;
