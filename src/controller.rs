//! Location acquisition controller
//!
//! Owns the single [`AcquisitionState`] cell and drives it through
//! `Idle -> Requesting -> Succeeded | Failed`. Every `start()` takes a fresh
//! token; a query result is applied only while its token is still the
//! latest one, so a slow stale answer can never overwrite a newer one.
//!
//! Submission of a captured coordinate runs as a detached task and reports
//! only through the [`Notifier`]; it never touches the state cell.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::client::LocationClient;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::geo::{Coordinate, MapsSearch};
use crate::navigate::{Navigator, StdoutNavigator};
use crate::notify::{LogNotifier, Notifier};
use crate::provider::{AcquisitionError, FixedProvider, LocationProvider, PositionResult};
use crate::types::{AcquisitionState, Notice, SubmissionOutcome, REASON_UNAVAILABLE, REASON_UNSUPPORTED};

pub const DEFAULT_POSITION_TIMEOUT: Duration = Duration::from_secs(10);

/// Assembles a [`LocationController`] from its collaborators
pub struct ControllerBuilder {
    provider: Option<Arc<dyn LocationProvider>>,
    client: LocationClient,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    maps: MapsSearch,
    position_timeout: Duration,
}

impl ControllerBuilder {
    /// Starts from a submission client; no provider, log notices, stdout navigation
    pub fn new(client: LocationClient) -> Self {
        Self {
            provider: None,
            client,
            notifier: Arc::new(LogNotifier),
            navigator: Arc::new(StdoutNavigator),
            maps: MapsSearch::default(),
            position_timeout: DEFAULT_POSITION_TIMEOUT,
        }
    }

    /// Starts from loaded configuration
    ///
    /// A configured fixed position becomes the provider; without one the
    /// controller has no location capability.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = LocationClient::new(config.endpoint.clone(), config.request_timeout)?;
        let mut builder = Self::new(client)
            .maps(MapsSearch::hospital(config.maps_url.clone()))
            .position_timeout(config.position_timeout);

        if let Some(coord) = config.fixed_position {
            builder = builder.provider(Arc::new(FixedProvider::new(coord)));
        }

        Ok(builder)
    }

    pub fn provider(mut self, provider: Arc<dyn LocationProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn maps(mut self, maps: MapsSearch) -> Self {
        self.maps = maps;
        self
    }

    pub fn position_timeout(mut self, timeout: Duration) -> Self {
        self.position_timeout = timeout;
        self
    }

    pub fn build(self) -> LocationController {
        let (state, _) = watch::channel(AcquisitionState::Idle);

        LocationController {
            inner: Arc::new(Inner {
                provider: self.provider,
                client: self.client,
                notifier: self.notifier,
                navigator: self.navigator,
                maps: self.maps,
                position_timeout: self.position_timeout,
                state,
                generation: AtomicU64::new(0),
            }),
        }
    }
}

struct Inner {
    provider: Option<Arc<dyn LocationProvider>>,
    client: LocationClient,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    maps: MapsSearch,
    position_timeout: Duration,
    state: watch::Sender<AcquisitionState>,
    // Only read or bumped while the state cell is locked.
    generation: AtomicU64,
}

impl Inner {
    /// Applies a query result if `token` is still current
    fn resolve(&self, token: u64, result: PositionResult) {
        let applied = self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != token {
                return false;
            }
            *state = match &result {
                Ok(coord) => AcquisitionState::Succeeded(*coord),
                Err(_) => AcquisitionState::Failed(REASON_UNAVAILABLE.to_string()),
            };
            true
        });

        if !applied {
            debug!(token, "Discarding stale position result");
            return;
        }

        match result {
            Ok(coord) => {
                info!(
                    token,
                    latitude = coord.latitude(),
                    longitude = coord.longitude(),
                    "Position acquired"
                );
                self.spawn_submission(coord);
            }
            Err(e) => warn!(token, "{}", Error::from(e)),
        }
    }

    fn spawn_submission(&self, coord: Coordinate) -> JoinHandle<SubmissionOutcome> {
        let client = self.client.clone();
        let notifier = Arc::clone(&self.notifier);

        tokio::spawn(async move {
            let outcome = client.outcome(coord).await;
            notifier.notify(Notice::Submission(outcome.clone()));
            outcome
        })
    }
}

/// Handle to one acquisition controller; clones share the same state
#[derive(Clone)]
pub struct LocationController {
    inner: Arc<Inner>,
}

impl LocationController {
    pub fn builder(client: LocationClient) -> ControllerBuilder {
        ControllerBuilder::new(client)
    }

    /// Snapshot of the current state
    pub fn state(&self) -> AcquisitionState {
        self.inner.state.borrow().clone()
    }

    /// Receiver that observes every applied transition
    pub fn subscribe(&self) -> watch::Receiver<AcquisitionState> {
        self.inner.state.subscribe()
    }

    /// URL that captured coordinates are posted to
    pub fn endpoint(&self) -> &str {
        self.inner.client.endpoint()
    }

    /// Whether a location provider is available at all
    pub fn is_supported(&self) -> bool {
        self.inner.provider.is_some()
    }

    /// Begins a new acquisition cycle, superseding any outstanding one
    ///
    /// Without a provider this fails synchronously with
    /// [`Error::CapabilityMissing`] and leaves the state at
    /// `Failed("unsupported")`. Otherwise the state becomes `Requesting` and
    /// the query resolves on a background task, which needs a Tokio runtime.
    pub fn start(&self) -> Result<()> {
        let inner = &self.inner;

        let Some(provider) = inner.provider.as_ref() else {
            inner.state.send_modify(|state| {
                inner.generation.fetch_add(1, Ordering::SeqCst);
                *state = AcquisitionState::Failed(REASON_UNSUPPORTED.to_string());
            });
            warn!("Location capability missing");
            return Err(Error::CapabilityMissing);
        };

        let mut token = 0;
        inner.state.send_modify(|state| {
            token = inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = AcquisitionState::Requesting;
        });
        info!(token, "Requesting position");

        let request = provider.request_position();
        let timeout = inner.position_timeout;
        let weak: Weak<Inner> = Arc::downgrade(inner);

        tokio::spawn(async move {
            let result = match tokio::time::timeout(timeout, request).await {
                Ok(Ok(result)) => result,
                Ok(Err(_)) => Err(AcquisitionError::PositionUnavailable),
                Err(_) => Err(AcquisitionError::Timeout),
            };

            match weak.upgrade() {
                Some(inner) => inner.resolve(token, result),
                None => debug!(token, "Controller dropped before position arrived"),
            }
        });

        Ok(())
    }

    /// Waits until the state is anything other than `Requesting`
    pub async fn settled(&self) -> AcquisitionState {
        let mut rx = self.subscribe();
        let settled = match rx.wait_for(|state| !state.is_requesting()).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        settled
    }

    /// Sends `coord` to the endpoint on a detached task
    ///
    /// The outcome goes to the notifier; the returned handle may be awaited
    /// or dropped.
    pub fn submit(&self, coord: Coordinate) -> JoinHandle<SubmissionOutcome> {
        self.inner.spawn_submission(coord)
    }

    /// Opens a nearby-hospital search for the captured location
    ///
    /// Requires a `Succeeded` state. Otherwise emits one
    /// [`Notice::LocationRequired`] and navigates nowhere. Each call with a
    /// location opens the search again.
    pub fn trigger_emergency(&self) -> Result<String> {
        let Some(coord) = self.state().coordinate() else {
            warn!("Emergency action requested without a location");
            self.inner.notifier.notify(Notice::LocationRequired);
            return Err(Error::PreconditionNotMet("location required".to_string()));
        };

        let url = self.inner.maps.url(&coord);
        info!(%url, "Opening emergency search");
        self.inner.navigator.open(&url);
        Ok(url)
    }
}
