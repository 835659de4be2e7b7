//! View loaders.
//!
//! A loader fetches every collection a dashboard view needs, waits for all of
//! them, then runs the pure pipeline from `clinic-dash-core`. [`View`] wraps a
//! loader with latest-request-wins sequencing and keeps the last value that
//! loaded successfully so a failed refresh never blanks the screen.

mod dashboard;
mod feedback;
mod schedules;

pub use dashboard::*;
pub use feedback::*;
pub use schedules::*;

use std::future::Future;

use clinic_dash_core::stats::StatsError;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::api::ApiError;
use crate::sequencer::RequestSequencer;

/// Why a view could not be loaded.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Invalid data: {0}")]
    Stats(#[from] StatsError),
}

impl LoadError {
    /// Text for a user-facing notification.
    pub fn message(&self) -> String {
        match self {
            LoadError::Api(e) => e.message(),
            LoadError::Stats(e) => e.to_string(),
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;

/// What a view currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<T> {
    /// Last successfully loaded value
    pub value: Option<T>,
    /// Message of the most recent failure, cleared on success
    pub last_error: Option<String>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            value: None,
            last_error: None,
        }
    }
}

/// Result of one refresh.
#[derive(Debug)]
pub enum RefreshOutcome<T> {
    /// The load succeeded and is now the view's value.
    Applied(T),
    /// A newer refresh started before this one finished; nothing changed.
    Superseded,
    /// The load failed; the view keeps showing `last_known_good`.
    Failed {
        error: LoadError,
        last_known_good: Option<T>,
    },
}

impl<T> RefreshOutcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, RefreshOutcome::Applied(_))
    }
}

/// A named view with sequenced refreshes.
pub struct View<T> {
    name: &'static str,
    sequencer: RequestSequencer,
    state: Mutex<ViewState<T>>,
}

impl<T: Clone> View<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            sequencer: RequestSequencer::new(),
            state: Mutex::new(ViewState::default()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run `load` and apply its result unless a newer refresh has started.
    pub async fn refresh<F, Fut>(&self, load: F) -> RefreshOutcome<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = LoadResult<T>>,
    {
        let ticket = self.sequencer.issue();
        let result = load().await;

        let mut state = self.state.lock().await;
        if !self.sequencer.is_current(ticket) {
            tracing::debug!(view = self.name, ticket = ticket.value(), "Discarding stale load");
            return RefreshOutcome::Superseded;
        }

        match result {
            Ok(value) => {
                state.value = Some(value.clone());
                state.last_error = None;
                RefreshOutcome::Applied(value)
            }
            Err(error) => {
                tracing::warn!(view = self.name, error = %error, "View load failed");
                state.last_error = Some(error.message());
                RefreshOutcome::Failed {
                    error,
                    last_known_good: state.value.clone(),
                }
            }
        }
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> ViewState<T> {
        self.state.lock().await.clone()
    }
}
