use crate::backend::CounterBackend;
use crate::display::CounterDisplay;
use crate::errors::SyncError;
use crate::handlers::{apply_local, apply_remote};
use crate::models::{Mode, Operation};
use crate::state::CounterState;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Owns the counter value and the sync mode, and routes every counter
/// operation through whichever handler the mode selects.
///
/// Mode starts as [`Mode::Local`]. It only becomes [`Mode::Api`] through a
/// successful probe in [`initialize`](Self::initialize) or a manual
/// [`enable`](Self::enable), and only goes back through [`disable`](Self::disable).
/// Failed requests never change it.
pub struct CounterSyncController<B, D> {
    backend: B,
    display: D,
    state: Mutex<CounterState>,
}

impl<B: CounterBackend, D: CounterDisplay> CounterSyncController<B, D> {
    pub fn new(backend: B, display: D, default_value: i64) -> Self {
        Self {
            backend,
            display,
            state: Mutex::new(CounterState::new(default_value)),
        }
    }

    pub async fn mode(&self) -> Mode {
        self.state.lock().await.mode
    }

    pub async fn value(&self) -> i64 {
        self.state.lock().await.value
    }

    /// Renders the current value without touching it.
    pub async fn refresh_display(&self) {
        let state = self.state.lock().await;
        self.display.render(&state.value.to_string());
    }

    pub async fn probe_backend(&self) -> bool {
        self.backend.probe().await
    }

    pub async fn check_connection(&self) -> bool {
        self.probe_backend().await
    }

    /// Startup: probe once, then either switch to API mode and load the
    /// server's value, or stay local with the default untouched.
    pub async fn initialize(&self) -> Mode {
        if self.probe_backend().await {
            self.enable().await;
            self.load_remote_value().await;
            info!("Connected to backend successfully");
            Mode::Api
        } else {
            info!("Backend not available - using local mode");
            self.mode().await
        }
    }

    pub async fn increment(&self) -> i64 {
        self.dispatch(Operation::Increment).await
    }

    pub async fn decrement(&self) -> i64 {
        self.dispatch(Operation::Decrement).await
    }

    async fn dispatch(&self, op: Operation) -> i64 {
        match self.mode().await {
            Mode::Local => apply_local(&self.state, &self.display, op).await,
            Mode::Api => apply_remote(&self.backend, &self.state, &self.display, op).await,
        }
    }

    /// Fetches and renders the server's value. On failure the value and the
    /// display are left as they were.
    pub async fn load_remote_value(&self) -> Option<i64> {
        match self.backend.fetch().await {
            Ok(value) => {
                let mut state = self.state.lock().await;
                state.set_remote(value);
                self.display.render(&value.to_string());
                Some(value)
            }
            Err(SyncError::Backend { message, .. }) => {
                error!("Error loading counter: {message}");
                None
            }
            Err(err @ SyncError::Network(_)) => {
                error!("{}: {err}", err.kind());
                None
            }
        }
    }

    pub async fn load_from_backend(&self) -> Option<i64> {
        self.load_remote_value().await
    }

    /// Switches handlers without probing.
    pub async fn set_mode(&self, enabled: bool) {
        let mode = Mode::from_enabled(enabled);
        self.state.lock().await.mode = mode;
        match mode {
            Mode::Api => info!("API mode enabled - counter will sync with backend"),
            Mode::Local => info!("API mode disabled - counter will work locally only"),
        }
    }

    pub async fn enable(&self) {
        self.set_mode(true).await;
    }

    pub async fn disable(&self) {
        self.set_mode(false).await;
    }
}
