//! The two handler families the controller dispatches between.

use crate::backend::CounterBackend;
use crate::display::CounterDisplay;
use crate::models::Operation;
use crate::state::CounterState;
use tokio::sync::Mutex;
use tracing::error;

/// In-process ±1, then render.
pub async fn apply_local<D: CounterDisplay>(
    state: &Mutex<CounterState>,
    display: &D,
    op: Operation,
) -> i64 {
    let mut state = state.lock().await;
    let value = state.apply_local(op);
    display.render(&value.to_string());
    value
}

/// Sends the operation to the backend and renders the value it returns.
///
/// Any failure is logged and the local handler runs once in its place. The
/// state lock is only taken after the response arrives, so concurrent calls
/// land in arrival order.
pub async fn apply_remote<B: CounterBackend, D: CounterDisplay>(
    backend: &B,
    state: &Mutex<CounterState>,
    display: &D,
    op: Operation,
) -> i64 {
    match backend.apply(op).await {
        Ok(value) => {
            let mut state = state.lock().await;
            state.set_remote(value);
            display.render(&value.to_string());
            value
        }
        Err(err) => {
            error!("{}: {err}", err.kind());
            apply_local(state, display, op).await
        }
    }
}
