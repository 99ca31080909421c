pub mod app;
pub mod backend;
pub mod config;
pub mod controller;
pub mod display;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;

#[cfg(test)]
mod testing;

pub use backend::{CounterBackend, HttpBackend};
pub use config::ClientConfig;
pub use controller::CounterSyncController;
pub use display::{CounterDisplay, MemoryDisplay, TerminalDisplay, COUNTER_ELEMENT_ID};
pub use errors::SyncError;
pub use models::{Mode, Operation};
