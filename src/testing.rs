//! Scripted backends and log capture shared by the unit tests.

use crate::backend::CounterBackend;
use crate::errors::SyncError;
use crate::models::Operation;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::oneshot;

#[derive(Default)]
struct Script {
    reachable: AtomicBool,
    responses: std::sync::Mutex<VecDeque<Result<i64, SyncError>>>,
    calls: std::sync::Mutex<Vec<&'static str>>,
}

#[derive(Clone, Default)]
pub struct ScriptedBackend(Arc<Script>);

impl ScriptedBackend {
    pub fn reachable() -> Self {
        let backend = Self::default();
        backend.set_reachable(true);
        backend
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.0.reachable.store(reachable, Ordering::SeqCst);
    }

    pub fn respond(&self, response: Result<i64, SyncError>) {
        self.0.responses.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.0.calls.lock().unwrap().clone()
    }

    fn next(&self, call: &'static str) -> Result<i64, SyncError> {
        self.0.calls.lock().unwrap().push(call);
        self.0
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(SyncError::Network("no scripted response".into())))
    }
}

impl CounterBackend for ScriptedBackend {
    async fn probe(&self) -> bool {
        self.0.calls.lock().unwrap().push("probe");
        self.0.reachable.load(Ordering::SeqCst)
    }

    async fn fetch(&self) -> Result<i64, SyncError> {
        self.next("fetch")
    }

    async fn apply(&self, op: Operation) -> Result<i64, SyncError> {
        match op {
            Operation::Increment => self.next("increment"),
            Operation::Decrement => self.next("decrement"),
        }
    }
}

/// Holds every request open until the test answers it.
#[derive(Clone, Default)]
pub struct GatedBackend {
    waiting: Arc<std::sync::Mutex<Vec<oneshot::Sender<Result<i64, SyncError>>>>>,
}

impl GatedBackend {
    pub fn pending(&self) -> usize {
        self.waiting.lock().unwrap().len()
    }

    pub fn answer(&self, index: usize, response: Result<i64, SyncError>) {
        let sender = self.waiting.lock().unwrap().remove(index);
        sender.send(response).unwrap();
    }
}

impl CounterBackend for GatedBackend {
    async fn probe(&self) -> bool {
        true
    }

    async fn fetch(&self) -> Result<i64, SyncError> {
        Ok(0)
    }

    async fn apply(&self, _op: Operation) -> Result<i64, SyncError> {
        let (tx, rx) = oneshot::channel();
        self.waiting.lock().unwrap().push(tx);
        rx.await
            .unwrap_or_else(|_| Err(SyncError::Network("request dropped".into())))
    }
}

struct LogWriter(Arc<std::sync::Mutex<Vec<u8>>>);

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn capture_logs() -> (Arc<std::sync::Mutex<Vec<u8>>>, tracing::subscriber::DefaultGuard) {
    let buffer = Arc::new(std::sync::Mutex::new(Vec::new()));
    let writer = Arc::clone(&buffer);
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || LogWriter(Arc::clone(&writer)))
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}

pub fn logged(buffer: &Arc<std::sync::Mutex<Vec<u8>>>) -> String {
    String::from_utf8_lossy(&buffer.lock().unwrap()).to_string()
}
