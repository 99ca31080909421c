use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Identifier of the element whose text shows the counter.
pub const COUNTER_ELEMENT_ID: &str = "counting";

/// Text sink for the counter. Every successful update overwrites it with the
/// decimal form of the value.
pub trait CounterDisplay: Send + Sync {
    fn render(&self, text: &str);
}

/// Keeps every rendered text. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryDisplay {
    renders: Arc<Mutex<Vec<String>>>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text, if anything has been rendered yet.
    pub fn text(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    pub fn render_count(&self) -> usize {
        self.lock().len()
    }

    pub fn history(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.renders.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CounterDisplay for MemoryDisplay {
    fn render(&self, text: &str) {
        self.lock().push(text.to_string());
    }
}

/// Writes `counting: <value>` lines to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalDisplay;

impl CounterDisplay for TerminalDisplay {
    fn render(&self, text: &str) {
        write_line(&mut std::io::stdout().lock(), text);
    }
}

fn write_line<W: Write>(out: &mut W, text: &str) {
    if let Err(err) = writeln!(out, "{COUNTER_ELEMENT_ID}: {text}").and_then(|()| out.flush()) {
        warn!("failed to render counter: {err}");
    }
}
