use crate::models::{Mode, Operation};

/// CounterValue and Mode. Lives for the lifetime of the controller.
#[derive(Debug, Clone, Default)]
pub struct CounterState {
    pub value: i64,
    pub mode: Mode,
}

impl CounterState {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            mode: Mode::Local,
        }
    }

    pub fn apply_local(&mut self, op: Operation) -> i64 {
        self.value = self.value.saturating_add(op.delta());
        self.value
    }

    /// Stores a backend-provided value verbatim.
    pub fn set_remote(&mut self, value: i64) -> i64 {
        self.value = value;
        self.value
    }
}
