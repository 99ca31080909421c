use serde::{Deserialize, Serialize};
use std::fmt;

/// Success body of every counter endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterResponse {
    pub value: i64,
}

/// Body the backend sends with a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Local,
    Api,
}

impl Mode {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled { Mode::Api } else { Mode::Local }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Local => "local",
            Mode::Api => "api",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Increment,
    Decrement,
}

impl Operation {
    pub fn delta(self) -> i64 {
        match self {
            Operation::Increment => 1,
            Operation::Decrement => -1,
        }
    }

    /// Path below the API base.
    pub fn path(self) -> &'static str {
        match self {
            Operation::Increment => "/counter/increment",
            Operation::Decrement => "/counter/decrement",
        }
    }
}
