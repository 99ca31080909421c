use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The backend answered with a non-2xx status.
    Backend { status: u16, message: String },
    /// The request never produced a usable response.
    Network(String),
}

impl SyncError {
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }

    pub fn network(err: impl std::error::Error) -> Self {
        Self::Network(err.to_string())
    }

    /// Prefix used in diagnostic logs, matching the two error kinds.
    pub fn kind(&self) -> &'static str {
        match self {
            SyncError::Backend { .. } => "Backend error",
            SyncError::Network(_) => "Network error",
        }
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Backend { status, message } => write!(f, "{message} (status {status})"),
            SyncError::Network(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for SyncError {}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        Self::network(err)
    }
}
