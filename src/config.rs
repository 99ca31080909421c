use std::env;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub default_value: i64,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            api_base: resolve_api_base(env::var("COUNTER_API_BASE").ok()),
            default_value: resolve_default_value(env::var("COUNTER_DEFAULT").ok()),
        }
    }
}

pub fn resolve_api_base(raw: Option<String>) -> String {
    match raw {
        Some(value) if !value.trim().is_empty() => value.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_API_BASE.to_string(),
    }
}

pub fn resolve_default_value(raw: Option<String>) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(0)
}
