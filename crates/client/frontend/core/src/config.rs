//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;
use std::time::Duration;

/// Frontend-specific configuration.
///
/// This contains UI-related settings like frame pacing and message retention.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontendConfig {
    pub frames: FrameConfig,
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(frames: FrameConfig, messages: MessageConfig) -> Self {
        Self { frames, messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_FRAME_INTERVAL_MS` - Milliseconds per frame (default: 16)
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(interval) = read_var::<u64>(&lookup, "CLI_FRAME_INTERVAL_MS") {
            config.frames.interval_ms = interval.max(1);
        }

        if let Some(capacity) = read_var::<usize>(&lookup, "CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        config
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameConfig {
    /// One battle animation tick is taken per frame.
    pub interval_ms: u64,
}

impl FrameConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self { interval_ms: 16 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// Parses a variable, treating malformed values as unset.
pub fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

/// Parses a boolean flag (`true/false`, `1/0`, `yes/no`, `on/off`).
pub fn read_var_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    match lookup(key)?.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FrontendConfig::from_lookup(|_| None);
        assert_eq!(config.frames.interval(), Duration::from_millis(16));
        assert_eq!(config.messages.capacity, 64);
    }

    #[test]
    fn overrides_are_clamped() {
        let config = FrontendConfig::from_lookup(|key| match key {
            "CLI_FRAME_INTERVAL_MS" => Some("0".into()),
            "CLI_MESSAGE_CAPACITY" => Some("0".into()),
            _ => None,
        });
        assert_eq!(config.frames.interval_ms, 1);
        assert_eq!(config.messages.capacity, 1);
    }

    #[test]
    fn bool_flags() {
        let lookup = |key: &str| match key {
            "A" => Some("Yes".to_string()),
            "B" => Some("off".to_string()),
            "C" => Some("maybe".to_string()),
            _ => None,
        };
        assert_eq!(read_var_bool(&lookup, "A"), Some(true));
        assert_eq!(read_var_bool(&lookup, "B"), Some(false));
        assert_eq!(read_var_bool(&lookup, "C"), None);
        assert_eq!(read_var_bool(&lookup, "D"), None);
    }
}
