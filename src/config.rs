//! Configuration loader and defaults for the profileweb server.
//!
//! Exposes `Config`, which reads values from environment variables once at
//! startup. Fields include the two Vapi credentials embedded in the profile
//! page (`assistant_id`, `api_key`) plus the listening port (`web_port`).
//! The struct is read-only after construction; handlers reach it through
//! shared state and never mutate it.
//!
use std::env;

const DEFAULT_WEB_PORT: u16 = 8000;

/// Application configuration containing Vapi credentials and server settings
pub struct Config {
    /// Vapi assistant identifier, from `VAPI_ASSISTANT_ID`
    pub assistant_id: Option<String>,
    /// Vapi public API key, from `VAPI_API_KEY`
    pub api_key: Option<String>,
    /// Web http port, from `PROFILE_WEB_PORT`
    pub web_port: u16,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            assistant_id: lookup("VAPI_ASSISTANT_ID"),
            api_key: lookup("VAPI_API_KEY"),
            web_port: lookup("PROFILE_WEB_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_WEB_PORT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that all variables are picked up from the lookup
    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(|name| match name {
            "VAPI_ASSISTANT_ID" => Some("asst_42".into()),
            "VAPI_API_KEY" => Some("pk_secret".into()),
            "PROFILE_WEB_PORT" => Some("9090".into()),
            _ => None,
        });

        assert_eq!(config.assistant_id.as_deref(), Some("asst_42"));
        assert_eq!(config.api_key.as_deref(), Some("pk_secret"));
        assert_eq!(config.web_port, 9090);
    }

    /// Test defaults when the environment is empty
    #[test]
    fn missing_variables_fall_back() {
        let config = Config::from_lookup(|_| None);

        assert!(config.assistant_id.is_none());
        assert!(config.api_key.is_none());
        assert_eq!(config.web_port, DEFAULT_WEB_PORT);
    }

    /// Test that an unparseable port falls back to the default
    #[test]
    fn bad_port_falls_back() {
        let config = Config::from_lookup(|name| match name {
            "PROFILE_WEB_PORT" => Some("not-a-port".into()),
            _ => None,
        });

        assert_eq!(config.web_port, DEFAULT_WEB_PORT);
    }
}
