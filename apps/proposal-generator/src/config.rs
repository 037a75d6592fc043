use anyhow::{bail, Context, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Application configuration loaded from environment variables.
/// Fails at startup if the API credential is missing or a numeric setting is malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub max_tokens: u32,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests need not touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup("OPENAI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .context("OPENAI_API_KEY environment variable not set")?;

        let max_retries = parse_or(&lookup, "LLM_MAX_RETRIES", 3u32)?;
        if max_retries == 0 {
            bail!("LLM_MAX_RETRIES must be at least 1");
        }

        Ok(Config {
            openai_api_key,
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model: lookup("PROPOSAL_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            request_timeout_secs: parse_or(&lookup, "LLM_TIMEOUT_SECS", 120u64)?,
            max_retries,
            max_tokens: parse_or(&lookup, "LLM_MAX_TOKENS", 2048u32)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_apply_when_only_key_is_set() {
        let config = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.openai_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, "gpt-4");
        assert_eq!(config.request_timeout_secs, 120);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_is_an_error() {
        assert!(Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "   ")])).is_err());
    }

    #[test]
    fn test_overrides_are_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:8000/v1/"),
            ("PROPOSAL_MODEL", "gpt-4o-mini"),
            ("LLM_TIMEOUT_SECS", "30"),
            ("LLM_MAX_RETRIES", "1"),
        ]))
        .unwrap();
        assert_eq!(config.openai_base_url, "http://localhost:8000/v1");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.max_retries, 1);
    }

    #[test]
    fn test_malformed_number_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("LLM_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("LLM_TIMEOUT_SECS"));
    }

    #[test]
    fn test_zero_retries_is_rejected() {
        assert!(Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("LLM_MAX_RETRIES", "0"),
        ]))
        .is_err());
    }
}
