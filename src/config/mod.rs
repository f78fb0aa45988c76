//! Environment-backed configuration.
//!
//! Credentials and endpoints are read once at startup and passed into the
//! components that need them; nothing deeper in the crate reads the process
//! environment. `from_lookup` exists so tests can feed a fake environment
//! without mutating the real one.

use crate::error::{DeskhandError, Result};

/// Settings for the terminal advisor.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub api_key: String,
    /// Base URL override for the completion endpoint (tests, proxies).
    pub base_url: Option<String>,
}

impl AdvisorConfig {
    /// Load from the environment (reads `.env` if present).
    ///
    /// Fails before any network activity when `OPENAI_API_KEY` is absent.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("OPENAI_API_KEY").ok_or_else(|| {
            DeskhandError::missing_env("OPENAI_API_KEY")
        })?;
        Ok(Self {
            api_key,
            base_url: lookup("OPENAI_BASE_URL"),
        })
    }
}

/// Settings for the Jira issue creator.
#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub api_key: String,
    pub base_url: String,
    /// Default assignee offered at the prompt.
    pub default_assignee: Option<String>,
}

impl JiraConfig {
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key =
            lookup("JIRA_API_KEY").ok_or_else(|| DeskhandError::missing_env("JIRA_API_KEY"))?;
        let base_url =
            lookup("JIRA_BASE_URL").ok_or_else(|| DeskhandError::missing_env("JIRA_BASE_URL"))?;
        Ok(Self {
            api_key,
            base_url,
            default_assignee: lookup("WORK_EMAIL"),
        })
    }
}
