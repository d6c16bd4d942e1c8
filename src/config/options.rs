// src/config/options.rs
use super::consts::{PLANNING_URL, USER_AGENT};

/// Where and how the planning page is fetched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub url: String,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            url: String::from(PLANNING_URL),
            user_agent: String::from(USER_AGENT),
        }
    }
}

impl FetchOptions {
    /// Same client settings, different target. Mostly useful for tests.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into(), ..Self::default() }
    }
}
