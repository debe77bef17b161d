//! Configuration management for portal-sweep.
//!
//! Loads configuration from environment variables (with .env support via
//! dotenvy). The configuration is built once at process start and passed
//! explicitly to every component; there is no ambient global.

use std::env;

use crate::error::{Error, Result};

/// Default age threshold for member retirement, in days.
pub const DEFAULT_MIN_AGE_DAYS: i64 = 365;

/// Default page size for paginated portal fetches.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Connection details for the portal sharing API, established once at
/// startup and handed to the client that performs every remote call.
#[derive(Debug, Clone)]
pub struct PortalSession {
    /// Base URL of the portal sharing API, e.g. "https://portal.example.com/sharing/rest".
    pub base_url: String,
    /// Session token supplied by the caller.
    pub token: String,
}

/// Full configuration for one sweep run.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub portal: PortalSession,

    /// Category label selecting the member cohort, e.g. "/Categories/1-year Researcher".
    pub category: String,

    /// Username of the holding account that receives transferred content.
    pub holding_account: String,

    /// Members created fewer than this many days ago are never selected.
    pub min_age_days: i64,

    /// Whether selected members are deleted after their content is
    /// transferred. Off unless explicitly enabled.
    pub delete_accounts: bool,

    /// Page size for paginated member and item fetches.
    pub page_size: u32,
}

impl SweepConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            portal: PortalSession {
                base_url: require("PORTAL_URL")?,
                token: require("PORTAL_TOKEN")?,
            },
            category: require("SWEEP_CATEGORY")?,
            holding_account: require("SWEEP_HOLDING_ACCOUNT")?,
            min_age_days: env_or("SWEEP_MIN_AGE_DAYS", &DEFAULT_MIN_AGE_DAYS.to_string())
                .parse()
                .map_err(|_| Error::Config("Invalid SWEEP_MIN_AGE_DAYS".into()))?,
            delete_accounts: parse_bool(&env_or("SWEEP_DELETE_ACCOUNTS", "false")),
            page_size: env_or("SWEEP_PAGE_SIZE", &DEFAULT_PAGE_SIZE.to_string())
                .parse()
                .map_err(|_| Error::Config("Invalid SWEEP_PAGE_SIZE".into()))?,
        })
    }
}

fn require(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::Config(format!("{} must be set", key))),
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}
