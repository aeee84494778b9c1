/// config.rs — Calculator defaults loaded from .env
///
/// Loading happens once at startup; the CLI borrows &AppConfig to fill in
/// anything the user did not pass explicitly.
use anyhow::Result;
use std::env;

use crate::models::CommissionPolicy;
use crate::validate::DEFAULT_MAX_LEVERAGE;

/// Default futures holding period for funding cost (hours)
pub const DEFAULT_DURATION_HOURS: u32 = 24;
pub const DEFAULT_LEVERAGE: u32 = 1;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Label language code ("en" or "tr")
    pub lang: String,

    // ── Futures ──────────────────────────────────────────────────────
    pub commission_policy:      CommissionPolicy,
    pub default_duration_hours: u32,
    pub default_leverage:       u32,
    /// Upper bound enforced by input validation
    pub max_leverage:           u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lang: "en".into(),
            commission_policy: CommissionPolicy::SingleSided,
            default_duration_hours: DEFAULT_DURATION_HOURS,
            default_leverage: DEFAULT_LEVERAGE,
            max_leverage: DEFAULT_MAX_LEVERAGE,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables (after dotenv).
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok(); // ignore missing .env

        let lang = env::var("TRADEWIZARD_LANG")
            .unwrap_or_else(|_| "en".into())
            .trim()
            .to_lowercase();

        let cfg = Self {
            lang,
            commission_policy:      parse_env("COMMISSION_POLICY", CommissionPolicy::SingleSided)?,
            default_duration_hours: parse_env("DEFAULT_DURATION_HOURS", DEFAULT_DURATION_HOURS)?,
            default_leverage:       parse_env("DEFAULT_LEVERAGE", DEFAULT_LEVERAGE)?,
            max_leverage:           parse_env("MAX_LEVERAGE", DEFAULT_MAX_LEVERAGE)?,
        };

        if cfg.default_leverage == 0 || cfg.default_leverage > cfg.max_leverage {
            anyhow::bail!(
                "Config key DEFAULT_LEVERAGE: {} is outside 1..={}",
                cfg.default_leverage, cfg.max_leverage
            );
        }
        Ok(cfg)
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr + Copy,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(v) => v
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Config key {key}: {e}")),
        Err(_) => Ok(default),
    }
}
