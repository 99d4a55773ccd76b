use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_PLAN_FILE: &str = "trading_plan.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Storage
    pub plan_file: String,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            plan_file: env("TRADE_PLAN_FILE", DEFAULT_PLAN_FILE),
            log_level: env("LOG_LEVEL", "INFO"),
        }
    }

    pub fn plan_path(&self) -> PathBuf {
        PathBuf::from(&self.plan_file)
    }

    /// Replace the backing file, e.g. from a command-line flag.
    pub fn with_plan_file(mut self, path: impl Into<String>) -> Self {
        self.plan_file = path.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            plan_file: DEFAULT_PLAN_FILE.to_string(),
            log_level: "INFO".to_string(),
        }
    }
}
