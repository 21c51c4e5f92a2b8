use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

const DEFAULT_API_URL: &str = "https://api.supabase.com/v1";
const DEFAULT_SCRIPTS_DIR: &str = "sql";
const DEFAULT_STATEMENT_DELAY_MS: u64 = 100;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub access_token: String,
    pub project_ref: String,
    pub api_base: String,
    pub scripts_dir: PathBuf,
    pub statement_delay: Duration,
    pub request_timeout: Duration,
    pub log_level: String,
}

/// One SQL file to apply, in order.
#[derive(Debug, Clone)]
pub struct ScriptFile {
    pub path: PathBuf,
    pub description: &'static str,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let access_token = required("SUPABASE_ACCESS_TOKEN")?;
        let project_ref = required("SUPABASE_PROJECT_REF")?;

        let api_base = std::env::var("SUPABASE_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let raw_dir = std::env::var("SQL_SCRIPTS_DIR")
            .unwrap_or_else(|_| DEFAULT_SCRIPTS_DIR.to_string());
        let scripts_dir = resolve_path_relative_to_manifest_dir(&raw_dir);

        let statement_delay_ms = env_u64("STATEMENT_DELAY_MS", DEFAULT_STATEMENT_DELAY_MS);
        let request_timeout_ms = env_u64("REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS);

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            access_token,
            project_ref,
            api_base,
            scripts_dir,
            statement_delay: Duration::from_millis(statement_delay_ms),
            request_timeout: Duration::from_millis(request_timeout_ms),
            log_level,
        })
    }

    /// The setup files applied by one run, in dependency order: the schema
    /// and seed data must exist before RLS policies can reference them.
    pub fn script_files(&self) -> Vec<ScriptFile> {
        vec![
            ScriptFile {
                path: self.scripts_dir.join("complete-database-setup.sql"),
                description: "Creating tables, indexes, and seed data",
            },
            ScriptFile {
                path: self.scripts_dir.join("setup-rls-policies.sql"),
                description: "Setting up Row Level Security policies",
            },
        ]
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required env var: {key}")]
    Missing { key: &'static str },
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing { key })
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

fn resolve_path_relative_to_manifest_dir(value: &str) -> PathBuf {
    let raw = Path::new(value);
    if raw.is_absolute() {
        return raw.to_path_buf();
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(raw)
}
