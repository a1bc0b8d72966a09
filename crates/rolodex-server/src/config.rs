use std::env;
use std::time::Duration;

/// Runtime limits for the HTTP surface.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 16 * 1024,
        }
    }
}

/// Process configuration, read from the environment at startup.
///
/// `ROLODEX_DB` has no default: without a database location the server
/// refuses to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub db_path: String,
    pub log_json: bool,
    pub shutdown_drain: Duration,
    pub api: ApiConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        let db_path = env::var("ROLODEX_DB")
            .map_err(|_| "ROLODEX_DB is required (path to the contacts database)".to_string())?;
        let cfg = Self {
            bind_addr: env::var("ROLODEX_BIND").unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            db_path,
            log_json: env_bool("ROLODEX_LOG_JSON", false),
            shutdown_drain: env_duration_ms("ROLODEX_SHUTDOWN_DRAIN_MS", 5000),
            api: ApiConfig {
                max_body_bytes: env_usize("ROLODEX_MAX_BODY_BYTES", 16 * 1024),
            },
        };
        validate_startup_config(&cfg)?;
        Ok(cfg)
    }
}

pub fn validate_startup_config(cfg: &ServerConfig) -> Result<(), String> {
    if cfg.db_path.trim().is_empty() {
        return Err("ROLODEX_DB must not be empty".to_string());
    }
    if cfg.bind_addr.trim().is_empty() {
        return Err("bind address must not be empty".to_string());
    }
    if cfg.api.max_body_bytes == 0 {
        return Err("api body limit must be > 0".to_string());
    }
    Ok(())
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_duration_ms(name: &str, default_ms: u64) -> Duration {
    Duration::from_millis(env_u64(name, default_ms))
}
