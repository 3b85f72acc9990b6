use std::env;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

/// Vendor API the dashboard reads from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Upstream {
    pub base_url: String,
    /// Copied by hand from an authenticated vendor session; never refreshed by us.
    pub auth_token: String,
    pub org_id: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    pub upstream: Upstream,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("logger.level", "info")?
            .set_default("upstream.timeout", 10)?
            .add_source(File::with_name("configs/default").required(false))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(
                Environment::with_prefix("AVMON")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("server.port", env::var("PORT").ok())?
            .build()?
            .try_deserialize()
    }
}
