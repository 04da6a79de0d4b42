use serde::Deserialize;
use std::path::PathBuf;

const CONFIG_PATH_VAR: &str = "JOB_BOARD_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/default";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub users_file: PathBuf,
    pub jobs_file: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,  // trace, debug, info, warn or error
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    // The file is optional, defaults cover every key
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .set_default("storage.users_file", "users.json")?
            .set_default("storage.jobs_file", "jobs.json")?
            .set_default("logging.level", "warn")?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}
