use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub archive: ArchiveSettings,
    pub guide: GuideSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ArchiveSettings {
    /// Path of the persisted plan collection.
    pub path: String,
    /// Older collection file read on first load when the primary is absent.
    pub legacy_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GuideSettings {
    /// Currency code substituted into the flight table header when a save
    /// does not specify one.
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Settings {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `WAYFARE__SERVER__PORT=9090` overrides the port
            .add_source(config::Environment::with_prefix("WAYFARE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
