use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub feed: FeedConfig,
    pub assets: AssetsConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
    pub interval_ms: u64,  // delay between two live metric pushes
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LimitsConfig {
    pub max_body_size: usize,  // 10MB in bytes
}

impl Config {
    /// Defaults, then `$VABHUB_CONFIG` (or the optional `config/default`), then `VABHUB_*` variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        match std::env::var("VABHUB_CONFIG") {
            Ok(path) => Self::from_file(path),
            Err(_) => Self::from_sources(
                config::File::with_name("config/default").required(false),
                environment(),
            ),
        }
    }

    /// Loads an explicit file on top of the built-in defaults; `VABHUB_*` variables still win.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::from_sources(config::File::from(path.as_ref()), environment())
    }

    fn from_sources<F>(file: F, env: config::Environment) -> Result<Self, config::ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let config = Self::builder()?
            .add_source(file)
            .add_source(env)
            .build()?;

        config.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 9090)?
            .set_default("feed.interval_ms", 3000)?
            .set_default("assets.templates_dir", "templates")?
            .set_default("assets.static_dir", "static")?
            .set_default("limits.max_body_size", 10 * 1024 * 1024)
    }

    /// Built-in defaults only, for tests that tweak a field or two.
    #[cfg(test)]
    pub fn defaults() -> Self {
        Self::builder()
            .and_then(|builder| builder.build())
            .and_then(|config| config.try_deserialize())
            .expect("built-in defaults must deserialize")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn feed_interval(&self) -> Duration {
        Duration::from_millis(self.feed.interval_ms)
    }
}

// `VABHUB_SERVER__PORT` -> server.port
fn environment() -> config::Environment {
    config::Environment::with_prefix("VABHUB")
        .prefix_separator("_")
        .separator("__")
}
