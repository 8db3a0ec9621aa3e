//! Configuration loading and representation.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. `orderflow.toml` in the working directory (optional) or an explicit file
//! 3. environment variables prefixed `ORDERFLOW__`, e.g. `ORDERFLOW__EXPORT__DIR`

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;

use orderflow_observability::LogFormat;

#[derive(Debug, Clone, Deserialize)]
pub struct OrderflowConfig {
    pub export: ExportConfig,
    pub log: LogConfig,
    #[serde(default)]
    pub fixtures: FixturesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory export artifacts are written to.
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub format: LogFormat,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixturesConfig {
    pub path: Option<PathBuf>,
}

impl OrderflowConfig {
    /// Load from `orderflow.toml` (if present) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(File::with_name("orderflow").required(false), env())
    }

    /// Load from an explicit file (must exist) and the environment.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_sources(File::from(path), env())
    }

    fn from_sources<S>(file: S, env: Environment) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        Config::builder()
            .set_default("export.dir", ".")?
            .set_default("log.format", "pretty")?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

fn env() -> Environment {
    Environment::with_prefix("ORDERFLOW").separator("__")
}
