use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::PresentationType;
use crate::error::{Result, ScoutError};

/// Project-level config file name, looked up under the root directory.
pub const PROJECT_CONFIG_FILE: &str = "confscout.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load defaults, then the explicit (or `CONFSCOUT_CONFIG`) file, or else the
    /// global and project files, then environment overrides.
    pub fn load(explicit_path: Option<&Path>, root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("CONFSCOUT_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?
                .ok_or_else(|| ScoutError::MissingConfig(path.display().to_string()))?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(&root.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides(|key| std::env::var(key).ok())?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match dirs::config_dir() {
            Some(dir) => Self::load_patch(&dir.join("confscout/config.toml")),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| ScoutError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| ScoutError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.catalog {
            self.catalog.merge(patch);
        }
        if let Some(patch) = patch.suggest {
            self.suggest.merge(patch);
        }
        if let Some(patch) = patch.logging {
            self.logging.merge(patch);
        }
    }

    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = EnvReader { lookup };

        if let Some(value) = env.string("CONFSCOUT_CATALOG_SOURCE") {
            self.catalog.source = Some(PathBuf::from(value));
        }
        if let Some(value) = env.string("CONFSCOUT_PRESENTATION") {
            self.catalog.presentation = value
                .parse()
                .map_err(|err| ScoutError::Config(format!("invalid CONFSCOUT_PRESENTATION: {err}")))?;
        }

        if let Some(value) = env.usize("CONFSCOUT_SUGGEST_PARALLEL_THRESHOLD")? {
            self.suggest.parallel_threshold = value;
        }
        if let Some(value) = env.usize("CONFSCOUT_SUGGEST_MAX_RESULTS")? {
            self.suggest.max_results = Some(value);
        }

        if let Some(value) = env.string("CONFSCOUT_LOG_LEVEL") {
            self.logging.level = value;
        }
        if let Some(value) = env.bool("CONFSCOUT_LOG_JSON") {
            self.logging.json = value;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalogue read by the file fetcher
    #[serde(default)]
    pub source: Option<PathBuf>,
    #[serde(default)]
    pub presentation: PresentationType,
}

impl CatalogConfig {
    fn merge(&mut self, patch: CatalogPatch) {
        if let Some(value) = patch.source {
            self.source = Some(value);
        }
        if let Some(value) = patch.presentation {
            self.presentation = value;
        }
    }

    /// Catalogue path, or an error naming the missing key.
    pub fn require_source(&self) -> Result<&Path> {
        self.source
            .as_deref()
            .ok_or_else(|| ScoutError::MissingConfig("catalog.source".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Talk count at which suggestion scans fan out across threads
    pub parallel_threshold: usize,
    /// Keep at most this many ranked suggestions
    pub max_results: Option<usize>,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 2048,
            max_results: None,
        }
    }
}

impl SuggestConfig {
    fn merge(&mut self, patch: SuggestPatch) {
        if let Some(value) = patch.parallel_threshold {
            self.parallel_threshold = value;
        }
        if let Some(value) = patch.max_results {
            self.max_results = Some(value);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LoggingConfig {
    fn merge(&mut self, patch: LoggingPatch) {
        if let Some(value) = patch.level {
            self.level = value;
        }
        if let Some(value) = patch.json {
            self.json = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub catalog: Option<CatalogPatch>,
    pub suggest: Option<SuggestPatch>,
    pub logging: Option<LoggingPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CatalogPatch {
    pub source: Option<PathBuf>,
    pub presentation: Option<PresentationType>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SuggestPatch {
    pub parallel_threshold: Option<usize>,
    pub max_results: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LoggingPatch {
    pub level: Option<String>,
    pub json: Option<bool>,
}

struct EnvReader<F> {
    lookup: F,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn string(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
    }

    fn bool(&self, key: &str) -> Option<bool> {
        (self.lookup)(key).map(|value| {
            matches!(
                value.to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        })
    }

    fn usize(&self, key: &str) -> Result<Option<usize>> {
        match (self.lookup)(key) {
            Some(value) => value.parse::<usize>().map(Some).map_err(|err| {
                ScoutError::Config(format!("invalid {key} value {value}: {err}"))
            }),
            None => Ok(None),
        }
    }
}
