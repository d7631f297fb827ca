use super::{
    founders::FoundersConfig,
    report::ReportConfig,
    simulation::SimulationConfig,
    traits::ConfigSection,
};
use crate::error::PanmixiaError;
use ::config::builder::{ConfigBuilder, DefaultState};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `PANMIXIA__SIMULATION__GENERATIONS=50`
pub const ENV_PREFIX: &str = "PANMIXIA";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub founders: FoundersConfig,
    pub report: ReportConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), PanmixiaError> {
        self.simulation.validate()?;
        self.founders.validate()?;
        self.report.validate()?;

        if let Some(locus) = self.report.locus {
            let loci = self.founders.to_population()?.loci();
            if locus >= loci {
                return Err(PanmixiaError::Configuration(format!(
                    "[{}] locus {} is out of range for founders with {} loci",
                    ReportConfig::section_name(),
                    locus,
                    loci
                )));
            }
        }
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::from_config(AppConfig::default())
    }

    pub fn from_config(config: AppConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Load a TOML or JSON file (by extension), then apply environment overrides
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PanmixiaError> {
        let builder = ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()))
            .add_source(Self::environment());
        self.install(builder)
    }

    /// Build the config from defaults plus environment overrides only
    pub fn load_from_env(&self) -> Result<(), PanmixiaError> {
        let builder = ::config::Config::builder().add_source(Self::environment());
        self.install(builder)
    }

    fn environment() -> ::config::Environment {
        ::config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
    }

    /// Deserialize and validate, replacing the current config only on success
    fn install(&self, builder: ConfigBuilder<DefaultState>) -> Result<(), PanmixiaError> {
        let settings = builder
            .build()
            .map_err(|e| PanmixiaError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| PanmixiaError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        *self.write()? = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PanmixiaError> {
        let config = self.get()?;
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| PanmixiaError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| PanmixiaError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> Result<AppConfig, PanmixiaError> {
        self.config
            .read()
            .map(|config| config.clone())
            .map_err(|_| PanmixiaError::Configuration("Config lock poisoned".to_string()))
    }

    /// Apply `f` and keep the result only if it validates
    pub fn update<F>(&self, f: F) -> Result<(), PanmixiaError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.get()?;
        f(&mut candidate);
        candidate.validate()?;

        *self.write()? = candidate;
        Ok(())
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, AppConfig>, PanmixiaError> {
        self.config
            .write()
            .map_err(|_| PanmixiaError::Configuration("Config lock poisoned".to_string()))
    }
}
