use crate::dim::error::DimError;
use crate::table::builder::BaseSystem;
use crate::table::formatter::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "dimcalc.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Base units the conversion table is expressed in
    #[serde(default)]
    pub base: BaseSystem,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DimError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| DimError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
            .map_err(|e| DimError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DimError> {
        toml::from_str(content).map_err(|e| DimError::Config(e.to_string()))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Base system with any per-field overrides applied on top
    pub fn base_with_overrides(
        &self,
        length: Option<&str>,
        time: Option<&str>,
        mass: Option<&str>,
    ) -> BaseSystem {
        BaseSystem {
            length: length.unwrap_or(&self.base.length).to_string(),
            time: time.unwrap_or(&self.base.time).to_string(),
            mass: mass.unwrap_or(&self.base.mass).to_string(),
        }
    }
}
