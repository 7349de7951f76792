use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration bundle for one generation run.
///
/// Every field except `mainiface` is mandatory; validation is eager so that
/// a bad configuration aborts before any parsing or emission happens.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateConfig {
    /// Logical grouping label; passed through, unused by generation logic.
    pub group: String,

    /// Output path for the generated declarations.
    pub headerfile: PathBuf,

    /// Output path for the generated definitions.
    pub implfile: PathBuf,

    /// `::`-delimited namespace nesting path wrapped around all declarations.
    pub namespace: String,

    /// Include of the generated header, emitted in the implementation file.
    pub realinclude: String,

    /// Public-facing include path. Accepted for interface parity; the proxy
    /// emitter does not consume it.
    pub prettyinclude: String,

    /// Type-definitions include, emitted in the header file.
    pub typesinclude: String,

    /// Path of the object/interface instantiation document.
    pub ifacexml: PathBuf,

    /// Path of the semantic specification document.
    pub specxml: PathBuf,

    /// Raw node name of the interface privileged as primary/base.
    #[serde(default)]
    pub mainiface: Option<String>,

    /// Enable verbose output.
    #[serde(default)]
    pub verbose: Option<bool>,
}

impl GenerateConfig {
    /// Load configuration from a JSON file. A missing required key fails
    /// with a serde error naming the key.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration before any processing begins.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("group", self.group.as_str()),
            ("namespace", self.namespace.as_str()),
            ("realinclude", self.realinclude.as_str()),
            ("prettyinclude", self.prettyinclude.as_str()),
            ("typesinclude", self.typesinclude.as_str()),
        ] {
            if value.is_empty() {
                return Err(Error::MissingConfig(key.to_string()));
            }
        }
        for (key, path) in [
            ("headerfile", &self.headerfile),
            ("implfile", &self.implfile),
        ] {
            if path.as_os_str().is_empty() {
                return Err(Error::MissingConfig(key.to_string()));
            }
        }
        for (key, path) in [("ifacexml", &self.ifacexml), ("specxml", &self.specxml)] {
            if path.as_os_str().is_empty() {
                return Err(Error::MissingConfig(key.to_string()));
            }
            if !path.exists() {
                return Err(Error::InvalidConfig(format!(
                    "{} does not exist: {}",
                    key,
                    path.display()
                )));
            }
        }
        Ok(())
    }

    /// Get effective verbose setting
    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }
}
