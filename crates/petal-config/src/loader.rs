use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::schema::PetalConfig;
use petal_core::PetalError;

/// Loads the Petal configuration for a build.
///
/// The document is read synchronously, once, before the scanner starts.
/// The loader holds it by value — there is no runtime mutation to guard.
#[derive(Debug)]
pub struct ConfigLoader {
    config: PetalConfig,
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > PETAL_CONFIG env > ./petal.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("PETAL_CONFIG") {
            return PathBuf::from(p);
        }
        PathBuf::from("petal.toml")
    }

    /// Load the config from disk, falling back to defaults.
    ///
    /// Validation warnings are logged; Error-severity findings fail the load.
    pub fn load(path: Option<&Path>) -> petal_core::Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            let raw = std::fs::read_to_string(&config_path)?;
            toml::from_str::<PetalConfig>(&raw).map_err(|e| {
                PetalError::Config(format!("failed to parse {}: {}", config_path.display(), e))
            })?
        } else {
            warn!(?config_path, "config file not found, using defaults");
            PetalConfig::default()
        };

        match config.validate() {
            Ok(warnings) => {
                for w in &warnings {
                    warn!("{}", w);
                }
            }
            Err(e) => {
                return Err(PetalError::Config(e));
            }
        }

        Ok(Self {
            config,
            config_path,
        })
    }

    /// The loaded document.
    pub fn config(&self) -> &PetalConfig {
        &self.config
    }

    /// Consume the loader, handing the document to the build.
    pub fn into_config(self) -> PetalConfig {
        self.config
    }

    /// Path the document was resolved from.
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}
