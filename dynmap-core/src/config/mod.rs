//! File-backed plugin configuration.
//!
//! The live config lives at `{config_dir}/config.toml`. When that file is
//! missing or unparsable, the default document at
//! `{config_dir}/default_configs/config.toml` is copied over it (falling back
//! to the copy compiled into this crate) and used instead. Loading never fails.
//!
//! Writes go through a temporary file in the same directory that is renamed
//! into place, so the config file is always either the old or the new document.

mod paths;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tempfile::NamedTempFile;
use tracing::{debug, error, info, warn};

use dynmap_common::models::DynmapConfig;
use dynmap_common::traits::ConfigRepository;
use crate::Error;

pub use paths::{config_path, default_config_path, CONFIG_FILE_NAME, DEFAULT_CONFIG_DIR};

/// Default config document shipped with the plugin.
pub const BUNDLED_DEFAULT_CONFIG: &str =
    include_str!("../../../configs/default_configs/config.toml");

pub struct ConfigStore {
    config_path: PathBuf,
    config: RwLock<DynmapConfig>,
}

impl ConfigStore {
    /// Load the config from `config_dir`, repairing the file if needed.
    pub fn open(config_dir: impl AsRef<Path>) -> Self {
        let dir = config_dir.as_ref();
        Self::with_paths(config_path(dir), default_config_path(dir))
    }

    pub fn with_paths(config_path: PathBuf, default_path: PathBuf) -> Self {
        let config = load_config(&config_path, &default_path);
        info!("[configs] {:?}", config);
        Self {
            config_path,
            config: RwLock::new(config),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

impl ConfigRepository for ConfigStore {
    fn current(&self) -> DynmapConfig {
        self.config.read().clone()
    }

    fn save(&self, config: &DynmapConfig) -> Result<(), Error> {
        let content = toml::to_string_pretty(config)?;
        // Lock held across the write: file and memory change together.
        let mut guard = self.config.write();
        write_atomic(&self.config_path, &content)?;
        *guard = config.clone();
        debug!("Saved config to {:?}", self.config_path);
        Ok(())
    }
}

fn load_config(config_path: &Path, default_path: &Path) -> DynmapConfig {
    if !config_path.exists() {
        warn!("Config doesn't exist at {:?}. Using default config instead.", config_path);
        return restore_default(config_path, default_path);
    }

    match read_config(config_path) {
        Ok(config) => {
            debug!("Loaded config from {:?}", config_path);
            config
        }
        Err(e) => {
            warn!("Error parsing config {:?}: {}. Using default config instead.", config_path, e);
            restore_default(config_path, default_path)
        }
    }
}

fn read_config(path: &Path) -> Result<DynmapConfig, Error> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Copy the default document over `config_path` and return its contents.
fn restore_default(config_path: &Path, default_path: &Path) -> DynmapConfig {
    let loaded = fs::read_to_string(default_path)
        .map_err(Error::from)
        .and_then(|doc| {
            let config: DynmapConfig = toml::from_str(&doc)?;
            Ok((doc, config))
        });

    let (document, config) = match loaded {
        Ok(pair) => pair,
        Err(e) => {
            warn!("Default config {:?} unusable ({}); using built-in defaults.", default_path, e);
            let config = toml::from_str(BUNDLED_DEFAULT_CONFIG).unwrap_or_default();
            (BUNDLED_DEFAULT_CONFIG.to_string(), config)
        }
    };

    if let Err(e) = write_atomic(config_path, &document) {
        error!("Could not write default config to {:?}: {}", config_path, e);
    } else {
        info!("Created default config at {:?}", config_path);
    }
    config
}

fn write_atomic(path: &Path, content: &str) -> Result<(), Error> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}
