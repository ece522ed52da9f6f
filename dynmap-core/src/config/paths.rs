//! Config path resolution.

use std::path::{Path, PathBuf};

/// File name of the live config inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Sub-directory holding the bundled default config.
pub const DEFAULT_CONFIG_DIR: &str = "default_configs";

/// Path: `{config_dir}/config.toml`
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Path: `{config_dir}/default_configs/config.toml`
pub fn default_config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(DEFAULT_CONFIG_DIR).join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sits_beside_live_config() {
        let dir = PathBuf::from("/srv/bot/plugins/dynmap/configs");
        assert!(config_path(&dir).ends_with("configs/config.toml"));
        assert!(default_config_path(&dir).ends_with("configs/default_configs/config.toml"));
    }
}
