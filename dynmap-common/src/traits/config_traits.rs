use crate::error::Error;
use crate::models::DynmapConfig;

/// Owner of the live plugin configuration and its on-disk copy.
pub trait ConfigRepository: Send + Sync {
    /// Snapshot of the configuration currently in effect.
    fn current(&self) -> DynmapConfig;

    /// Replace the configuration in memory and overwrite the file with it.
    fn save(&self, config: &DynmapConfig) -> Result<(), Error>;

    /// Set `url`, persist, and return the updated configuration.
    fn set_url(&self, url: &str) -> Result<DynmapConfig, Error> {
        let mut cfg = self.current();
        cfg.url = url.to_string();
        self.save(&cfg)?;
        Ok(cfg)
    }
}
