use serde::{Deserialize, Serialize};

/// Language used for every reply the plugin sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en-US")]
    EnUs,
}

/// Persisted plugin configuration.
///
/// Keys are camelCase on disk (`showPlayerStats`, ...). Any key missing from
/// the file takes its default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DynmapConfig {
    /// Dynmap base URL. Empty until someone configures it.
    pub url: String,
    pub show_player_stats: bool,
    pub show_server_time: bool,
    pub show_weather: bool,
    pub locale: Locale,
}

impl Default for DynmapConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            show_player_stats: true,
            show_server_time: true,
            show_weather: true,
            locale: Locale::default(),
        }
    }
}

impl DynmapConfig {
    /// The configured base URL, or `None` while it is still unset.
    pub fn base_url(&self) -> Option<&str> {
        let trimmed = self.url.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}
