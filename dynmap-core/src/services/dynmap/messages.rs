//! Reply texts and punctuation per [`Locale`].

use dynmap_common::models::Locale;

/// Command users type to configure the URL; identical in every locale.
pub const SET_URL_COMMAND: &str = "#Dynmap设置网址";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn for_locale(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn player_count(&self, count: usize) -> String {
        match self.locale {
            Locale::ZhCn => format!("MC服务器当前有{}人在线。", count),
            Locale::EnUs if count == 1 => "There is currently 1 player online on the MC server.".to_string(),
            Locale::EnUs => format!("There are currently {} players online on the MC server.", count),
        }
    }

    pub fn online_players_label(&self) -> &'static str {
        match self.locale {
            Locale::ZhCn => "在线玩家：",
            Locale::EnUs => "Online players: ",
        }
    }

    pub fn player_stats(&self, health: i64, armor: i64) -> String {
        match self.locale {
            Locale::ZhCn => format!("（{}❤️，{}🦺）", health, armor),
            Locale::EnUs => format!(" ({}❤️, {}🦺)", health, armor),
        }
    }

    /// Separator between two player entries.
    pub fn list_separator(&self) -> &'static str {
        match self.locale {
            Locale::ZhCn => "、",
            Locale::EnUs => ", ",
        }
    }

    /// Sentence terminator, also closes the player list.
    pub fn terminator(&self) -> &'static str {
        match self.locale {
            Locale::ZhCn => "。",
            Locale::EnUs => ".",
        }
    }

    /// chrono pattern for the short time-of-day form.
    pub fn time_format(&self) -> &'static str {
        match self.locale {
            Locale::ZhCn => "%H:%M",
            Locale::EnUs => "%-I:%M %p",
        }
    }

    pub fn server_time_label(&self) -> &'static str {
        match self.locale {
            Locale::ZhCn => "服务器时间：",
            Locale::EnUs => "Server time: ",
        }
    }

    pub fn weather_label(&self) -> &'static str {
        match self.locale {
            Locale::ZhCn => "服务器天气：",
            Locale::EnUs => "Server weather: ",
        }
    }

    pub fn weather_thunder(&self) -> &'static str {
        match self.locale {
            Locale::ZhCn => "打雷",
            Locale::EnUs => "Thundering",
        }
    }

    pub fn weather_rain(&self) -> &'static str {
        match self.locale {
            Locale::ZhCn => "下雨",
            Locale::EnUs => "Raining",
        }
    }

    pub fn weather_clear(&self) -> &'static str {
        match self.locale {
            Locale::ZhCn => "晴天",
            Locale::EnUs => "Clear",
        }
    }

    pub fn server_unreachable(&self) -> String {
        match self.locale {
            Locale::ZhCn => "无法连接到MC服务器，可能是服务器未开机。".to_string(),
            Locale::EnUs => "Unable to reach the MC server. It may be offline.".to_string(),
        }
    }

    pub fn not_configured(&self) -> String {
        match self.locale {
            Locale::ZhCn => format!("请先使用“{}”命令来配置Dynmap网址。", SET_URL_COMMAND),
            Locale::EnUs => format!("Please set the Dynmap URL first with the “{}” command.", SET_URL_COMMAND),
        }
    }

    pub fn set_url_usage(&self) -> String {
        match self.locale {
            Locale::ZhCn => format!("请将网址和命令一同发送，例如：{} https://example.com", SET_URL_COMMAND),
            Locale::EnUs => format!(
                "Please send the URL together with the command, e.g. {} https://example.com",
                SET_URL_COMMAND
            ),
        }
    }

    pub fn invalid_url(&self, url: &str) -> String {
        match self.locale {
            Locale::ZhCn => format!("“{}”不是有效的网址，例如：{} https://example.com", url, SET_URL_COMMAND),
            Locale::EnUs => format!(
                "“{}” is not a valid URL, e.g. {} https://example.com",
                url, SET_URL_COMMAND
            ),
        }
    }

    pub fn url_set(&self, url: &str) -> String {
        match self.locale {
            Locale::ZhCn => format!("Dynmap网址已设置为{}", url),
            Locale::EnUs => format!("Dynmap URL set to {}", url),
        }
    }

    pub fn save_failed(&self) -> String {
        match self.locale {
            Locale::ZhCn => "Dynmap网址保存失败，请查看日志。".to_string(),
            Locale::EnUs => "Failed to save the Dynmap URL, check the logs.".to_string(),
        }
    }

    pub fn permission_denied(&self) -> String {
        match self.locale {
            Locale::ZhCn => "只有主人才能使用这个命令。".to_string(),
            Locale::EnUs => "Only the bot master can use this command.".to_string(),
        }
    }
}
