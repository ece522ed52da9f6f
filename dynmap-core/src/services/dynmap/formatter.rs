use dynmap_common::models::{DynmapConfig, Locale, ServerStatus};
use crate::services::dynmap::messages::Messages;
use crate::utils::time::server_time_of_day;

/// Renders a status reply. Lines appear in a fixed order: player count,
/// player list (only when someone is online), server time, weather. Disabled
/// sections are left out entirely.
pub fn format_status(status: &ServerStatus, config: &DynmapConfig) -> String {
    let m = Messages::for_locale(config.locale);
    let mut msg = m.player_count(status.players.len());

    if !status.players.is_empty() {
        msg.push('\n');
        msg.push_str(m.online_players_label());

        let last = status.players.len() - 1;
        for (i, player) in status.players.iter().enumerate() {
            msg.push_str(&player.name);
            if config.show_player_stats {
                msg.push_str(&m.player_stats(
                    round_half_up(player.health),
                    round_half_up(player.armor),
                ));
            }
            msg.push_str(if i == last { m.terminator() } else { m.list_separator() });
        }
    }

    if config.show_server_time {
        msg.push('\n');
        msg.push_str(m.server_time_label());
        msg.push_str(&format_server_time(status.servertime, config.locale));
        msg.push_str(m.terminator());
    }

    if config.show_weather {
        msg.push('\n');
        msg.push_str(m.weather_label());
        msg.push_str(weather_phrase(status.has_storm, status.is_thundering, config.locale));
        msg.push_str(m.terminator());
    }

    msg
}

/// Short time-of-day string for a Dynmap `servertime`.
pub fn format_server_time(servertime: i64, locale: Locale) -> String {
    let m = Messages::for_locale(locale);
    server_time_of_day(servertime).format(m.time_format()).to_string()
}

/// Thunder needs a storm; without one the sky is clear.
pub fn weather_phrase(has_storm: bool, is_thundering: bool, locale: Locale) -> &'static str {
    let m = Messages::for_locale(locale);
    match (has_storm, is_thundering) {
        (true, true) => m.weather_thunder(),
        (true, false) => m.weather_rain(),
        (false, _) => m.weather_clear(),
    }
}

/// Nearest integer, halves rounded up.
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        (floor + 1.0) as i64
    } else {
        floor as i64
    }
}
