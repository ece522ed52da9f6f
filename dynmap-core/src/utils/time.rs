// src/utils/time.rs

use chrono::NaiveTime;

const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_DAY: i64 = 86_400_000;

/// Fixed six hour shift applied to Dynmap `servertime`; tick 0 is 06:00.
pub const SERVER_TIME_OFFSET_MS: f64 = 21_600_000.0;

/// Converts Dynmap `servertime` (1000 units per in-game hour) into epoch
/// milliseconds, truncated the way a JS `Date` would.
pub fn server_time_to_epoch_ms(servertime: i64) -> i64 {
    (servertime as f64 / 1000.0 * MS_PER_HOUR + SERVER_TIME_OFFSET_MS).trunc() as i64
}

/// UTC time of day for a Dynmap `servertime`.
pub fn server_time_of_day(servertime: i64) -> NaiveTime {
    let ms = server_time_to_epoch_ms(servertime).rem_euclid(MS_PER_DAY);
    let secs = (ms / 1000) as u32;
    let nanos = ((ms % 1000) * 1_000_000) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos).unwrap_or_default()
}
