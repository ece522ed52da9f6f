//! Dynmap status lookup: fetch `/up/world/world/` and render it as a chat reply.

pub mod fetcher;
pub mod formatter;
pub mod messages;

pub use fetcher::{status_endpoint, DynmapClient, STATUS_PATH};
pub use formatter::{format_server_time, format_status, round_half_up, weather_phrase};
pub use messages::Messages;
