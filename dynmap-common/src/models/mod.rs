// File: dynmap-common/src/models/mod.rs
pub mod command;
pub mod config;
pub mod status;

pub use command::{CommandKind, Permission};
pub use config::{DynmapConfig, Locale};
pub use status::{Player, ServerStatus};
