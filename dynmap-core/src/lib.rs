// src/lib.rs

pub mod config;
pub mod http;
pub mod services;
pub mod utils;

pub use dynmap_common::error::Error;
pub use config::ConfigStore;
pub use http::{DefaultHttpClient, HttpClient};
pub use services::command_service::{CommandContext, CommandResponse, CommandService};
pub use services::dynmap::DynmapClient;
