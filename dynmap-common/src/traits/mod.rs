pub mod config_traits;
pub mod status_traits;

pub use config_traits::ConfigRepository;
pub use status_traits::StatusSource;
