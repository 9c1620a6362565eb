pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileOutbox, HttpWeatherProvider, MemoryDisplay, StaticDevice};
pub use config::PanelConfig;
pub use crate::core::{
    face::{FaceEvent, SettingsUpdate, WatchFace},
    profile::{FaceProfile, FaceVariant},
    receiver::WeatherReceiver,
    relay::WeatherRelay,
};
pub use utils::error::{PanelError, Result};
