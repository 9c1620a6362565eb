pub mod battery;
pub mod clock;
pub mod face;
pub mod format;
pub mod payload;
pub mod profile;
pub mod receiver;
pub mod relay;
pub mod units;

pub use crate::domain::model::{
    ActivitySnapshot, BatteryState, DisplayPreferences, Element, WeatherReport, WeatherSnapshot,
};
pub use crate::domain::ports::{
    ConfigProvider, Device, DisplaySink, Outbox, PermissionGate, WeatherProvider,
};
pub use crate::utils::error::Result;
