// Adapters layer: weather http, transfer files, display and device.

pub mod device;
pub mod display;
pub mod http;
pub mod storage;

pub use device::StaticDevice;
pub use display::MemoryDisplay;
pub use http::HttpWeatherProvider;
pub use storage::FileOutbox;
