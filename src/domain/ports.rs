use crate::domain::model::{
    ActivitySnapshot, BatteryState, Element, Location, Permission, UnitPreferences, WeatherReport,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Fire-and-forget writes into the face's display elements. Last write wins.
pub trait DisplaySink {
    fn set_text(&mut self, element: Element, text: &str);
    fn set_image(&mut self, element: Element, image: &str);
    fn set_fill(&mut self, element: Element, color: &str);
}

pub trait PermissionGate {
    fn granted(&self, permission: Permission) -> bool;
}

/// Watch-side platform services read by the face on each event.
pub trait Device: PermissionGate {
    fn unit_preferences(&self) -> UnitPreferences;
    fn activity(&self) -> ActivitySnapshot;
    fn battery(&self) -> BatteryState;
    fn has_heart_rate_sensor(&self) -> bool;
    fn start_heart_rate(&mut self);
    fn stop_heart_rate(&mut self);
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(&self) -> Result<WeatherReport>;
}

/// Best-effort transfer queue towards the paired watch.
pub trait Outbox: Send + Sync {
    fn enqueue(
        &self,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn weather_endpoint(&self) -> &str;
    fn outbox_path(&self) -> &str;
    fn data_file(&self) -> &str;
    fn wake_interval(&self) -> Duration;
    fn request_timeout(&self) -> Duration;
    fn locations(&self) -> &[Location];
}
