use anyhow::Result;
use chrono::NaiveDate;
use httpmock::prelude::*;
use stats_panel::adapters::storage::read_inbox;
use stats_panel::core::payload::decode_snapshot;
use stats_panel::core::ConfigProvider;
use stats_panel::domain::model::{Element, Permission, TemperatureUnit, UnitPreferences};
use stats_panel::utils::validation::Validate;
use stats_panel::{
    FaceEvent, FaceProfile, FaceVariant, FileOutbox, HttpWeatherProvider, MemoryDisplay,
    PanelConfig, StaticDevice, WatchFace, WeatherRelay,
};
use tempfile::TempDir;

fn forecast_body(unit: &str, temperature: f64) -> serde_json::Value {
    serde_json::json!({
        "latitude": 47.6,
        "longitude": -122.3,
        "current_units": {"time": "iso8601", "temperature_2m": unit},
        "current": {"time": "2025-03-04T09:00", "interval": 900, "temperature_2m": temperature}
    })
}

fn write_config(dir: &TempDir, endpoint: &str) -> Result<PanelConfig> {
    let outbox_dir = dir.path().join("outbox");
    let config_content = format!(
        r#"
[relay]
endpoint = "{}"
outbox_dir = "{}"
wake_interval_minutes = 30

[[relay.locations]]
name = "Seattle"
latitude = 47.6
longitude = -122.3

[face]
variant = "sense"
"#,
        endpoint,
        outbox_dir.to_str().unwrap().replace('\\', "/")
    );

    let config_path = dir.path().join("stats-panel.toml");
    std::fs::write(&config_path, config_content)?;
    let config = PanelConfig::from_file(&config_path)?;
    config.validate()?;
    Ok(config)
}

/// 手機端抓取天氣 → 寫入 outbox → 手錶端讀取並顯示
#[tokio::test]
async fn test_companion_to_watch_handoff() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/forecast")
            .query_param("latitude", "47.6")
            .query_param("longitude", "-122.3");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(forecast_body("°C", 11.7));
    });

    let config = write_config(&temp_dir, &server.url("/v1/forecast"))?;
    let provider = HttpWeatherProvider::from_config(&config, config.temperature_unit())?;
    let relay = WeatherRelay::from_config(provider, FileOutbox::new(config.outbox_path()), &config);

    let sent = relay.refresh().await?;
    api_mock.assert();
    assert_eq!(sent.temperature, 11);
    assert_eq!(sent.unit, TemperatureUnit::Celsius);

    let bytes = read_inbox(std::path::Path::new(config.outbox_path()), config.data_file())
        .await?
        .expect("payload written to outbox");
    assert_eq!(decode_snapshot(&bytes)?, sent);

    let device = StaticDevice {
        units: UnitPreferences {
            temperature_unit: TemperatureUnit::Fahrenheit,
            ..UnitPreferences::default()
        },
        ..StaticDevice::default()
    }
    .grant(Permission::Location);
    let mut face = WatchFace::new(config.face_profile(), device, MemoryDisplay::new());
    face.start();
    assert_eq!(face.sink().text(Element::TemperatureLabel), Some("--°"));

    face.dispatch(FaceEvent::PayloadReceived(bytes));
    // 11°C -> 51.8°F
    assert_eq!(face.sink().text(Element::TemperatureLabel), Some("52°F"));
    assert_eq!(face.weather().map(|w| w.temperature), Some(52));

    let now = NaiveDate::from_ymd_opt(2025, 3, 4)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    face.dispatch(FaceEvent::Tick(now));
    assert_eq!(face.sink().text(Element::TemperatureLabel), Some("52°F"));
    Ok(())
}

#[tokio::test]
async fn test_failed_fetch_leaves_previous_payload() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let mut ok_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/forecast");
        then.status(200).json_body(forecast_body("°F", 48.2));
    });

    let config = write_config(&temp_dir, &server.url("/v1/forecast"))?;
    let provider = HttpWeatherProvider::from_config(&config, config.temperature_unit())?;
    let relay = WeatherRelay::from_config(provider, FileOutbox::new(config.outbox_path()), &config);

    assert!(relay.refresh_cycle().await.is_some());
    ok_mock.delete();

    let failing_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/forecast");
        then.status(503);
    });
    assert!(relay.refresh_cycle().await.is_none());
    failing_mock.assert();

    let bytes = read_inbox(std::path::Path::new(config.outbox_path()), config.data_file())
        .await?
        .unwrap();
    let snapshot = decode_snapshot(&bytes)?;
    assert_eq!(snapshot.temperature, 48);
    assert_eq!(snapshot.unit, TemperatureUnit::Fahrenheit);
    Ok(())
}

#[tokio::test]
async fn test_watch_without_location_permission_shows_placeholder() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let outbox = FileOutbox::new(temp_dir.path());
    let provider = StaticProvider;
    let relay = WeatherRelay::new(
        provider,
        outbox.clone(),
        "weather.cbor",
        std::time::Duration::from_secs(60),
    );
    relay.refresh().await?;

    let bytes = outbox.read_latest("weather.cbor").await?.unwrap();
    let mut face = WatchFace::new(
        FaceProfile::for_variant(FaceVariant::Sense),
        StaticDevice::default(),
        MemoryDisplay::new(),
    );
    face.start();
    face.dispatch(FaceEvent::PayloadReceived(bytes));

    assert_eq!(face.sink().text(Element::TemperatureLabel), Some("--°"));
    assert_eq!(face.weather(), None);
    Ok(())
}

struct StaticProvider;

#[async_trait::async_trait]
impl stats_panel::domain::ports::WeatherProvider for StaticProvider {
    async fn current_weather(
        &self,
    ) -> stats_panel::Result<stats_panel::domain::model::WeatherReport> {
        Ok(stats_panel::domain::model::WeatherReport {
            temperature_unit: TemperatureUnit::Celsius,
            locations: vec![stats_panel::domain::model::LocationWeather {
                name: "Home".to_string(),
                current_temperature: 30.4,
            }],
        })
    }
}
