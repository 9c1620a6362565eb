use crate::domain::model::{Location, LocationWeather, TemperatureUnit, WeatherReport};
use crate::domain::ports::{ConfigProvider, WeatherProvider};
use crate::utils::error::{PanelError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_units: Option<CurrentUnits>,
    current: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentUnits {
    temperature_2m: String,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature_2m: f64,
}

/// Current-conditions client for an Open-Meteo style forecast endpoint.
pub struct HttpWeatherProvider {
    client: Client,
    endpoint: String,
    locations: Vec<Location>,
    unit: TemperatureUnit,
}

impl HttpWeatherProvider {
    pub fn new(
        endpoint: impl Into<String>,
        locations: Vec<Location>,
        unit: TemperatureUnit,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            locations,
            unit,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C, unit: TemperatureUnit) -> Result<Self> {
        Self::new(
            config.weather_endpoint(),
            config.locations().to_vec(),
            unit,
            config.request_timeout(),
        )
    }

    fn unit_param(&self) -> &'static str {
        match self.unit {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }
}

#[async_trait::async_trait]
impl WeatherProvider for HttpWeatherProvider {
    async fn current_weather(&self) -> Result<WeatherReport> {
        let mut report = WeatherReport {
            temperature_unit: self.unit,
            locations: Vec::new(),
        };

        // 只取第一個地點，與手錶端顯示一致
        let Some(location) = self.locations.first() else {
            tracing::debug!("No locations configured, nothing to fetch");
            return Ok(report);
        };

        tracing::debug!("Making weather request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current", "temperature_2m".to_string()),
                ("temperature_unit", self.unit_param().to_string()),
            ])
            .send()
            .await?;

        tracing::debug!("Weather response status: {}", response.status());
        if !response.status().is_success() {
            return Err(PanelError::FetchFailure {
                message: format!("{} returned HTTP {}", self.endpoint, response.status()),
            });
        }

        let body: ForecastResponse = response.json().await?;
        if let Some(units) = body.current_units {
            match TemperatureUnit::parse(&units.temperature_2m) {
                Some(unit) => report.temperature_unit = unit,
                None => tracing::warn!(
                    "Unknown temperature unit '{}', assuming {:?}",
                    units.temperature_2m,
                    self.unit
                ),
            }
        }

        if let Some(current) = body.current {
            report.locations.push(LocationWeather {
                name: location.name.clone(),
                current_temperature: current.temperature_2m,
            });
        }

        Ok(report)
    }
}
