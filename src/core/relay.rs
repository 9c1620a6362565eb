use crate::core::payload::encode_snapshot;
use crate::domain::model::{Permission, WeatherReport, WeatherSnapshot};
use crate::domain::ports::{ConfigProvider, Outbox, PermissionGate, WeatherProvider};
use crate::utils::error::{PanelError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

pub const DEFAULT_WAKE_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Companion side of the weather hand-off: fetch, encode, enqueue.
pub struct WeatherRelay<W: WeatherProvider, O: Outbox> {
    provider: W,
    outbox: O,
    data_file: String,
    wake_interval: Duration,
}

impl<W: WeatherProvider, O: Outbox> WeatherRelay<W, O> {
    pub fn new(
        provider: W,
        outbox: O,
        data_file: impl Into<String>,
        wake_interval: Duration,
    ) -> Self {
        Self {
            provider,
            outbox,
            data_file: data_file.into(),
            wake_interval,
        }
    }

    pub fn from_config<C: ConfigProvider>(provider: W, outbox: O, config: &C) -> Self {
        Self::new(provider, outbox, config.data_file(), config.wake_interval())
    }

    pub fn wake_interval(&self) -> Duration {
        self.wake_interval
    }

    /// Only the first location counts; its temperature is floored.
    pub fn build_snapshot(report: &WeatherReport) -> Result<WeatherSnapshot> {
        let location = report.locations.first().ok_or(PanelError::EmptyResult)?;
        let temperature = location.current_temperature;
        if !temperature.is_finite() {
            return Err(PanelError::FetchFailure {
                message: format!("non-finite temperature for {}", location.name),
            });
        }

        Ok(WeatherSnapshot {
            temperature: temperature.floor() as i32,
            unit: report.temperature_unit,
        })
    }

    pub async fn send(&self, snapshot: &WeatherSnapshot) -> Result<()> {
        let data = encode_snapshot(snapshot)?;
        tracing::debug!("Enqueueing {} ({} bytes)", self.data_file, data.len());
        self.outbox
            .enqueue(&self.data_file, &data)
            .await
            .map_err(|e| match e {
                transfer @ PanelError::TransferFailure { .. } => transfer,
                other => PanelError::TransferFailure {
                    message: other.to_string(),
                },
            })
    }

    pub async fn refresh(&self) -> Result<WeatherSnapshot> {
        let report = self.provider.current_weather().await?;
        tracing::debug!("Weather report with {} location(s)", report.locations.len());

        let snapshot = Self::build_snapshot(&report)?;
        self.send(&snapshot).await?;
        Ok(snapshot)
    }

    /// One wake cycle. Failures are logged and the cycle is skipped.
    pub async fn refresh_cycle(&self) -> Option<WeatherSnapshot> {
        match self.refresh().await {
            Ok(snapshot) => {
                tracing::info!(
                    "🌡️ Sent weather snapshot: {}°{}",
                    snapshot.temperature,
                    snapshot.unit.symbol()
                );
                Some(snapshot)
            }
            Err(PanelError::EmptyResult) => {
                tracing::warn!("No data for this location.");
                None
            }
            Err(e) if e.is_warning() => {
                tracing::warn!("⚠️ {} (skipping until next wake)", e);
                None
            }
            Err(e) => {
                tracing::error!("❌ {} (skipping until next wake)", e);
                None
            }
        }
    }

    /// Refreshes once immediately, then on every wake interval until `shutdown`
    /// resolves. Returns the number of cycles that ran.
    pub async fn run<P, F>(&self, permissions: &P, shutdown: F) -> Result<u64>
    where
        P: PermissionGate,
        F: Future<Output = ()>,
    {
        if !permissions.granted(Permission::Location) {
            tracing::error!("This app requires the {} permission.", Permission::Location);
            return Err(PanelError::PermissionDenied {
                permission: Permission::Location,
            });
        }

        tracing::info!("🚀 Weather relay started, waking every {:?}", self.wake_interval);
        let mut interval = tokio::time::interval(self.wake_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut cycles = 0u64;
        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = interval.tick() => {
                    self.refresh_cycle().await;
                    cycles += 1;
                }
            }
        }

        tracing::info!("Weather relay stopped after {} cycle(s)", cycles);
        Ok(cycles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::payload::decode_snapshot;
    use crate::domain::model::{LocationWeather, TemperatureUnit};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct FixedProvider {
        result: std::result::Result<WeatherReport, String>,
        calls: Arc<AtomicUsize>,
    }

    impl FixedProvider {
        fn report(unit: TemperatureUnit, temperatures: &[f64]) -> Self {
            Self {
                result: Ok(WeatherReport {
                    temperature_unit: unit,
                    locations: temperatures
                        .iter()
                        .enumerate()
                        .map(|(i, t)| LocationWeather {
                            name: format!("Location {}", i),
                            current_temperature: *t,
                        })
                        .collect(),
                }),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                result: Err(message.to_string()),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait::async_trait]
    impl WeatherProvider for FixedProvider {
        async fn current_weather(&self) -> Result<WeatherReport> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result
                .clone()
                .map_err(|message| PanelError::FetchFailure { message })
        }
    }

    #[derive(Clone, Default)]
    struct MockOutbox {
        sent: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
        fail: bool,
    }

    impl Outbox for MockOutbox {
        async fn enqueue(&self, name: &str, data: &[u8]) -> Result<()> {
            if self.fail {
                return Err(PanelError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "outbox closed",
                )));
            }
            self.sent.lock().await.push((name.to_string(), data.to_vec()));
            Ok(())
        }
    }

    struct Granted(HashSet<Permission>);

    impl PermissionGate for Granted {
        fn granted(&self, permission: Permission) -> bool {
            self.0.contains(&permission)
        }
    }

    fn relay(
        provider: FixedProvider,
        outbox: MockOutbox,
    ) -> WeatherRelay<FixedProvider, MockOutbox> {
        WeatherRelay::new(provider, outbox, "weather.cbor", Duration::from_millis(20))
    }

    #[tokio::test]
    async fn test_refresh_floors_first_location_and_enqueues() {
        let outbox = MockOutbox::default();
        let relay = relay(
            FixedProvider::report(TemperatureUnit::Fahrenheit, &[71.9, 50.0]),
            outbox.clone(),
        );

        let snapshot = relay.refresh().await.unwrap();

        assert_eq!(snapshot.temperature, 71);
        assert_eq!(snapshot.unit, TemperatureUnit::Fahrenheit);
        let sent = outbox.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "weather.cbor");
        assert_eq!(decode_snapshot(&sent[0].1).unwrap(), snapshot);
    }

    #[tokio::test]
    async fn test_negative_temperature_floors_down() {
        let relay = relay(
            FixedProvider::report(TemperatureUnit::Celsius, &[-0.5]),
            MockOutbox::default(),
        );
        assert_eq!(relay.refresh().await.unwrap().temperature, -1);
    }

    #[tokio::test]
    async fn test_empty_locations_skip_cycle() {
        let outbox = MockOutbox::default();
        let relay = relay(FixedProvider::report(TemperatureUnit::Celsius, &[]), outbox.clone());

        assert!(matches!(relay.refresh().await, Err(PanelError::EmptyResult)));
        assert_eq!(relay.refresh_cycle().await, None);
        assert!(outbox.sent.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_skips_cycle() {
        let outbox = MockOutbox::default();
        let relay = relay(FixedProvider::failing("503 Service Unavailable"), outbox.clone());

        let err = relay.refresh().await.unwrap_err();
        assert!(matches!(err, PanelError::FetchFailure { .. }));
        assert_eq!(relay.refresh_cycle().await, None);
        assert!(outbox.sent.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_enqueue_failure_is_transfer_failure() {
        let outbox = MockOutbox {
            fail: true,
            ..MockOutbox::default()
        };
        let relay = relay(FixedProvider::report(TemperatureUnit::Celsius, &[20.0]), outbox);

        let err = relay.refresh().await.unwrap_err();
        assert!(matches!(err, PanelError::TransferFailure { .. }));
        assert!(err.is_warning());
    }

    #[tokio::test]
    async fn test_run_without_location_permission_never_fetches() {
        let provider = FixedProvider::report(TemperatureUnit::Celsius, &[20.0]);
        let calls = provider.calls.clone();
        let relay = relay(provider, MockOutbox::default());

        let result = relay.run(&Granted(HashSet::new()), std::future::ready(())).await;

        assert!(matches!(result, Err(PanelError::PermissionDenied { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_refreshes_on_start_and_each_wake() {
        let provider = FixedProvider::report(TemperatureUnit::Celsius, &[20.0]);
        let calls = provider.calls.clone();
        let outbox = MockOutbox::default();
        let relay = relay(provider, outbox.clone());
        let permissions = Granted(HashSet::from([Permission::Location]));

        let cycles = relay
            .run(&permissions, tokio::time::sleep(Duration::from_millis(70)))
            .await
            .unwrap();

        // start-up plus wakes at 20, 40 and 60 ms
        assert_eq!(cycles, 4);
        assert_eq!(calls.load(Ordering::SeqCst) as u64, cycles);
        assert_eq!(outbox.sent.lock().await.len() as u64, cycles);
    }
}
