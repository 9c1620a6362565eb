use chrono::NaiveDateTime;
use clap::Parser;
use stats_panel::adapters::storage::read_inbox;
use stats_panel::config::cli::{Command, RelayArgs, RenderArgs};
use stats_panel::core::ConfigProvider;
use stats_panel::domain::model::{
    ActivitySnapshot, BatteryState, DistanceUnit, Permission, TemperatureUnit, UnitPreferences,
};
use stats_panel::domain::ports::PermissionGate;
use stats_panel::utils::error::ErrorSeverity;
use stats_panel::utils::{logger, validation::Validate};
use stats_panel::{
    CliConfig, FaceEvent, FileOutbox, HttpWeatherProvider, MemoryDisplay, PanelConfig, PanelError,
    SettingsUpdate, StaticDevice, WatchFace, WeatherRelay,
};
use std::path::Path;

/// Companion-side permission flags.
struct CompanionPermissions {
    location: bool,
}

impl PermissionGate for CompanionPermissions {
    fn granted(&self, permission: Permission) -> bool {
        permission == Permission::Location && self.location
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting stats-panel");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match cli
        .load_panel_config()
        .and_then(|config| config.validate().map(|_| config))
    {
        Ok(config) => match &cli.command {
            Command::Relay(args) => run_relay(config, args).await,
            Command::Render(args) => run_render(config, args).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ stats-panel failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run_relay(mut config: PanelConfig, args: &RelayArgs) -> stats_panel::Result<()> {
    // 應用命令列覆蓋設定
    if let Some(endpoint) = &args.endpoint {
        config.relay.endpoint = endpoint.clone();
    }
    if let Some(outbox) = &args.outbox {
        config.relay.outbox_dir = outbox.clone();
    }
    if let Some(minutes) = args.wake_minutes {
        config.relay.wake_interval_minutes = Some(minutes);
    }
    config.validate()?;

    let provider = HttpWeatherProvider::from_config(&config, config.temperature_unit())?;
    let outbox = FileOutbox::new(config.outbox_path());
    let relay = WeatherRelay::from_config(provider, outbox, &config);
    let permissions = CompanionPermissions {
        location: !args.deny_location,
    };

    if args.once {
        if !permissions.granted(Permission::Location) {
            tracing::error!("This app requires the {} permission.", Permission::Location);
            return Err(PanelError::PermissionDenied {
                permission: Permission::Location,
            });
        }
        relay.refresh().await?;
        println!("✅ Weather snapshot queued in {}", config.outbox_path());
        return Ok(());
    }

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Cannot listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };
    relay.run(&permissions, shutdown).await?;
    Ok(())
}

fn parse_tick_time(value: &str) -> stats_panel::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|e| PanelError::InvalidConfigValueError {
            field: "--at".to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

async fn run_render(mut config: PanelConfig, args: &RenderArgs) -> stats_panel::Result<()> {
    if args.variant.is_some() {
        config.face.variant = args.variant;
    }
    let now = match &args.at {
        Some(value) => parse_tick_time(value)?,
        None => chrono::Local::now().naive_local(),
    };

    let device = StaticDevice {
        units: UnitPreferences {
            use_12_hour: args.twelve_hour,
            distance_unit: if args.imperial {
                DistanceUnit::Imperial
            } else {
                DistanceUnit::Metric
            },
            temperature_unit: if args.fahrenheit {
                TemperatureUnit::Fahrenheit
            } else {
                TemperatureUnit::Celsius
            },
        },
        activity: ActivitySnapshot {
            steps: args.steps,
            distance_meters: args.distance,
            calories: args.calories,
            active_zone_minutes: args.active_minutes,
            elevation_gain: args.floors,
        },
        battery: BatteryState {
            charge_level: args.battery,
            is_charging: args.charging,
        },
        permissions: args.grant.iter().copied().collect(),
        ..StaticDevice::default()
    };

    let mut face = WatchFace::new(config.face_profile(), device, MemoryDisplay::new());
    face.start();

    if let Some(color) = args.color.clone().or_else(|| config.face.color.clone()) {
        face.dispatch(FaceEvent::Settings(SettingsUpdate::Color(color)));
    }
    if args.no_leading_zero {
        face.dispatch(FaceEvent::Settings(SettingsUpdate::LeadingZero(false)));
    }
    if args.hide_am_pm {
        face.dispatch(FaceEvent::Settings(SettingsUpdate::ShowAmPm(false)));
    }
    if let Some(rate) = args.heart_rate {
        face.dispatch(FaceEvent::HeartRateReading(Some(rate)));
    }

    if let Some(dir) = &args.inbox {
        match read_inbox(Path::new(dir), config.data_file()).await? {
            Some(bytes) => face.dispatch(FaceEvent::PayloadReceived(bytes)),
            None => tracing::info!("No weather payload waiting in {}", dir),
        }
    }

    face.dispatch(FaceEvent::Tick(now));

    println!("🕒 {} ({:?} face)", now, face.profile().variant);
    for line in face.sink().lines() {
        println!("{}", line);
    }
    Ok(())
}
