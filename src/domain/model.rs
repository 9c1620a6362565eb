use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Metric,
    #[serde(alias = "us")]
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    #[serde(alias = "celsius", alias = "C")]
    Celsius,
    #[serde(alias = "fahrenheit", alias = "F")]
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(self) -> char {
        match self {
            TemperatureUnit::Celsius => 'C',
            TemperatureUnit::Fahrenheit => 'F',
        }
    }

    /// Accepts the unit strings weather services report ("celsius", "°F", "F", ...).
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim().trim_start_matches('°');
        match trimmed.to_ascii_lowercase().as_str() {
            "c" | "celsius" => Some(TemperatureUnit::Celsius),
            "f" | "fahrenheit" => Some(TemperatureUnit::Fahrenheit),
            _ => None,
        }
    }
}

/// Read-only view of the user's display settings for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPreferences {
    pub use_12_hour: bool,
    pub zero_pad_hour: bool,
    pub show_am_pm: bool,
    pub distance_unit: DistanceUnit,
    pub temperature_unit: TemperatureUnit,
}

/// Device-level settings owned by the platform, not by the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitPreferences {
    pub use_12_hour: bool,
    pub distance_unit: DistanceUnit,
    pub temperature_unit: TemperatureUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActivitySnapshot {
    pub steps: u32,
    pub distance_meters: f64,
    pub calories: u32,
    pub active_zone_minutes: u32,
    pub elevation_gain: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryState {
    pub charge_level: u8,
    pub is_charging: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryTier {
    Charging,
    Full,
    Half,
    Low,
}

impl BatteryTier {
    pub fn icon(self) -> &'static str {
        match self {
            BatteryTier::Charging => "battery-charging.png",
            BatteryTier::Full => "battery-full.png",
            BatteryTier::Half => "battery-half.png",
            BatteryTier::Low => "battery-low.png",
        }
    }
}

/// The one-record payload handed from the companion to the watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: i32,
    pub unit: TemperatureUnit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationWeather {
    pub name: String,
    pub current_temperature: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub temperature_unit: TemperatureUnit,
    pub locations: Vec<LocationWeather>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    Activity,
    HeartRate,
    Location,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Permission::Activity => "access_activity",
            Permission::HeartRate => "access_heart_rate",
            Permission::Location => "access_location",
        };
        f.write_str(name)
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches("access_") {
            "activity" => Ok(Permission::Activity),
            "heart_rate" => Ok(Permission::HeartRate),
            "location" => Ok(Permission::Location),
            other => Err(format!(
                "unknown permission '{}', expected activity, heart_rate or location",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Minutes,
    Seconds,
}

/// Display elements of the stats panel face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    HourLabel,
    MinuteLabel,
    HourShadow,
    MinuteShadow,
    AmCircle,
    PmCircle,
    DayOfWeekLabel,
    MonthLabel,
    YearLabel,
    StepCountLabel,
    DistanceLabel,
    CalorieLabel,
    ActiveZoneLabel,
    FloorsLabel,
    BatteryLabel,
    BatteryIcon,
    HeartRateLabel,
    TemperatureLabel,
    StatusPanel,
    SeparatorBar,
}

impl Element {
    pub fn id(self) -> &'static str {
        match self {
            Element::HourLabel => "hourLabel",
            Element::MinuteLabel => "minuteLabel",
            Element::HourShadow => "hourShadow",
            Element::MinuteShadow => "minuteShadow",
            Element::AmCircle => "amCircle",
            Element::PmCircle => "pmCircle",
            Element::DayOfWeekLabel => "dayOfWeekLabel",
            Element::MonthLabel => "monthLabel",
            Element::YearLabel => "yearLabel",
            Element::StepCountLabel => "stepCountLabel",
            Element::DistanceLabel => "distanceLabel",
            Element::CalorieLabel => "calorieLabel",
            Element::ActiveZoneLabel => "activeZoneLabel",
            Element::FloorsLabel => "floorsLabel",
            Element::BatteryLabel => "batteryLabel",
            Element::BatteryIcon => "batteryIcon",
            Element::HeartRateLabel => "heartRateLabel",
            Element::TemperatureLabel => "temperatureLabel",
            Element::StatusPanel => "statuspanel",
            Element::SeparatorBar => "seperatorbar",
        }
    }
}

/// A place the companion asks the weather service about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}
