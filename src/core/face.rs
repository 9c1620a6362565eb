//! Single-threaded event dispatcher for the watch face.
//!
//! Every platform callback (clock tick, battery change, heart-rate reading,
//! display on/off, settings, inbound file) becomes a [`FaceEvent`] that is
//! handled synchronously against the face's explicit [`FaceState`].

use crate::core::clock::{ClockTickHandler, FaceState};
use crate::core::profile::FaceProfile;
use crate::core::receiver::WeatherReceiver;
use crate::domain::model::{BatteryState, Element, Granularity, Permission, WeatherSnapshot};
use crate::domain::ports::{Device, DisplaySink};
use chrono::NaiveDateTime;
use serde::Deserialize;

pub const KEY_COLOR: &str = "color";
pub const KEY_LEADING_ZERO: &str = "leadingzero";
pub const KEY_AM_PM: &str = "ampm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsUpdate {
    Color(String),
    LeadingZero(bool),
    ShowAmPm(bool),
}

#[derive(Debug, Deserialize)]
struct StoredSettings {
    color: Option<String>,
    leadingzero: Option<bool>,
    ampm: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct PeerMessage {
    key: String,
    value: serde_json::Value,
}

impl SettingsUpdate {
    fn from_key(key: &str, value: &serde_json::Value) -> Option<Self> {
        match key {
            KEY_COLOR => value
                .as_str()
                .filter(|color| !color.trim().is_empty())
                .map(|color| SettingsUpdate::Color(color.to_string())),
            KEY_LEADING_ZERO => value.as_bool().map(SettingsUpdate::LeadingZero),
            KEY_AM_PM => value.as_bool().map(SettingsUpdate::ShowAmPm),
            _ => None,
        }
    }

    /// Settings-storage callback payload, e.g. `{"color": "tomato"}`.
    pub fn from_settings(data: &serde_json::Value) -> Vec<Self> {
        let Ok(stored) = StoredSettings::deserialize(data) else {
            tracing::debug!("Ignoring malformed settings payload: {}", data);
            return Vec::new();
        };

        let mut updates = Vec::new();
        if let Some(color) = stored.color.filter(|c| !c.trim().is_empty()) {
            updates.push(SettingsUpdate::Color(color));
        }
        if let Some(value) = stored.leadingzero {
            updates.push(SettingsUpdate::LeadingZero(value));
        }
        if let Some(value) = stored.ampm {
            updates.push(SettingsUpdate::ShowAmPm(value));
        }
        updates
    }

    /// Peer-socket message, e.g. `{"key": "leadingzero", "value": false}`.
    pub fn from_peer_message(data: &serde_json::Value) -> Option<Self> {
        let message = PeerMessage::deserialize(data).ok()?;
        Self::from_key(&message.key, &message.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FaceEvent {
    Tick(NaiveDateTime),
    BatteryChanged(BatteryState),
    HeartRateReading(Option<i32>),
    DisplayChanged { on: bool },
    Settings(SettingsUpdate),
    PayloadReceived(Vec<u8>),
}

pub struct WatchFace<D: Device, S: DisplaySink> {
    profile: FaceProfile,
    state: FaceState,
    device: D,
    sink: S,
    heart_rate_enabled: bool,
    weather: Option<WeatherSnapshot>,
}

impl<D: Device, S: DisplaySink> WatchFace<D, S> {
    pub fn new(profile: FaceProfile, device: D, sink: S) -> Self {
        let state = FaceState::new(&profile);
        Self {
            profile,
            state,
            device,
            sink,
            heart_rate_enabled: false,
            weather: None,
        }
    }

    /// Writes the start-up defaults and acquires the heart-rate sensor if allowed.
    pub fn start(&mut self) {
        let features = self.profile.features;
        ClockTickHandler::new(&self.profile).render_color(&self.state, &mut self.sink);

        if features.temperature {
            WeatherReceiver::new(&self.profile).show_placeholder(&mut self.sink);
        }

        if features.heart_rate {
            self.sink.set_text(
                Element::HeartRateLabel,
                &self.profile.literals.heart_rate_placeholder,
            );
            self.heart_rate_enabled =
                self.device.has_heart_rate_sensor() && self.device.granted(Permission::HeartRate);
            if self.heart_rate_enabled {
                self.device.start_heart_rate();
                self.state.heart_rate_active = true;
            } else {
                tracing::info!("Heart rate unavailable, keeping placeholder");
            }
        }
    }

    pub fn dispatch(&mut self, event: FaceEvent) {
        match event {
            FaceEvent::Tick(now) => {
                ClockTickHandler::new(&self.profile).on_tick(
                    &mut self.state,
                    now,
                    &self.device,
                    &mut self.sink,
                );
            }
            FaceEvent::BatteryChanged(battery) => {
                ClockTickHandler::new(&self.profile).render_battery(battery, &mut self.sink);
            }
            FaceEvent::HeartRateReading(rate) => self.on_heart_rate(rate),
            FaceEvent::DisplayChanged { on } => self.on_display_change(on),
            FaceEvent::Settings(update) => self.apply_settings(update),
            FaceEvent::PayloadReceived(bytes) => {
                let preferred = self.device.unit_preferences().temperature_unit;
                let shown = WeatherReceiver::new(&self.profile).on_payload(
                    &bytes,
                    &self.device,
                    preferred,
                    &mut self.sink,
                );
                if shown.is_some() || !self.device.granted(Permission::Location) {
                    self.weather = shown;
                }
            }
        }
    }

    fn on_heart_rate(&mut self, rate: Option<i32>) {
        if !self.state.heart_rate_active {
            return;
        }
        let label = match rate {
            Some(bpm) if bpm >= 0 => bpm.to_string(),
            _ => self.profile.literals.heart_rate_invalid.clone(),
        };
        self.sink.set_text(Element::HeartRateLabel, &label);
    }

    /// The sensor only runs while the screen is on.
    fn on_display_change(&mut self, on: bool) {
        self.state.display_on = on;
        if !self.heart_rate_enabled {
            return;
        }
        if on && !self.state.heart_rate_active {
            self.device.start_heart_rate();
            self.state.heart_rate_active = true;
        } else if !on && self.state.heart_rate_active {
            self.device.stop_heart_rate();
            self.state.heart_rate_active = false;
        }
    }

    fn apply_settings(&mut self, update: SettingsUpdate) {
        tracing::debug!("Applying settings update: {:?}", update);
        match update {
            SettingsUpdate::Color(color) => {
                self.state.color = color;
                ClockTickHandler::new(&self.profile).render_color(&self.state, &mut self.sink);
            }
            SettingsUpdate::LeadingZero(value) => {
                self.state.zero_lead_hours = value;
                self.state.granularity = Granularity::Seconds;
            }
            SettingsUpdate::ShowAmPm(value) => {
                self.state.show_am_pm = value;
                self.state.granularity = Granularity::Seconds;
            }
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.state.granularity
    }

    pub fn state(&self) -> &FaceState {
        &self.state
    }

    pub fn profile(&self) -> &FaceProfile {
        &self.profile
    }

    /// Last temperature shown, in display units.
    pub fn weather(&self) -> Option<WeatherSnapshot> {
        self.weather
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn device(&self) -> &D {
        &self.device
    }
}
