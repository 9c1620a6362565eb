use crate::core::format::format_temperature;
use crate::core::payload::decode_snapshot;
use crate::core::profile::FaceProfile;
use crate::core::units::convert_temperature;
use crate::domain::model::{Element, Permission, TemperatureUnit, WeatherSnapshot};
use crate::domain::ports::{DisplaySink, PermissionGate};

/// Watch side of the weather hand-off. Keeps no queue: the newest payload
/// simply overwrites the temperature label.
pub struct WeatherReceiver<'a> {
    profile: &'a FaceProfile,
}

impl<'a> WeatherReceiver<'a> {
    pub fn new(profile: &'a FaceProfile) -> Self {
        Self { profile }
    }

    /// Returns the snapshot as displayed, already in `preferred` units.
    pub fn on_payload<P, S>(
        &self,
        bytes: &[u8],
        permissions: &P,
        preferred: TemperatureUnit,
        sink: &mut S,
    ) -> Option<WeatherSnapshot>
    where
        P: PermissionGate,
        S: DisplaySink,
    {
        if !self.profile.features.temperature {
            tracing::debug!("Face has no temperature field, ignoring weather payload");
            return None;
        }

        if !permissions.granted(Permission::Location) {
            tracing::debug!("{} not granted, discarding weather payload", Permission::Location);
            self.show_placeholder(sink);
            return None;
        }

        let snapshot = match decode_snapshot(bytes) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Ignoring weather payload ({} bytes): {}", bytes.len(), e);
                return None;
            }
        };

        // value and unit change together
        let shown = WeatherSnapshot {
            temperature: convert_temperature(snapshot.temperature, snapshot.unit, preferred),
            unit: preferred,
        };
        sink.set_text(
            Element::TemperatureLabel,
            &format_temperature(shown.temperature, shown.unit.symbol()),
        );
        tracing::debug!(
            "Temperature updated: {}{:?} -> {}{:?}",
            snapshot.temperature,
            snapshot.unit,
            shown.temperature,
            shown.unit
        );
        Some(shown)
    }

    pub fn show_placeholder<S: DisplaySink>(&self, sink: &mut S) {
        if self.profile.features.temperature {
            sink.set_text(
                Element::TemperatureLabel,
                &self.profile.literals.temperature_placeholder,
            );
        }
    }
}
