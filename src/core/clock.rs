use crate::core::battery::battery_tier;
use crate::core::format::{
    day_name, format_battery_label, format_count, format_hour, format_minute, format_month_day,
};
use crate::core::profile::{FaceProfile, DEFAULT_COLOR, INDICATOR_OFF};
use crate::core::units::convert_distance;
use crate::domain::model::{
    BatteryState, DisplayPreferences, Element, Granularity, Permission, TimeOfDay,
    UnitPreferences,
};
use crate::domain::ports::{Device, DisplaySink};
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Mutable face state, owned by the face and passed into every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceState {
    pub color: String,
    pub raw_hour: u32,
    pub zero_lead_hours: bool,
    pub show_am_pm: bool,
    pub granularity: Granularity,
    pub display_on: bool,
    pub heart_rate_active: bool,
}

impl FaceState {
    pub fn new(profile: &FaceProfile) -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            raw_hour: 0,
            zero_lead_hours: profile.default_zero_pad(),
            show_am_pm: profile.features.am_pm,
            granularity: Granularity::Minutes,
            display_on: true,
            heart_rate_active: false,
        }
    }

    pub fn display_preferences(&self, units: UnitPreferences) -> DisplayPreferences {
        DisplayPreferences {
            use_12_hour: units.use_12_hour,
            zero_pad_hour: self.zero_lead_hours,
            show_am_pm: self.show_am_pm,
            distance_unit: units.distance_unit,
            temperature_unit: units.temperature_unit,
        }
    }
}

pub struct ClockTickHandler<'a> {
    profile: &'a FaceProfile,
}

impl<'a> ClockTickHandler<'a> {
    pub fn new(profile: &'a FaceProfile) -> Self {
        Self { profile }
    }

    /// Recomputes every displayed field for `now`. Same inputs, same writes.
    pub fn on_tick<D, S>(
        &self,
        state: &mut FaceState,
        now: NaiveDateTime,
        device: &D,
        sink: &mut S,
    ) -> TimeOfDay
    where
        D: Device,
        S: DisplaySink,
    {
        let features = &self.profile.features;
        let time = TimeOfDay {
            hour: now.hour(),
            minute: now.minute(),
        };
        state.raw_hour = time.hour;

        let preferences = state.display_preferences(device.unit_preferences());
        let hours = format_hour(time.hour, preferences.use_12_hour, preferences.zero_pad_hour);
        let minutes = format_minute(time.minute);

        sink.set_text(Element::HourLabel, &hours);
        sink.set_text(Element::MinuteLabel, &minutes);
        if features.shadow_text {
            sink.set_text(Element::HourShadow, &hours);
            sink.set_text(Element::MinuteShadow, &minutes);
        }

        self.render_am_pm(state, sink);
        if features.date {
            self.render_date(now, sink);
        }
        if features.activity {
            self.render_activity(&preferences, device, sink);
        }
        if features.battery {
            self.render_battery(device.battery(), sink);
        }

        // a settings change asks for one fast tick, then back to minutes
        state.granularity = Granularity::Minutes;
        time
    }

    /// Both indicators go dark first; then at most one is lit with the current color.
    pub fn render_am_pm<S: DisplaySink>(&self, state: &FaceState, sink: &mut S) {
        if !self.profile.features.am_pm {
            return;
        }

        sink.set_fill(Element::AmCircle, INDICATOR_OFF);
        sink.set_fill(Element::PmCircle, INDICATOR_OFF);

        if state.show_am_pm {
            if state.raw_hour < 12 {
                sink.set_fill(Element::AmCircle, &state.color);
            } else {
                sink.set_fill(Element::PmCircle, &state.color);
            }
        }
    }

    pub fn render_color<S: DisplaySink>(&self, state: &FaceState, sink: &mut S) {
        if self.profile.features.shadow_text {
            sink.set_fill(Element::HourShadow, &state.color);
            sink.set_fill(Element::MinuteShadow, &state.color);
        }
        sink.set_fill(Element::SeparatorBar, &state.color);
        sink.set_fill(Element::StatusPanel, &state.color);
        self.render_am_pm(state, sink);
    }

    fn render_date<S: DisplaySink>(&self, now: NaiveDateTime, sink: &mut S) {
        sink.set_text(
            Element::DayOfWeekLabel,
            day_name(now.weekday().num_days_from_sunday()),
        );
        sink.set_text(Element::MonthLabel, &format_month_day(now.month0(), now.day()));
        sink.set_text(Element::YearLabel, &now.year().to_string());
    }

    fn render_activity<D, S>(&self, preferences: &DisplayPreferences, device: &D, sink: &mut S)
    where
        D: Device,
        S: DisplaySink,
    {
        if !device.granted(Permission::Activity) {
            let empty = self.profile.literals.activity_placeholder.as_str();
            for element in [
                Element::StepCountLabel,
                Element::DistanceLabel,
                Element::CalorieLabel,
                Element::ActiveZoneLabel,
                Element::FloorsLabel,
            ] {
                sink.set_text(element, empty);
            }
            return;
        }

        let activity = device.activity();
        let distance = convert_distance(activity.distance_meters, preferences.distance_unit);
        sink.set_text(Element::StepCountLabel, &format_count(i64::from(activity.steps)));
        sink.set_text(Element::DistanceLabel, &distance.label());
        sink.set_text(Element::CalorieLabel, &format_count(i64::from(activity.calories)));
        sink.set_text(
            Element::ActiveZoneLabel,
            &activity.active_zone_minutes.to_string(),
        );
        sink.set_text(Element::FloorsLabel, &activity.elevation_gain.to_string());
    }

    pub fn render_battery<S: DisplaySink>(&self, battery: BatteryState, sink: &mut S) {
        if !self.profile.features.battery {
            return;
        }
        sink.set_text(
            Element::BatteryLabel,
            &format_battery_label(battery.charge_level, &self.profile.literals.percent_sign),
        );
        sink.set_image(Element::BatteryIcon, battery_tier(battery).icon());
    }
}
