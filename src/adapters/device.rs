use crate::domain::model::{ActivitySnapshot, BatteryState, Permission, UnitPreferences};
use crate::domain::ports::{Device, PermissionGate};
use std::collections::HashSet;

/// Device with fixed readings, for the simulator and tests.
#[derive(Debug, Clone)]
pub struct StaticDevice {
    pub units: UnitPreferences,
    pub activity: ActivitySnapshot,
    pub battery: BatteryState,
    pub permissions: HashSet<Permission>,
    pub heart_rate_sensor: bool,
    pub heart_rate_running: bool,
    pub heart_rate_starts: u32,
}

impl Default for StaticDevice {
    fn default() -> Self {
        Self {
            units: UnitPreferences::default(),
            activity: ActivitySnapshot::default(),
            battery: BatteryState {
                charge_level: 100,
                is_charging: false,
            },
            permissions: HashSet::new(),
            heart_rate_sensor: true,
            heart_rate_running: false,
            heart_rate_starts: 0,
        }
    }
}

impl StaticDevice {
    pub fn grant(mut self, permission: Permission) -> Self {
        self.permissions.insert(permission);
        self
    }
}

impl PermissionGate for StaticDevice {
    fn granted(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

impl Device for StaticDevice {
    fn unit_preferences(&self) -> UnitPreferences {
        self.units
    }

    fn activity(&self) -> ActivitySnapshot {
        self.activity
    }

    fn battery(&self) -> BatteryState {
        self.battery
    }

    fn has_heart_rate_sensor(&self) -> bool {
        self.heart_rate_sensor
    }

    fn start_heart_rate(&mut self) {
        self.heart_rate_running = true;
        self.heart_rate_starts += 1;
    }

    fn stop_heart_rate(&mut self) {
        self.heart_rate_running = false;
    }
}
