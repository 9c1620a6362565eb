use crate::domain::model::{BatteryState, BatteryTier};

/// Lower bound (exclusive) of the full tier.
pub const MIN_FULL: u8 = 70;
/// Lower bound (exclusive) of the half tier.
pub const MIN_HALF: u8 = 30;

/// full = (70, 100], half = (30, 70], low = [0, 30]. Charging wins over level.
pub fn battery_tier(state: BatteryState) -> BatteryTier {
    if state.is_charging {
        return BatteryTier::Charging;
    }

    match state.charge_level.min(100) {
        level if level > MIN_FULL => BatteryTier::Full,
        level if level > MIN_HALF => BatteryTier::Half,
        _ => BatteryTier::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discharging(level: u8) -> BatteryState {
        BatteryState {
            charge_level: level,
            is_charging: false,
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(battery_tier(discharging(100)), BatteryTier::Full);
        assert_eq!(battery_tier(discharging(71)), BatteryTier::Full);
        assert_eq!(battery_tier(discharging(70)), BatteryTier::Half);
        assert_eq!(battery_tier(discharging(69)), BatteryTier::Half);
        assert_eq!(battery_tier(discharging(31)), BatteryTier::Half);
        assert_eq!(battery_tier(discharging(30)), BatteryTier::Low);
        assert_eq!(battery_tier(discharging(0)), BatteryTier::Low);
    }

    #[test]
    fn test_tiers_are_monotonic() {
        let rank = |tier| match tier {
            BatteryTier::Low => 0,
            BatteryTier::Half => 1,
            BatteryTier::Full => 2,
            BatteryTier::Charging => unreachable!(),
        };
        let mut previous = 0;
        for level in 0..=100u8 {
            let current = rank(battery_tier(discharging(level)));
            assert!(current >= previous, "tier dropped at {}%", level);
            previous = current;
        }
    }

    #[test]
    fn test_charging_overrides_level() {
        let state = BatteryState {
            charge_level: 5,
            is_charging: true,
        };
        assert_eq!(battery_tier(state), BatteryTier::Charging);
        assert_eq!(battery_tier(state).icon(), "battery-charging.png");
    }
}
