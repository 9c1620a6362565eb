use crate::domain::model::{DistanceUnit, TemperatureUnit};

pub const MILES_PER_METER: f64 = 0.000621371192;

/// Distance above which the decimal is dropped to keep the label narrow.
const WHOLE_NUMBER_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Distance {
    pub value: f64,
    pub whole: bool,
    pub suffix: &'static str,
}

impl Distance {
    pub fn label(&self) -> String {
        if self.whole {
            format!("{}{}", self.value as i64, self.suffix)
        } else {
            // ties round up, so 0.25 shows as 0.3
            let tenths = (self.value * 10.0).round() / 10.0;
            format!("{:.1}{}", tenths, self.suffix)
        }
    }
}

pub fn convert_distance(meters: f64, unit: DistanceUnit) -> Distance {
    let meters = if meters.is_finite() { meters.max(0.0) } else { 0.0 };
    let (amount, suffix) = match unit {
        DistanceUnit::Metric => (meters / 1000.0, " k"),
        DistanceUnit::Imperial => (meters * MILES_PER_METER, " m"),
    };

    let whole = amount.floor() >= WHOLE_NUMBER_THRESHOLD;
    let value = if whole { amount.floor() } else { amount };

    Distance {
        value,
        whole,
        suffix,
    }
}

/// Converts to `target`, rounding half away from zero. Identity when units match.
pub fn convert_temperature(value: i32, from: TemperatureUnit, target: TemperatureUnit) -> i32 {
    let value = f64::from(value);
    let converted = match (from, target) {
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => value * 1.8 + 32.0,
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => (value - 32.0) / 1.8,
        _ => value,
    };
    converted.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_distance_threshold() {
        assert_eq!(convert_distance(99_000.0, DistanceUnit::Metric).label(), "99.0 k");
        assert_eq!(convert_distance(100_000.0, DistanceUnit::Metric).label(), "100 k");
        assert_eq!(convert_distance(123_456.0, DistanceUnit::Metric).label(), "123 k");
        assert_eq!(convert_distance(0.0, DistanceUnit::Metric).label(), "0.0 k");
        assert_eq!(convert_distance(4_260.0, DistanceUnit::Metric).label(), "4.3 k");
    }

    #[test]
    fn test_tenths_round_half_up() {
        assert_eq!(convert_distance(250.0, DistanceUnit::Metric).label(), "0.3 k");
        assert_eq!(convert_distance(1_250.0, DistanceUnit::Metric).label(), "1.3 k");
        assert_eq!(convert_distance(4_250.0, DistanceUnit::Metric).label(), "4.3 k");
        assert_eq!(convert_distance(1_240.0, DistanceUnit::Metric).label(), "1.2 k");
    }

    #[test]
    fn test_imperial_distance() {
        assert_eq!(convert_distance(1_609.344, DistanceUnit::Imperial).label(), "1.0 m");
        let long = convert_distance(161_000.0, DistanceUnit::Imperial);
        assert!(long.whole);
        assert_eq!(long.label(), "100 m");
    }

    #[test]
    fn test_negative_distance_is_zero() {
        assert_eq!(convert_distance(-10.0, DistanceUnit::Metric).label(), "0.0 k");
        assert_eq!(convert_distance(f64::NAN, DistanceUnit::Imperial).label(), "0.0 m");
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        use TemperatureUnit::*;
        assert_eq!(convert_temperature(0, Celsius, Fahrenheit), 32);
        assert_eq!(convert_temperature(100, Celsius, Fahrenheit), 212);
        assert_eq!(convert_temperature(-40, Celsius, Fahrenheit), -40);
        assert_eq!(convert_temperature(21, Celsius, Fahrenheit), 70);
    }

    #[test]
    fn test_fahrenheit_to_celsius_and_identity() {
        use TemperatureUnit::*;
        assert_eq!(convert_temperature(212, Fahrenheit, Celsius), 100);
        assert_eq!(convert_temperature(70, Fahrenheit, Celsius), 21);
        assert_eq!(convert_temperature(18, Celsius, Celsius), 18);
        assert_eq!(convert_temperature(64, Fahrenheit, Fahrenheit), 64);
    }
}
