//! Watch-face variants as data: which elements exist and which literals they show.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const ACTIVITY_PLACEHOLDER: &str = "----";
pub const ACTIVITY_PLACEHOLDER_WIDE: &str = "-----";
pub const HEART_RATE_PLACEHOLDER: &str = "---";
pub const HEART_RATE_INVALID: &str = "?";
pub const TEMPERATURE_PLACEHOLDER: &str = "--°";
pub const PERCENT_SIGN: &str = "%";
pub const DEFAULT_COLOR: &str = "green";
/// Fill of an AM/PM indicator that is not lit.
pub const INDICATOR_OFF: &str = "black";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceVariant {
    /// Hour and minute only.
    Minimal,
    #[default]
    Versa,
    /// Versa layout plus the relayed temperature.
    Sense,
    /// Status panel without heart rate or AM/PM indicators.
    Lite,
}

impl FromStr for FaceVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(FaceVariant::Minimal),
            "versa" => Ok(FaceVariant::Versa),
            "sense" => Ok(FaceVariant::Sense),
            "lite" => Ok(FaceVariant::Lite),
            other => Err(format!(
                "unknown face variant '{}', expected one of: minimal, versa, sense, lite",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceFeatures {
    pub shadow_text: bool,
    pub am_pm: bool,
    pub date: bool,
    pub activity: bool,
    pub battery: bool,
    pub heart_rate: bool,
    pub temperature: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceLiterals {
    pub activity_placeholder: String,
    pub heart_rate_placeholder: String,
    pub heart_rate_invalid: String,
    pub temperature_placeholder: String,
    pub percent_sign: String,
}

impl Default for FaceLiterals {
    fn default() -> Self {
        Self {
            activity_placeholder: ACTIVITY_PLACEHOLDER.to_string(),
            heart_rate_placeholder: HEART_RATE_PLACEHOLDER.to_string(),
            heart_rate_invalid: HEART_RATE_INVALID.to_string(),
            temperature_placeholder: TEMPERATURE_PLACEHOLDER.to_string(),
            percent_sign: PERCENT_SIGN.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceProfile {
    pub variant: FaceVariant,
    pub features: FaceFeatures,
    pub literals: FaceLiterals,
}

impl FaceProfile {
    pub fn for_variant(variant: FaceVariant) -> Self {
        let features = match variant {
            FaceVariant::Minimal => FaceFeatures {
                shadow_text: false,
                am_pm: false,
                date: false,
                activity: false,
                battery: false,
                heart_rate: false,
                temperature: false,
            },
            FaceVariant::Versa => FaceFeatures {
                shadow_text: true,
                am_pm: true,
                date: true,
                activity: true,
                battery: true,
                heart_rate: true,
                temperature: false,
            },
            FaceVariant::Sense => FaceFeatures {
                shadow_text: true,
                am_pm: true,
                date: true,
                activity: true,
                battery: true,
                heart_rate: true,
                temperature: true,
            },
            FaceVariant::Lite => FaceFeatures {
                shadow_text: true,
                am_pm: false,
                date: true,
                activity: true,
                battery: true,
                heart_rate: false,
                temperature: false,
            },
        };

        let mut literals = FaceLiterals::default();
        if variant == FaceVariant::Lite {
            literals.activity_placeholder = ACTIVITY_PLACEHOLDER_WIDE.to_string();
        }

        Self {
            variant,
            features,
            literals,
        }
    }

    /// Whether the face starts with leading-zero hours. The minimal face never pads.
    pub fn default_zero_pad(&self) -> bool {
        self.variant != FaceVariant::Minimal
    }
}

impl Default for FaceProfile {
    fn default() -> Self {
        Self::for_variant(FaceVariant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_placeholders_are_not_unified() {
        assert_eq!(
            FaceProfile::for_variant(FaceVariant::Versa).literals.activity_placeholder,
            "----"
        );
        assert_eq!(
            FaceProfile::for_variant(FaceVariant::Lite).literals.activity_placeholder,
            "-----"
        );
    }

    #[test]
    fn test_only_sense_shows_temperature() {
        for variant in [FaceVariant::Minimal, FaceVariant::Versa, FaceVariant::Lite] {
            assert!(!FaceProfile::for_variant(variant).features.temperature);
        }
        assert!(FaceProfile::for_variant(FaceVariant::Sense).features.temperature);
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!("Sense".parse::<FaceVariant>().unwrap(), FaceVariant::Sense);
        assert!("analog".parse::<FaceVariant>().is_err());
    }
}
