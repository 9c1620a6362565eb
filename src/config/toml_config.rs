use crate::core::payload::DEFAULT_DATA_FILE;
use crate::core::profile::{FaceProfile, FaceVariant};
use crate::core::relay::DEFAULT_WAKE_INTERVAL;
use crate::domain::model::{Location, TemperatureUnit};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PanelError, Result};
use crate::utils::validation::{
    validate_file_name, validate_non_empty_string, validate_path, validate_positive_number,
    validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_OUTBOX_DIR: &str = "./outbox";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
/// Upper bound for `wake_interval_minutes`, one day.
const MAX_WAKE_INTERVAL_MINUTES: u64 = 24 * 60;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub face: FaceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub endpoint: String,
    pub outbox_dir: String,
    pub data_file: Option<String>,
    pub wake_interval_minutes: Option<u64>,
    pub timeout_seconds: Option<u64>,
    pub temperature_unit: Option<TemperatureUnit>,
    pub locations: Vec<Location>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_WEATHER_ENDPOINT.to_string(),
            outbox_dir: DEFAULT_OUTBOX_DIR.to_string(),
            data_file: None,
            wake_interval_minutes: None,
            timeout_seconds: None,
            temperature_unit: None,
            locations: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaceConfig {
    pub variant: Option<FaceVariant>,
    pub color: Option<String>,
    pub activity_placeholder: Option<String>,
    pub heart_rate_placeholder: Option<String>,
    pub temperature_placeholder: Option<String>,
    pub percent_sign: Option<String>,
}

impl PanelConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PanelError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PanelError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WEATHER_LAT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PanelError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if self.relay.endpoint.trim().is_empty() {
            return Err(PanelError::MissingConfigError {
                field: "relay.endpoint".to_string(),
            });
        }
        validate_url("relay.endpoint", &self.relay.endpoint)?;
        validate_path("relay.outbox_dir", &self.relay.outbox_dir)?;
        validate_file_name("relay.data_file", self.data_file())?;

        if let Some(minutes) = self.relay.wake_interval_minutes {
            validate_range("relay.wake_interval_minutes", minutes, 1, MAX_WAKE_INTERVAL_MINUTES)?;
        }
        if let Some(seconds) = self.relay.timeout_seconds {
            validate_positive_number("relay.timeout_seconds", seconds, 1)?;
        }

        for (i, location) in self.relay.locations.iter().enumerate() {
            validate_non_empty_string(&format!("relay.locations[{}].name", i), &location.name)?;
            validate_range(
                &format!("relay.locations[{}].latitude", i),
                location.latitude,
                -90.0,
                90.0,
            )?;
            validate_range(
                &format!("relay.locations[{}].longitude", i),
                location.longitude,
                -180.0,
                180.0,
            )?;
        }

        if let Some(color) = &self.face.color {
            validate_non_empty_string("face.color", color)?;
        }

        Ok(())
    }

    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.relay.temperature_unit.unwrap_or_default()
    }

    /// 取得手錶外觀設定 (variant preset + literal overrides)
    pub fn face_profile(&self) -> FaceProfile {
        let mut profile = FaceProfile::for_variant(self.face.variant.unwrap_or_default());
        let literals = &mut profile.literals;
        if let Some(value) = &self.face.activity_placeholder {
            literals.activity_placeholder = value.clone();
        }
        if let Some(value) = &self.face.heart_rate_placeholder {
            literals.heart_rate_placeholder = value.clone();
        }
        if let Some(value) = &self.face.temperature_placeholder {
            literals.temperature_placeholder = value.clone();
        }
        if let Some(value) = &self.face.percent_sign {
            literals.percent_sign = value.clone();
        }
        profile
    }
}

impl ConfigProvider for PanelConfig {
    fn weather_endpoint(&self) -> &str {
        &self.relay.endpoint
    }

    fn outbox_path(&self) -> &str {
        &self.relay.outbox_dir
    }

    fn data_file(&self) -> &str {
        self.relay.data_file.as_deref().unwrap_or(DEFAULT_DATA_FILE)
    }

    fn wake_interval(&self) -> Duration {
        self.relay
            .wake_interval_minutes
            .map(|minutes| Duration::from_secs(minutes.saturating_mul(60)))
            .unwrap_or(DEFAULT_WAKE_INTERVAL)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.relay.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn locations(&self) -> &[Location] {
        &self.relay.locations
    }
}

impl Validate for PanelConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
