use crate::clock::{Clock, FixedClock, SystemClock};
use chrono::NaiveDate;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    #[serde(default)]
    pub telemetry: TelemetrySettings,
    #[serde(default)]
    pub clock: ClockSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    #[serde(default = "default_telemetry_settings_level")]
    pub level: String,
}

#[derive(serde::Deserialize, Clone, Debug, Default)]
pub struct ClockSettings {
    /// Day treated as "today" when bounding post-2007 years.
    /// Unset means the system clock.
    pub reference_date: Option<NaiveDate>,
}

fn default_telemetry_settings_level() -> String {
    "warn".to_string()
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            level: default_telemetry_settings_level(),
        }
    }
}

impl ClockSettings {
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.reference_date {
            Some(date) => Box::new(FixedClock(date)),
            None => Box::new(SystemClock),
        }
    }
}

/// The runtime environment for our application.
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}
impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
        }
    }
}
impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not supported environment.\
                Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let environment_filename = format!("{}.yaml", environment.as_str());

    // Configuration files are optional: the binary runs from any directory
    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename))
                .required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
