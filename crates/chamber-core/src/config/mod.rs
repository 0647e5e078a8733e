use anyhow::Result;
use chrono_tz::Tz;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// IANA name of the site's time zone. Timestamps carrying an offset are
    /// shifted into this zone before any date arithmetic happens.
    pub timezone: String,
    /// Month shown when none is given on the command line, as `YYYY-MM`.
    pub default_month: Option<String>,
    /// Preferred language for bilingual display fields (`en` or `fr`).
    pub locale: String,
    pub upcoming_horizon_days: u32,
    pub upcoming_limit: usize,
}

impl CalendarConfig {
    /// ## Summary
    /// Resolves the configured time zone name.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the name is not a known IANA zone.
    pub fn tz(&self) -> CoreResult<Tz> {
        self.timezone.parse::<Tz>().map_err(|err| {
            CoreError::InvalidConfiguration(format!(
                "unknown calendar timezone {:?}: {err}",
                self.timezone
            ))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `config.toml` and environment variables into a `Settings`.
    /// Environment variables (`CHAMBER_CALENDAR__TIMEZONE`, ...) take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("calendar.timezone", "UTC")?
            .set_default("calendar.locale", "en")?
            .set_default("calendar.upcoming_horizon_days", 90)?
            .set_default("calendar.upcoming_limit", 10)?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("CHAMBER")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(timezone = %settings.calendar.timezone, "Calendar settings loaded");
    Ok(settings)
}
