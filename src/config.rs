use serde::{Deserialize, Serialize};

use crate::{ConfigError, DateFormatter, SUPPORTED_LOCALE};

/// Serializable settings for building a [`DateFormatter`].
///
/// Missing fields take their defaults, so an empty document yields the
/// en-US formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    pub locale: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            locale: SUPPORTED_LOCALE.to_owned(),
        }
    }
}

impl FormatterConfig {
    /// # Errors
    /// Returns `ConfigError::UnsupportedLocale` if the configured locale has no name tables.
    pub fn build(&self) -> Result<DateFormatter, ConfigError> {
        log::debug!("building formatter for locale {:?}", self.locale);
        DateFormatter::new(&self.locale)
    }
}

impl TryFrom<&FormatterConfig> for DateFormatter {
    type Error = ConfigError;

    fn try_from(config: &FormatterConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}
