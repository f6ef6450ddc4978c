use crate::aggregate::ParsePolicy;
use crate::errors::ConfigError;
use crate::models::ColumnNames;
use crate::source::TableSource;
use std::{env, time::Duration};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SOURCE: &str = "data/sales.csv";
pub const DEFAULT_COLOR_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub source: TableSource,
    pub policy: ParsePolicy,
    pub columns: ColumnNames,
    pub color_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, `None` meaning unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let source = TableSource::parse_location(
            lookup("SALES_SOURCE").as_deref().unwrap_or(DEFAULT_SOURCE),
        );

        let policy = match lookup("SALES_PARSE_POLICY") {
            Some(value) => value.parse()?,
            None => ParsePolicy::default(),
        };

        let defaults = ColumnNames::default();
        let columns = ColumnNames {
            year: lookup("SALES_YEAR_COLUMN").unwrap_or(defaults.year),
            month: lookup("SALES_MONTH_COLUMN").unwrap_or(defaults.month),
            sales: lookup("SALES_VALUE_COLUMN").unwrap_or(defaults.sales),
        };

        let color_interval = match lookup("COLOR_INTERVAL_MS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => return Err(ConfigError::InvalidInterval(value)),
            },
            None => DEFAULT_COLOR_INTERVAL,
        };

        Ok(Self {
            port,
            source,
            policy,
            columns,
            color_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.source, TableSource::File(PathBuf::from(DEFAULT_SOURCE)));
        assert_eq!(config.policy, ParsePolicy::Skip);
        assert_eq!(config.columns, ColumnNames::default());
        assert_eq!(config.color_interval, DEFAULT_COLOR_INTERVAL);
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("SALES_SOURCE", "http://localhost:1/data.csv"),
            ("SALES_PARSE_POLICY", "fail-fast"),
            ("SALES_VALUE_COLUMN", "Revenue"),
            ("COLOR_INTERVAL_MS", "250"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(
            config.source,
            TableSource::Http("http://localhost:1/data.csv".to_string())
        );
        assert_eq!(config.policy, ParsePolicy::FailFast);
        assert_eq!(config.columns.sales, "Revenue");
        assert_eq!(config.columns.year, "Year");
        assert_eq!(config.color_interval, Duration::from_millis(250));
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        let config = config_from(&[("PORT", "http")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            config_from(&[("SALES_PARSE_POLICY", "lenient")]).unwrap_err(),
            ConfigError::UnknownPolicy("lenient".to_string())
        );
        assert_eq!(
            config_from(&[("COLOR_INTERVAL_MS", "0")]).unwrap_err(),
            ConfigError::InvalidInterval("0".to_string())
        );
    }
}
