//! Parameters for a report run.

use crate::error::AnalyticsError;
use crate::model::OrderStatus;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Environment variable naming a JSON file to load the config from.
pub const CONFIG_ENV_VAR: &str = "ORDER_ANALYTICS_CONFIG";

/// Settings for the demo report. Missing fields fall back to [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// How many orders the "most expensive" ranking shows.
    pub top_n: usize,
    /// Discount applied to the first order in the discount preview.
    pub discount_rate: Decimal,
    /// Discount applied inside the composed ranking pipeline.
    pub chain_discount_rate: Decimal,
    /// Orders at or below this total are dropped by the composed pipeline.
    pub chain_min_total: Decimal,
    /// Category used for the category search section.
    pub highlight_category: String,
    /// Status whose orders count as realised revenue.
    pub revenue_status: OrderStatus,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_n: 2,
            discount_rate: dec!(0.1),
            chain_discount_rate: dec!(0.05),
            chain_min_total: dec!(50),
            highlight_category: "electronics".to_string(),
            revenue_status: OrderStatus::Completed,
        }
    }
}

impl AnalyticsConfig {
    /// Parses a JSON document and validates the result.
    pub fn from_json(json: &str) -> Result<Self, AnalyticsError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AnalyticsError::InvalidConfig(format!("malformed config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates the JSON config file at `path`.
    pub fn from_path(path: &Path) -> Result<Self, AnalyticsError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            AnalyticsError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "Config file read");
        Self::from_json(&json)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], or the defaults when it is unset.
    pub fn from_env() -> Result<Self, AnalyticsError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Checks that both discount rates lie in `[0, 1)` and the category is not blank.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        for (field, rate) in [
            ("discount_rate", self.discount_rate),
            ("chain_discount_rate", self.chain_discount_rate),
        ] {
            if rate < Decimal::ZERO || rate >= Decimal::ONE {
                warn!(field, %rate, "Config rejected");
                return Err(AnalyticsError::InvalidConfig(format!(
                    "{field} must be in [0, 1), got {rate}"
                )));
            }
        }
        if self.highlight_category.trim().is_empty() {
            return Err(AnalyticsError::InvalidConfig(
                "highlight_category must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(AnalyticsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AnalyticsConfig =
            serde_json::from_str(r#"{ "top_n": 3, "revenue_status": "pending" }"#).unwrap();

        assert_eq!(config.top_n, 3);
        assert_eq!(config.revenue_status, OrderStatus::Pending);
        assert_eq!(config.discount_rate, dec!(0.1));
        assert_eq!(config.highlight_category, "electronics");
    }

    #[test]
    fn test_out_of_range_rate_is_rejected() {
        let config = AnalyticsConfig {
            chain_discount_rate: dec!(1),
            ..AnalyticsConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnalyticsError::InvalidConfig(msg)) if msg.starts_with("chain_discount_rate")
        ));
    }

    #[test]
    fn test_from_json_validates() {
        let config = AnalyticsConfig::from_json(r#"{ "top_n": 5 }"#).unwrap();
        assert_eq!(config.top_n, 5);

        assert!(matches!(
            AnalyticsConfig::from_json(r#"{ "discount_rate": "1.5" }"#),
            Err(AnalyticsError::InvalidConfig(msg)) if msg.starts_with("discount_rate")
        ));
        assert!(matches!(
            AnalyticsConfig::from_json("{ not json"),
            Err(AnalyticsError::InvalidConfig(msg)) if msg.starts_with("malformed config")
        ));
        assert!(matches!(
            AnalyticsConfig::from_json(r#"{ "revenue_status": "shipped" }"#),
            Err(AnalyticsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let path = std::env::temp_dir().join(format!(
            "order-analytics-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "highlight_category": "books" }"#).unwrap();
        let loaded = AnalyticsConfig::from_path(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.unwrap().highlight_category, "books");
        assert!(matches!(
            AnalyticsConfig::from_path(&path),
            Err(AnalyticsError::InvalidConfig(msg)) if msg.starts_with("cannot read")
        ));
    }

    #[test]
    fn test_blank_category_is_rejected() {
        let config = AnalyticsConfig {
            highlight_category: "  ".to_string(),
            ..AnalyticsConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
