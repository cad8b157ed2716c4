//! # Configuration State
//!
//! Stores register configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CASHBOX_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::Serialize;
use tracing::warn;

use cashbox_core::validation::{parse_inventory, RawCounts};
use cashbox_core::{Inventory, Money, Strategy};

/// Register configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency symbol (for display and log lines)
    pub currency_symbol: String,

    /// Strategy name used when a request omits `strategy`
    pub default_strategy: String,

    /// Drawer at startup, and after a reset without `initialState`
    pub opening_float: Inventory,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Currency: `$`
    /// - Strategy: `maxLarge`
    /// - Float: the built-in opening float (1230.50 in thirteen denominations)
    fn default() -> Self {
        ConfigState {
            currency_symbol: "$".to_string(),
            default_strategy: Strategy::LARGEST_FIRST.to_string(),
            opening_float: Inventory::default_float(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CASHBOX_CURRENCY_SYMBOL`: Override currency symbol
    /// - `CASHBOX_DEFAULT_STRATEGY`: `maxLarge`, `maxSmall` or `preferred`
    /// - `CASHBOX_OPENING_FLOAT`: JSON counts, e.g. `{"20": 4, "0.5": 15}`
    pub fn from_env() -> Self {
        ConfigState::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds configuration from any variable source.
    ///
    /// Invalid values are logged and the default kept.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(symbol) = lookup("CASHBOX_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(name) = lookup("CASHBOX_DEFAULT_STRATEGY") {
            if Strategy::parse(&name, Vec::new()).is_some() {
                config.default_strategy = name;
            } else {
                warn!(strategy = %name, "Unknown default strategy, keeping maxLarge");
            }
        }

        if let Some(raw) = lookup("CASHBOX_OPENING_FLOAT") {
            match parse_opening_float(&raw) {
                Ok(inventory) => config.opening_float = inventory,
                Err(reason) => {
                    warn!(%reason, "Invalid CASHBOX_OPENING_FLOAT, using default float")
                }
            }
        }

        config
    }

    /// Formats an amount as a currency string. Amounts are always in
    /// cents, so two decimals are always shown.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        let abs = cents.unsigned_abs();

        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            abs / 100,
            abs % 100
        )
    }
}

fn parse_opening_float(raw: &str) -> Result<Inventory, String> {
    let counts: RawCounts = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    parse_inventory(&counts).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashbox_core::Denomination;
    use std::collections::HashMap;

    fn vars(entries: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        assert_eq!(ConfigState::from_vars(vars(&[])), ConfigState::default());
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_vars(vars(&[
            ("CASHBOX_CURRENCY_SYMBOL", "€"),
            ("CASHBOX_DEFAULT_STRATEGY", "maxSmall"),
            ("CASHBOX_OPENING_FLOAT", r#"{"20": 4, "0.5": 10}"#),
        ]));

        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.default_strategy, "maxSmall");
        assert_eq!(config.opening_float.total().cents(), 8_500);
        assert_eq!(
            config
                .opening_float
                .count(Denomination::from_cents(2_000).unwrap()),
            4
        );
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = ConfigState::from_vars(vars(&[
            ("CASHBOX_DEFAULT_STRATEGY", "fewestCoins"),
            ("CASHBOX_OPENING_FLOAT", r#"{"3": 4}"#),
        ]));
        assert_eq!(config, ConfigState::default());

        let config = ConfigState::from_vars(vars(&[("CASHBOX_OPENING_FLOAT", "not json")]));
        assert_eq!(config.opening_float, Inventory::default_float());
    }

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(100)), "$1.00");
        assert_eq!(config.format_currency(Money::from_cents(5)), "$0.05");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
        assert_eq!(
            config.format_currency(Money::from_cents(21_474_836_475)),
            "$214748364.75"
        );
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }

    #[test]
    fn test_format_currency_custom_symbol() {
        let config = ConfigState {
            currency_symbol: "£".to_string(),
            ..ConfigState::default()
        };
        assert_eq!(config.format_currency(Money::from_cents(7_700)), "£77.00");
    }
}
