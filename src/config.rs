//! Configuration loading from TOML.
//!
//! Reads `remesa.toml` (or any path the host supplies) and deserializes
//! into strongly-typed structs. Defaults carry the constants the
//! calculator ships with, so hosts without a config file can run on
//! `CalcConfig::default()`.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::fs;

/// Top-level calculator configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct CalcConfig {
    pub market: MarketConfig,
    pub engine: EngineConfig,
}

/// Currency labels and the default reference rate.
#[derive(Debug, Deserialize, Clone)]
pub struct MarketConfig {
    /// Local fiat label appended to local-currency amounts ("Bs").
    pub local_currency: String,
    /// Digital asset label ("USDT").
    pub asset_symbol: String,
    /// Symbol appended to final cash amounts ("$").
    pub cash_symbol: String,
    /// Fallback local-currency reference rate. Read-only; used only to
    /// prefill the cash-buy-rate field on request, never fetched remotely.
    pub reference_rate: Decimal,
}

/// Engine behavior flags.
#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    /// Whether the profit-analysis stage runs when a cash-buy rate is
    /// supplied.
    pub profit_mode: bool,
    /// Decimal places the break-even rate is rounded to before the
    /// final-cash division. `Some(2)` keeps displayed figures mutually
    /// consistent; `None` divides by the unrounded rate (final cash then
    /// equals the transfer exactly).
    #[serde(default)]
    pub breakeven_decimals: Option<u32>,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            market: MarketConfig {
                local_currency: "Bs".to_string(),
                asset_symbol: "USDT".to_string(),
                cash_symbol: "$".to_string(),
                reference_rate: dec!(396.37),
            },
            engine: EngineConfig {
                profit_mode: true,
                breakeven_decimals: Some(2),
            },
        }
    }
}

impl CalcConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: CalcConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = CalcConfig::default();
        assert_eq!(cfg.market.local_currency, "Bs");
        assert_eq!(cfg.market.asset_symbol, "USDT");
        assert_eq!(cfg.market.reference_rate, dec!(396.37));
        assert!(cfg.engine.profit_mode);
        assert_eq!(cfg.engine.breakeven_decimals, Some(2));
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [market]
            local_currency = "Bs"
            asset_symbol = "USDT"
            cash_symbol = "$"
            reference_rate = 400.25

            [engine]
            profit_mode = false
            breakeven_decimals = 4
        "#;
        let cfg: CalcConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.market.reference_rate, dec!(400.25));
        assert!(!cfg.engine.profit_mode);
        assert_eq!(cfg.engine.breakeven_decimals, Some(4));
    }

    #[test]
    fn test_breakeven_decimals_defaults_to_none() {
        let toml_str = r#"
            [market]
            local_currency = "Bs"
            asset_symbol = "USDT"
            cash_symbol = "$"
            reference_rate = 396.37

            [engine]
            profit_mode = true
        "#;
        let cfg: CalcConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.engine.breakeven_decimals, None);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = CalcConfig::load("/nonexistent/remesa.toml");
        assert!(result.is_err());
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("Failed to read config file"));
    }
}
