//! Raw field storage and lenient numeric parsing.
//!
//! Mirrors the behavior of free-text inputs: each of the four fields holds
//! whatever the user typed, and parsing maps empty, invalid, or negative
//! text to zero. Parsing never errors — a half-typed value simply leaves
//! the calculator in the Incomplete state until it becomes a number.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::trace;

use crate::types::InputSnapshot;

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// The four raw inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Transfer,
    AssetReceived,
    SellRate,
    CashRate,
}

impl Field {
    /// All fields (useful for iteration).
    pub const ALL: &'static [Field] = &[
        Field::Transfer,
        Field::AssetReceived,
        Field::SellRate,
        Field::CashRate,
    ];
}

/// Raw text of the four input fields.
#[derive(Debug, Clone, Default)]
pub struct Fields {
    transfer: String,
    asset_received: String,
    sell_rate: String,
    cash_rate: String,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, raw: &str) {
        *self.slot(field) = raw.to_string();
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Transfer => &self.transfer,
            Field::AssetReceived => &self.asset_received,
            Field::SellRate => &self.sell_rate,
            Field::CashRate => &self.cash_rate,
        }
    }

    /// Clear all four fields (the reset action).
    pub fn clear_all(&mut self) {
        for field in Field::ALL {
            self.slot(*field).clear();
        }
    }

    /// Parse the current text of every field into a fresh snapshot.
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            transfer_amount: parse_amount(&self.transfer),
            asset_received: parse_amount(&self.asset_received),
            sell_rate: parse_amount(&self.sell_rate),
            cash_rate: parse_amount(&self.cash_rate),
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Transfer => &mut self.transfer,
            Field::AssetReceived => &mut self.asset_received,
            Field::SellRate => &mut self.sell_rate,
            Field::CashRate => &mut self.cash_rate,
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Lenient amount parsing: trimmed text to a non-negative Decimal.
///
/// Empty, non-numeric, or negative input yields zero. A single comma is
/// accepted as the decimal separator, since the renderer emits
/// comma-decimal strings and users paste them back.
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    let normalized = if trimmed.matches(',').count() == 1 && !trimmed.contains('.') {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    match Decimal::from_str(&normalized) {
        Ok(value) if value >= Decimal::ZERO => value,
        Ok(_) => {
            trace!(raw, "Negative amount treated as zero");
            Decimal::ZERO
        }
        Err(_) => {
            trace!(raw, "Unparseable amount treated as zero");
            Decimal::ZERO
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // -- parse_amount tests --

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_amount("100"), dec!(100));
        assert_eq!(parse_amount("396.37"), dec!(396.37));
    }

    #[test]
    fn test_parse_empty_is_zero() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("   "), Decimal::ZERO);
    }

    #[test]
    fn test_parse_invalid_is_zero() {
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
        assert_eq!(parse_amount("12abc"), Decimal::ZERO);
        assert_eq!(parse_amount("1.2.3"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_negative_is_zero() {
        assert_eq!(parse_amount("-5"), Decimal::ZERO);
        assert_eq!(parse_amount("-0.01"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_comma_decimal() {
        assert_eq!(parse_amount("3,8"), dec!(3.8));
        assert_eq!(parse_amount("396,37"), dec!(396.37));
    }

    #[test]
    fn test_parse_mixed_separators_is_zero() {
        // "1.234,56" is a grouped display string, not valid field input
        assert_eq!(parse_amount("1.234,56"), Decimal::ZERO);
        assert_eq!(parse_amount("1,234,56"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_whitespace_padded() {
        assert_eq!(parse_amount("  42.5  "), dec!(42.5));
    }

    #[test]
    fn test_parse_zero() {
        assert_eq!(parse_amount("0"), Decimal::ZERO);
        assert_eq!(parse_amount("0.00"), dec!(0.00));
    }

    // -- Fields tests --

    #[test]
    fn test_fields_set_get() {
        let mut fields = Fields::new();
        fields.set(Field::Transfer, "100");
        fields.set(Field::CashRate, "3,8");
        assert_eq!(fields.get(Field::Transfer), "100");
        assert_eq!(fields.get(Field::CashRate), "3,8");
        assert_eq!(fields.get(Field::SellRate), "");
    }

    #[test]
    fn test_fields_snapshot() {
        let mut fields = Fields::new();
        fields.set(Field::Transfer, "100");
        fields.set(Field::AssetReceived, "99.5");
        fields.set(Field::SellRate, "4");
        let snap = fields.snapshot();
        assert_eq!(snap.transfer_amount, dec!(100));
        assert_eq!(snap.asset_received, dec!(99.5));
        assert_eq!(snap.sell_rate, dec!(4));
        assert_eq!(snap.cash_rate, Decimal::ZERO);
    }

    #[test]
    fn test_fields_snapshot_with_garbage() {
        let mut fields = Fields::new();
        fields.set(Field::Transfer, "oops");
        fields.set(Field::SellRate, "4");
        let snap = fields.snapshot();
        assert_eq!(snap.transfer_amount, Decimal::ZERO);
        assert_eq!(snap.sell_rate, dec!(4));
        assert!(!snap.is_complete());
    }

    #[test]
    fn test_fields_clear_all() {
        let mut fields = Fields::new();
        for field in Field::ALL {
            fields.set(*field, "7");
        }
        fields.clear_all();
        for field in Field::ALL {
            assert_eq!(fields.get(*field), "");
        }
        assert!(!fields.snapshot().is_complete());
    }
}
