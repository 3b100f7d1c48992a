//! Shared types for the calculator.
//!
//! The input/result snapshots form the data model used across the engine,
//! render, and session modules. Snapshots are ephemeral: an InputSnapshot
//! is rebuilt from raw field text on every trigger, and a ResultSnapshot
//! wholly replaces any previous one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Input snapshot
// ---------------------------------------------------------------------------

/// Parsed values of the four raw inputs at one instant.
///
/// All fields are non-negative by construction (lenient parsing maps
/// empty, invalid, and negative text to zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Initial electronic transfer, in the reference currency.
    pub transfer_amount: Decimal,
    /// Stable-asset quantity received for the transfer.
    pub asset_received: Decimal,
    /// Local-currency price per asset unit when sold.
    pub sell_rate: Decimal,
    /// Local-currency price per unit paid to buy physical cash.
    /// Zero means "not supplied".
    pub cash_rate: Decimal,
}

impl InputSnapshot {
    /// Whether the three mandatory fields are all strictly positive.
    /// Until they are, the calculator stays in the Incomplete state.
    pub fn is_complete(&self) -> bool {
        self.transfer_amount > Decimal::ZERO
            && self.asset_received > Decimal::ZERO
            && self.sell_rate > Decimal::ZERO
    }
}

impl fmt::Display for InputSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transfer={} asset={} sell_rate={} cash_rate={}",
            self.transfer_amount, self.asset_received, self.sell_rate, self.cash_rate,
        )
    }
}

// ---------------------------------------------------------------------------
// Result snapshot
// ---------------------------------------------------------------------------

/// Derived quantities for one complete input snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSnapshot {
    /// Local-currency proceeds of selling the asset: asset_received × sell_rate.
    pub total_local: Decimal,
    /// Maximum cash-buy rate at which the round trip breaks even:
    /// total_local ÷ transfer_amount.
    pub breakeven_rate: Decimal,
    /// Cash recovered when buying at the recommended (break-even) rate.
    /// Algebraically the transfer amount, but re-derived from total_local
    /// and the displayed rate so the shown figures stay consistent.
    pub final_asset: Decimal,
    /// Profit breakdown; `None` when profit mode is off or no cash-buy
    /// rate was supplied. Never conflated with a numeric zero.
    pub profit: Option<ProfitBreakdown>,
}

impl fmt::Display for ResultSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total={} breakeven={} final={}",
            self.total_local, self.breakeven_rate, self.final_asset,
        )?;
        match &self.profit {
            Some(p) => write!(f, " | {p}"),
            None => write!(f, " | no cash rate"),
        }
    }
}

/// Profit analysis against a supplied cash-buy rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitBreakdown {
    /// Local currency needed to buy back the transfer amount in cash:
    /// transfer_amount × cash_rate.
    pub cost_local: Decimal,
    /// total_local − cost_local.
    pub profit_local: Decimal,
    /// Profit expressed in the reference currency:
    /// total_local ÷ cash_rate − transfer_amount.
    pub profit_asset: Decimal,
    /// Presentation classification from profit_local's sign.
    pub tag: ProfitTag,
}

impl fmt::Display for ProfitBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cost={} profit={} ({}) [{}]",
            self.cost_local, self.profit_local, self.profit_asset, self.tag,
        )
    }
}

/// Sign classification of the profit figures. Purely presentational; the
/// consumer uses it to pick a visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfitTag {
    /// profit_local >= 0 (break-even counts as a gain, not a loss).
    Positive,
    Negative,
}

impl ProfitTag {
    pub fn from_sign(profit_local: Decimal) -> Self {
        if profit_local >= Decimal::ZERO {
            ProfitTag::Positive
        } else {
            ProfitTag::Negative
        }
    }
}

impl fmt::Display for ProfitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfitTag::Positive => write!(f, "positive"),
            ProfitTag::Negative => write!(f, "negative"),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// The two states of the calculator, re-derived fresh on every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// One or more mandatory inputs missing or non-positive. Expected and
    /// frequent (user mid-typing); not an error.
    Incomplete,
    Computed(ResultSnapshot),
}

impl Outcome {
    pub fn is_computed(&self) -> bool {
        matches!(self, Outcome::Computed(_))
    }

    /// The snapshot, if one was computed.
    pub fn snapshot(&self) -> Option<&ResultSnapshot> {
        match self {
            Outcome::Computed(s) => Some(s),
            Outcome::Incomplete => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Incomplete => write!(f, "incomplete"),
            Outcome::Computed(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain errors. Parse failures are not represented here — they recover
/// silently to zero in the input module.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// A zero denominator reached a division. Structurally prevented by
    /// the Incomplete precondition; reaching this is an invariant
    /// violation, not a user-facing condition.
    #[error("Division by zero in {stage}")]
    DivisionByZero { stage: &'static str },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
