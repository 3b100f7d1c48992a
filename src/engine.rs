//! The calculation pipeline.
//!
//! Pure mapping from an input snapshot to a result snapshot (or the
//! Incomplete state). No side effects, no memory between calls: every
//! event re-derives the whole result from scratch.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::config::EngineConfig;
use crate::types::{CalcError, InputSnapshot, Outcome, ProfitBreakdown, ProfitTag, ResultSnapshot};

pub struct CalculationEngine {
    config: EngineConfig,
}

impl CalculationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Access the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Derive all quantities for one input snapshot.
    ///
    /// Returns `Outcome::Incomplete` while any mandatory input is
    /// non-positive — the normal mid-typing state. The error path only
    /// fires if a zero denominator reaches a division despite the
    /// precondition, which is an invariant violation.
    pub fn compute(&self, input: &InputSnapshot) -> Result<Outcome, CalcError> {
        if !input.is_complete() {
            debug!(%input, "Inputs incomplete — nothing to compute");
            return Ok(Outcome::Incomplete);
        }

        let total_local = input.asset_received * input.sell_rate;

        let breakeven_rate = total_local
            .checked_div(input.transfer_amount)
            .ok_or(CalcError::DivisionByZero { stage: "breakeven" })?;

        // Auto-apply stage: cash recovered when buying at the recommended
        // rate. Dividing by the rate as displayed (rounded) keeps the shown
        // figures consistent with each other.
        let effective_rate = match self.config.breakeven_decimals {
            Some(dp) => {
                let rounded =
                    breakeven_rate.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
                // A rate below half the last displayed place rounds to
                // zero; fall back to the unrounded rate so every complete
                // input still computes.
                if rounded > Decimal::ZERO {
                    rounded
                } else {
                    breakeven_rate
                }
            }
            None => breakeven_rate,
        };
        let final_asset = total_local
            .checked_div(effective_rate)
            .ok_or(CalcError::DivisionByZero { stage: "final cash" })?;

        let profit = if self.config.profit_mode && input.cash_rate > Decimal::ZERO {
            let cost_local = input.transfer_amount * input.cash_rate;
            let profit_local = total_local - cost_local;
            let profit_asset = total_local
                .checked_div(input.cash_rate)
                .ok_or(CalcError::DivisionByZero { stage: "profit" })?
                - input.transfer_amount;
            Some(ProfitBreakdown {
                cost_local,
                profit_local,
                profit_asset,
                tag: ProfitTag::from_sign(profit_local),
            })
        } else {
            None
        };

        let snapshot = ResultSnapshot {
            total_local,
            breakeven_rate,
            final_asset,
            profit,
        };

        debug!(%snapshot, "Snapshot computed");

        Ok(Outcome::Computed(snapshot))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
