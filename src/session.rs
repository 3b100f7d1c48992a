//! The reactive session — the calculator's trigger surface.
//!
//! Holds the raw field text, the engine, and the last outcome. Every
//! trigger (an edited field, the recommended-rate action, the
//! reference-rate prefill, reset) rebuilds the input snapshot, recomputes
//! synchronously to completion, and returns the rendered view. Results
//! always reflect the most recent event; nothing is retained beyond the
//! current snapshot pair.

use rust_decimal::RoundingStrategy;
use tracing::debug;

use crate::config::CalcConfig;
use crate::engine::CalculationEngine;
use crate::input::{Field, Fields};
use crate::render::{render, RenderedView};
use crate::types::{CalcError, Outcome};

pub struct Session {
    config: CalcConfig,
    engine: CalculationEngine,
    fields: Fields,
    last_outcome: Outcome,
}

impl Session {
    pub fn new(config: CalcConfig) -> Self {
        let engine = CalculationEngine::new(config.engine.clone());
        Self {
            config,
            engine,
            fields: Fields::new(),
            last_outcome: Outcome::Incomplete,
        }
    }

    /// Access the session configuration.
    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Raw text currently held for a field.
    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    /// The last computed outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.last_outcome
    }

    /// Render the current outcome without recomputing.
    pub fn view(&self) -> RenderedView {
        render(&self.last_outcome, &self.config.market)
    }

    /// A field was edited: store the raw text and recompute.
    pub fn on_input_changed(&mut self, field: Field, raw: &str) -> Result<RenderedView, CalcError> {
        debug!(?field, raw, "Input changed");
        self.fields.set(field, raw);
        self.recompute()
    }

    /// Write the last computed break-even rate (two decimals, as
    /// displayed) into the cash-rate field and recompute. Does nothing
    /// while the calculator is Incomplete.
    pub fn use_recommended_rate(&mut self) -> Result<RenderedView, CalcError> {
        let breakeven = match self.last_outcome.snapshot() {
            Some(s) => s.breakeven_rate,
            None => {
                debug!("Recommended rate requested while incomplete — ignored");
                return Ok(self.view());
            }
        };
        let rounded =
            breakeven.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        debug!(rate = %rounded, "Applying recommended rate");
        // Always two decimal places, like the displayed rate
        self.fields.set(Field::CashRate, &format!("{rounded:.2}"));
        self.recompute()
    }

    /// Prefill the cash-rate field from the configured reference rate and
    /// recompute.
    pub fn apply_reference_rate(&mut self) -> Result<RenderedView, CalcError> {
        let rate = self.config.market.reference_rate;
        debug!(rate = %rate, "Applying reference rate");
        self.fields.set(Field::CashRate, &rate.to_string());
        self.recompute()
    }

    /// Clear all four raw fields and re-render (always Incomplete).
    pub fn reset(&mut self) -> Result<RenderedView, CalcError> {
        debug!("Session reset");
        self.fields.clear_all();
        self.recompute()
    }

    fn recompute(&mut self) -> Result<RenderedView, CalcError> {
        let snapshot = self.fields.snapshot();
        self.last_outcome = self.engine.compute(&snapshot)?;
        Ok(self.view())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
