//! Locale formatting and the rendered-view contract.
//!
//! Results are rendered as plain data — formatted strings plus a
//! visibility flag — so any host UI (web view, TUI, tests) can consume
//! them without the core knowing about presentation.
//!
//! The format is fixed: exactly two decimal places, `.` as the thousands
//! separator, `,` as the decimal separator ("1.234,56").

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::config::MarketConfig;
use crate::types::{Outcome, ProfitTag};

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Format an amount with two decimals, dot-grouped thousands, and a comma
/// decimal separator.
pub fn format_amount(value: Decimal) -> String {
    // Ties round away from zero, matching the host-locale convention
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let text = rounded.abs().to_string();

    // Rounding caps the scale at 2, so padding gives exactly two digits
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{f:0<2}")),
        None => (text, "00".to_string()),
    };

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{frac_part}")
}

/// `format_amount` plus a unit suffix ("400,00 Bs").
pub fn format_with_unit(value: Decimal, unit: &str) -> String {
    format!("{} {}", format_amount(value), unit)
}

// ---------------------------------------------------------------------------
// Rendered views
// ---------------------------------------------------------------------------

/// What the host UI shows for one outcome. `visible == false` means the
/// result region is hidden and `panel` is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedView {
    pub visible: bool,
    pub panel: Option<ResultPanel>,
}

impl RenderedView {
    pub fn hidden() -> Self {
        Self {
            visible: false,
            panel: None,
        }
    }
}

/// Formatted result fields, unit suffixes included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultPanel {
    pub total_local: String,
    pub breakeven_rate: String,
    pub final_asset: String,
    pub profit: Option<ProfitPanel>,
}

/// Formatted profit section, present only in profit mode with a cash rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfitPanel {
    pub cost_local: String,
    pub profit_local: String,
    pub profit_asset: String,
    pub tag: ProfitTag,
}

/// Map an outcome to its rendered view.
pub fn render(outcome: &Outcome, market: &MarketConfig) -> RenderedView {
    let snapshot = match outcome.snapshot() {
        Some(s) => s,
        None => return RenderedView::hidden(),
    };

    let profit = snapshot.profit.map(|p| ProfitPanel {
        cost_local: format_with_unit(p.cost_local, &market.local_currency),
        profit_local: format_with_unit(p.profit_local, &market.local_currency),
        profit_asset: format_with_unit(p.profit_asset, &market.cash_symbol),
        tag: p.tag,
    });

    RenderedView {
        visible: true,
        panel: Some(ResultPanel {
            total_local: format_with_unit(snapshot.total_local, &market.local_currency),
            // The rate is a local-currency price per asset unit
            breakeven_rate: format_with_unit(
                snapshot.breakeven_rate,
                &format!("{}/{}", market.local_currency, market.asset_symbol),
            ),
            final_asset: format_with_unit(snapshot.final_asset, &market.cash_symbol),
            profit,
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
