//! REMESA — remittance round-trip calculator core.
//!
//! Pure calculation engine and reactive session for a two-step currency
//! conversion: a reference-currency transfer is swapped into a stable
//! digital asset, the asset is sold for local fiat, and the proceeds may
//! be used to buy physical cash at a separate rate. The crate derives
//! totals, the break-even rate, and the profit/loss breakdown, and renders
//! them as locale-formatted strings for a host UI.

pub mod config;
pub mod engine;
pub mod input;
pub mod render;
pub mod session;
pub mod types;
