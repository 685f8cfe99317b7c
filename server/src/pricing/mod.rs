//! Pricing Module
//!
//! Price strings from the menu become line totals, cart subtotals and
//! the final charge amount here. All rounding is half-away-from-zero
//! to 2 decimal places.

pub mod calculator;
pub mod charges;

pub use calculator::{cart_total, line_total, parse_price, round_money, unit_price};
pub use charges::{ChargeBreakdown, compute_charges};
