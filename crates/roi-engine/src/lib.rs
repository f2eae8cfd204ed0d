//! roi-engine: the invoice-automation savings formula.
//!
//! `compute_roi` is pure and total. It does not validate its input and does
//! not guard divisions, so a zero monthly saving or a zero implementation
//! cost yields infinity or NaN in the affected fields.

pub mod constants;
pub mod engine;

pub use constants::*;
pub use engine::{compute_roi, unboosted_monthly_savings};
