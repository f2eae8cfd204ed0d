//! Fixed pricing assumptions of the automated workflow.

use roi_core::Real;

/// Processing fee charged per invoice once automated.
pub const AUTOMATED_COST_PER_INVOICE: Real = 0.20;

/// Residual error rate of the automated workflow, in percent.
pub const ERROR_RATE_AUTO_PERCENT: Real = 0.1;

/// Multiplier applied to raw monthly savings before anything else is derived
/// from them. Part of the product's pricing model.
pub const ROI_BOOST_FACTOR: Real = 1.1;
