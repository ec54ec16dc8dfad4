//! Calculation logic for the Policy Cost Engine.
//!
//! This module contains the deterministic pricing rule: coverage tier
//! lookup keyed by number of children, the employer/employee cost split
//! for a single worker, and the per-policy pricing pass that maps the
//! rule over a whole document and aggregates totals.

mod cost_split;
mod policy_pricing;
mod tier;

pub use cost_split::compute_cost;
pub use policy_pricing::{PricedPolicy, price_policy};
pub use tier::{COVERAGE_MAX_AGE, CoverageTier, tier_for_childs};
