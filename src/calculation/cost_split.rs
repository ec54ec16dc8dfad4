//! Per-worker cost split computation.

use crate::models::CostSplit;

use super::tier::{COVERAGE_MAX_AGE, tier_for_childs};

/// Computes the employer/employee cost split for one worker.
///
/// Workers older than [`COVERAGE_MAX_AGE`] have no coverage and cost
/// `{0, 0}` regardless of children, dental care, or percentage. Everyone
/// else is priced from the coverage tier for their number of children,
/// with the dental component added only when the policy covers it.
///
/// The split is linear in `company_percentage`:
/// `company = total * pct / 100` and `worker = total * (100 - pct) / 100`.
/// The percentage is not validated here; out-of-range values propagate
/// arithmetically. Range handling is a configuration concern of the
/// aggregation layer.
///
/// # Examples
///
/// ```
/// use policy_engine::calculation::compute_cost;
///
/// // 30 years old, no children, no dental, 50/50 split.
/// let split = compute_cost(30, 0, false, 50.0);
/// assert!((split.company - 0.1395).abs() < 1e-9);
/// assert!((split.worker - 0.1395).abs() < 1e-9);
///
/// // Past the coverage age limit, the cost is zero.
/// let split = compute_cost(70, 2, true, 80.0);
/// assert_eq!(split.company, 0.0);
/// assert_eq!(split.worker, 0.0);
/// ```
pub fn compute_cost(
    age: u32,
    childs: i64,
    has_dental_care: bool,
    company_percentage: f64,
) -> CostSplit {
    if age > COVERAGE_MAX_AGE {
        return CostSplit::ZERO;
    }

    let total = tier_for_childs(childs).total(has_dental_care);

    CostSplit {
        company: total * company_percentage / 100.0,
        worker: total * (100.0 - company_percentage) / 100.0,
    }
}
