//! Cost split and aggregate total models.

use serde::{Deserialize, Serialize};

/// The split of one worker's policy cost between employer and employee.
///
/// For eligible workers `company + worker` equals the total tier cost
/// (within floating-point tolerance); for ineligible workers both sides
/// are exactly zero. Values are UF magnitudes carried as plain floats,
/// with no rounding applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostSplit {
    /// The portion of the cost absorbed by the company.
    pub company: f64,
    /// The portion of the cost borne by the worker.
    pub worker: f64,
}

impl CostSplit {
    /// A zero-cost split, used for workers without coverage.
    pub const ZERO: CostSplit = CostSplit {
        company: 0.0,
        worker: 0.0,
    };

    /// Returns the total cost represented by this split.
    pub fn total(&self) -> f64 {
        self.company + self.worker
    }
}

/// Aggregate policy totals across all priced workers.
///
/// The employee-side sum is named `workers` on the wire, matching the
/// existing response schema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyTotal {
    /// Sum of every worker's `cost.company`.
    pub company: f64,
    /// Sum of every worker's `cost.worker`.
    pub workers: f64,
}
