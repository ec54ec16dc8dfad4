//! Worker model and its priced counterpart.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::cost::CostSplit;

/// A worker covered by an insurance policy.
///
/// Only `age` and `childs` participate in pricing. Any other field present
/// in the source document (e.g. `name`) is captured in `extra` and echoed
/// back unmodified in the response.
///
/// `childs` is deliberately signed: negative counts are not rejected, they
/// fall into the highest coverage tier (see [`crate::calculation`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// The worker's age in years.
    pub age: u32,
    /// The worker's number of children.
    pub childs: i64,
    /// Passthrough fields preserved verbatim from the source document.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A worker together with its computed cost split.
///
/// Serializes as the worker's fields followed by `cost`, matching the
/// documented response schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedWorker {
    /// The original worker, fields preserved in input order.
    #[serde(flatten)]
    pub worker: Worker,
    /// The employer/employee split for this worker.
    pub cost: CostSplit,
}
