//! Policy document model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::worker::Worker;

/// An insurance policy definition as fetched from the data source.
///
/// Lives under the source payload's `policy` key. The dental flag and
/// company percentage apply uniformly to every worker in the document.
/// Unknown fields are preserved and echoed back in the response's `input`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDocument {
    /// The covered workers, in source order.
    pub workers: Vec<Worker>,
    /// Whether the policy includes dental coverage.
    pub has_dental_care: bool,
    /// The percentage of total cost absorbed by the company, nominally in [0, 100].
    pub company_percentage: f64,
    /// Passthrough fields preserved verbatim from the source document.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
