//! Per-policy pricing pass: map the cost rule over a document and total it.

use serde::{Deserialize, Serialize};

use crate::models::{PolicyDocument, PolicyTotal, PricedWorker};

use super::cost_split::compute_cost;

/// The outcome of pricing a whole policy document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedPolicy {
    /// Every worker from the document, in input order, with its cost split.
    pub workers: Vec<PricedWorker>,
    /// Aggregate employer and employee sums.
    pub total: PolicyTotal,
}

/// Prices every worker in a policy document and aggregates totals.
///
/// The document's dental flag and the given company percentage apply
/// uniformly to all workers. `company_percentage` is passed separately so
/// the caller can resolve out-of-range handling first; it normally equals
/// `document.company_percentage`.
///
/// Workers are never reordered or mutated: each output entry carries the
/// original worker's fields plus its computed `cost`.
pub fn price_policy(document: &PolicyDocument, company_percentage: f64) -> PricedPolicy {
    let workers: Vec<PricedWorker> = document
        .workers
        .iter()
        .map(|worker| PricedWorker {
            worker: worker.clone(),
            cost: compute_cost(
                worker.age,
                worker.childs,
                document.has_dental_care,
                company_percentage,
            ),
        })
        .collect();

    let total = PolicyTotal {
        company: workers.iter().map(|w| w.cost.company).sum(),
        workers: workers.iter().map(|w| w.cost.worker).sum(),
    };

    PricedPolicy { workers, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Worker;
    use serde_json::Map;

    const EPS: f64 = 1e-9;

    fn worker(age: u32, childs: i64) -> Worker {
        Worker {
            age,
            childs,
            extra: Map::new(),
        }
    }

    fn document(workers: Vec<Worker>, has_dental_care: bool, company_percentage: f64) -> PolicyDocument {
        PolicyDocument {
            workers,
            has_dental_care,
            company_percentage,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_empty_document_prices_to_zero() {
        let doc = document(vec![], true, 50.0);
        let priced = price_policy(&doc, doc.company_percentage);

        assert!(priced.workers.is_empty());
        assert_eq!(priced.total.company, 0.0);
        assert_eq!(priced.total.workers, 0.0);
    }

    #[test]
    fn test_single_worker_even_split() {
        let doc = document(vec![worker(30, 0)], false, 50.0);
        let priced = price_policy(&doc, doc.company_percentage);

        assert_eq!(priced.workers.len(), 1);
        assert!((priced.workers[0].cost.company - 0.1395).abs() < EPS);
        assert!((priced.workers[0].cost.worker - 0.1395).abs() < EPS);
    }

    #[test]
    fn test_totals_equal_per_worker_sums() {
        let doc = document(
            vec![worker(30, 0), worker(45, 1), worker(52, 4), worker(70, 2)],
            true,
            80.0,
        );
        let priced = price_policy(&doc, doc.company_percentage);

        let company_sum: f64 = priced.workers.iter().map(|w| w.cost.company).sum();
        let workers_sum: f64 = priced.workers.iter().map(|w| w.cost.worker).sum();
        assert!((priced.total.company - company_sum).abs() < EPS);
        assert!((priced.total.workers - workers_sum).abs() < EPS);
    }

    #[test]
    fn test_ineligible_worker_contributes_nothing() {
        let with_senior = document(vec![worker(30, 1), worker(70, 1)], true, 60.0);
        let without_senior = document(vec![worker(30, 1)], true, 60.0);

        let a = price_policy(&with_senior, 60.0);
        let b = price_policy(&without_senior, 60.0);
        assert!((a.total.company - b.total.company).abs() < EPS);
        assert!((a.total.workers - b.total.workers).abs() < EPS);
    }

    #[test]
    fn test_worker_order_preserved() {
        let doc = document(vec![worker(20, 0), worker(30, 1), worker(40, 2)], false, 50.0);
        let priced = price_policy(&doc, doc.company_percentage);

        let ages: Vec<u32> = priced.workers.iter().map(|w| w.worker.age).collect();
        assert_eq!(ages, vec![20, 30, 40]);
    }

    #[test]
    fn test_passthrough_fields_survive_pricing() {
        let json = r#"{
            "workers": [{ "name": "Ana", "age": 30, "childs": 0 }],
            "has_dental_care": false,
            "company_percentage": 50
        }"#;
        let doc: PolicyDocument = serde_json::from_str(json).unwrap();
        let priced = price_policy(&doc, doc.company_percentage);

        assert_eq!(
            priced.workers[0].worker.extra.get("name").unwrap(),
            "Ana"
        );
    }

    #[test]
    fn test_caller_supplied_percentage_wins() {
        // The caller may have clamped the document's raw percentage.
        let doc = document(vec![worker(30, 0)], false, 130.0);
        let priced = price_policy(&doc, 100.0);

        assert!((priced.workers[0].cost.company - 0.279).abs() < EPS);
        assert!(priced.workers[0].cost.worker.abs() < EPS);
    }
}
