//! Aggregator service for per-provider cost statistics

use crate::types::ResultRecord;
use std::collections::HashMap;

/// Iteration count the projections extrapolate to; the yearly figure
/// assumes this many iterations per day
const PROJECTION_ITERATIONS: f64 = 100_000.0;

/// Running cost totals for one provider
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderCost {
    pub total_cost: f64,
    pub run_count: u64,
}

impl ProviderCost {
    /// Fold one record's cost into the running totals
    pub fn add(&mut self, cost: f64) {
        self.total_cost += cost;
        self.run_count = self.run_count.saturating_add(1);
    }

    /// Average cost per iteration (0.0 when no runs were recorded)
    pub fn avg(&self) -> f64 {
        if self.run_count == 0 {
            0.0
        } else {
            self.total_cost / self.run_count as f64
        }
    }
}

/// One rendered report row: averages and extrapolated projections
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderReport {
    pub provider_id: String,
    pub avg_cost: f64,
    pub cost_per_100k: f64,
    pub cost_per_year: f64,
}

/// Aggregator for computing cost statistics
pub struct CostAggregator;

impl CostAggregator {
    /// Group records by provider id (missing/empty id → "unknown-provider")
    pub fn by_provider(records: &[ResultRecord]) -> HashMap<String, ProviderCost> {
        let mut provider_map: HashMap<String, ProviderCost> = HashMap::new();

        for record in records {
            let usage = provider_map
                .entry(record.provider_id().to_string())
                .or_default();
            usage.add(record.cost_or_zero());
        }

        provider_map
    }

    /// Compute report rows, sorted by provider id ascending
    pub fn report_rows(records: &[ResultRecord]) -> Vec<ProviderReport> {
        let mut rows: Vec<ProviderReport> = Self::by_provider(records)
            .into_iter()
            .map(|(provider_id, usage)| {
                let avg_cost = usage.avg();
                let cost_per_100k = avg_cost * PROJECTION_ITERATIONS;
                // assumes 100k iterations/day, every day of the year
                let cost_per_year = cost_per_100k * 365.0;
                ProviderReport {
                    provider_id,
                    avg_cost,
                    cost_per_100k,
                    cost_per_year,
                }
            })
            .collect();

        rows.sort_by(|a, b| a.provider_id.cmp(&b.provider_id));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProviderRef, UNKNOWN_PROVIDER};

    const EPS: f64 = 1e-9;

    fn make_record(provider: Option<&str>, cost: Option<f64>) -> ResultRecord {
        ResultRecord {
            provider: provider.map(|id| ProviderRef {
                id: Some(id.to_string()),
            }),
            cost,
        }
    }

    #[test]
    fn test_by_provider_empty_records() {
        let grouped = CostAggregator::by_provider(&[]);
        assert!(grouped.is_empty());
    }

    #[test]
    fn test_by_provider_sums_and_counts() {
        let records = vec![
            make_record(Some("openai:gpt-4o"), Some(0.01)),
            make_record(Some("openai:gpt-4o"), Some(0.03)),
            make_record(Some("anthropic:claude"), Some(0.02)),
        ];

        let grouped = CostAggregator::by_provider(&records);

        assert_eq!(grouped.len(), 2);
        let openai = &grouped["openai:gpt-4o"];
        assert!((openai.total_cost - 0.04).abs() < EPS);
        assert_eq!(openai.run_count, 2);
        assert_eq!(grouped["anthropic:claude"].run_count, 1);
    }

    #[test]
    fn test_missing_provider_groups_under_unknown() {
        let records = vec![
            make_record(None, Some(0.5)),
            make_record(None, Some(0.1)),
        ];

        let grouped = CostAggregator::by_provider(&records);

        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[UNKNOWN_PROVIDER].run_count, 2);
        assert!((grouped[UNKNOWN_PROVIDER].total_cost - 0.6).abs() < EPS);
    }

    #[test]
    fn test_missing_cost_counts_as_zero_but_increments_count() {
        let records = vec![
            make_record(Some("a"), Some(0.4)),
            make_record(Some("a"), None),
        ];

        let grouped = CostAggregator::by_provider(&records);

        let usage = &grouped["a"];
        assert_eq!(usage.run_count, 2);
        assert!((usage.total_cost - 0.4).abs() < EPS);
        assert!((usage.avg() - 0.2).abs() < EPS);
    }

    #[test]
    fn test_avg_equals_sum_over_count() {
        let records = vec![
            make_record(Some("p"), Some(0.003)),
            make_record(Some("p"), Some(0.001)),
            make_record(Some("p"), Some(0.002)),
        ];

        let grouped = CostAggregator::by_provider(&records);
        assert!((grouped["p"].avg() - 0.002).abs() < EPS);
    }

    #[test]
    fn test_avg_zero_runs() {
        let usage = ProviderCost::default();
        assert_eq!(usage.avg(), 0.0);
    }

    #[test]
    fn test_projection_consistency() {
        let records = vec![
            make_record(Some("p"), Some(0.01)),
            make_record(Some("q"), Some(1.25)),
        ];

        for row in CostAggregator::report_rows(&records) {
            assert!((row.cost_per_100k - row.avg_cost * 100_000.0).abs() < EPS);
            assert!((row.cost_per_year - row.cost_per_100k * 365.0).abs() < EPS);
        }
    }

    #[test]
    fn test_report_rows_sorted_ascending() {
        let records = vec![
            make_record(Some("zeta"), Some(0.1)),
            make_record(Some("alpha"), Some(0.2)),
            make_record(None, Some(0.3)),
            make_record(Some("mid"), Some(0.4)),
        ];

        let rows = CostAggregator::report_rows(&records);

        let ids: Vec<&str> = rows.iter().map(|r| r.provider_id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "mid", UNKNOWN_PROVIDER, "zeta"]);
    }

    #[test]
    fn test_report_rows_empty() {
        assert!(CostAggregator::report_rows(&[]).is_empty());
    }
}
