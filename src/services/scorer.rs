//! Zero-on-fail weighted scoring
//!
//! A metric scoring below its per-metric threshold contributes 0 to the
//! weighted aggregate while its weight stays in the denominator. The
//! aggregate then passes or fails against a single test-level threshold.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::types::{EvalcostError, Result};

/// Scoring configuration supplied by the evaluation harness.
///
/// Each field defaults independently, but a supplied `weights` or
/// `metric_thresholds` replaces the whole default table rather than
/// merging key by key.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScoreConfig {
    /// Which metrics participate and how much each counts
    #[serde(default = "default_weights")]
    pub weights: BTreeMap<String, f64>,
    /// Per-metric minimum raw score; unlisted metrics floor at 0.0
    #[serde(default = "default_metric_thresholds")]
    pub metric_thresholds: BTreeMap<String, f64>,
    /// Pass/fail cutoff for the final aggregate
    #[serde(default = "default_test_threshold")]
    pub threshold: f64,
}

fn default_weights() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("Correctness".to_string(), 2.0),
        ("Tone".to_string(), 1.0),
        ("Topicality".to_string(), 1.0),
        ("Greeting".to_string(), 1.0),
        ("Performance".to_string(), 2.0),
    ])
}

fn default_metric_thresholds() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("Correctness".to_string(), 0.0),
        ("Tone".to_string(), 0.0),
        ("Topicality".to_string(), 0.8),
        ("Greeting".to_string(), 0.8),
        ("Performance".to_string(), 0.6),
    ])
}

fn default_test_threshold() -> f64 {
    0.6
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            weights: default_weights(),
            metric_thresholds: default_metric_thresholds(),
            threshold: default_test_threshold(),
        }
    }
}

impl ScoreConfig {
    /// Decode a JSON context blob; non-numeric weights or thresholds fail here
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| EvalcostError::Score(e.to_string()))
    }
}

/// Outcome of one scoring call
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoreOutcome {
    pub pass: bool,
    pub score: f64,
    pub reason: String,
}

/// Compute the zero-on-fail weighted aggregate over `named_scores`.
///
/// Only metrics present in the weight table participate; a score for an
/// unlisted metric is ignored, and a weighted metric with no score is
/// treated as 0.0. Pure function over its inputs.
pub fn calculate_score(
    named_scores: &HashMap<String, f64>,
    config: Option<&ScoreConfig>,
) -> ScoreOutcome {
    let default_config;
    let config = match config {
        Some(c) => c,
        None => {
            default_config = ScoreConfig::default();
            &default_config
        }
    };

    let mut numerator = 0.0;
    let mut details = Vec::with_capacity(config.weights.len());

    for (metric, &weight) in &config.weights {
        let raw = named_scores.get(metric).copied().unwrap_or(0.0);
        let floor = config
            .metric_thresholds
            .get(metric)
            .copied()
            .unwrap_or(0.0);
        let used = if raw >= floor { raw } else { 0.0 };

        numerator += used * weight;
        details.push(format!(
            "{metric}: raw={raw:.2}, thr={floor:.2}, used={used:.2}, w={weight}"
        ));
    }

    let weight_sum: f64 = config.weights.values().sum();
    // empty weight table: keep the division well-defined; numerator is 0 anyway
    let denominator = if weight_sum == 0.0 { 1.0 } else { weight_sum };
    let score = numerator / denominator;

    ScoreOutcome {
        pass: score >= config.threshold,
        score,
        reason: format!("Zero-on-fail; {}", details.join(" | ")),
    }
}
