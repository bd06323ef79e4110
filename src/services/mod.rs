//! Services for cost aggregation, report rendering, and scoring

pub mod aggregator;
pub mod report;
pub mod scorer;

pub use aggregator::CostAggregator;
pub use report::render_table;
pub use scorer::{calculate_score, ScoreConfig, ScoreOutcome};
