//! Projection output structures: yearly snapshots and the monthly cashflow vector

use serde::{Deserialize, Serialize};

use super::engine::ProjectionConfig;

/// Position at the end of one completed projection year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSnapshot {
    /// Completed years since projection start (1-indexed)
    pub year_index: u32,

    /// Investor age at year end, when a start age was supplied
    pub age: Option<u32>,

    pub total_corpus: f64,
    pub total_invested: f64,

    /// Always `total_corpus - total_invested`
    pub returns_earned: f64,

    /// Corpus deflated by cumulative inflation to `year_index`
    pub inflation_adjusted_corpus: f64,
}

impl YearSnapshot {
    pub fn new(year_index: u32, age: Option<u32>, total_corpus: f64, total_invested: f64, inflation_rate: f64) -> Self {
        Self {
            year_index,
            age,
            total_corpus,
            total_invested,
            returns_earned: total_corpus - total_invested,
            inflation_adjusted_corpus: total_corpus / (1.0 + inflation_rate).powi(year_index as i32),
        }
    }
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Config the projection was run with (after sanitising)
    pub config: ProjectionConfig,

    /// One snapshot per completed year, in order
    pub snapshots: Vec<YearSnapshot>,

    /// Signed monthly cashflows: contributions negative, final corpus added to the last entry
    pub cashflows: Vec<f64>,

    /// Corpus at the end of the horizon
    pub final_corpus: f64,

    /// Contributions posted over the horizon
    pub final_invested: f64,
}

impl ProjectionResult {
    pub fn new(config: ProjectionConfig) -> Self {
        let months = config.total_months() as usize;
        Self {
            config,
            snapshots: Vec::with_capacity(months / 12),
            cashflows: Vec::with_capacity(months.max(1)),
            final_corpus: 0.0,
            final_invested: 0.0,
        }
    }

    /// Add a year-end snapshot
    pub fn add_snapshot(&mut self, snapshot: YearSnapshot) {
        self.snapshots.push(snapshot);
    }

    /// Snapshot for a given completed year, if it was reached
    pub fn snapshot_for_year(&self, year_index: u32) -> Option<&YearSnapshot> {
        self.snapshots.iter().find(|s| s.year_index == year_index)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let years = self.config.horizon_years;
        let annual_rate = self.config.annual_rate();
        let inflation_rate = self.config.inflation_rate();

        let corpus = self.final_corpus;
        let invested = self.final_invested;

        // A zero horizon still deflates by one year
        let deflation_years = years.max(1) as i32;

        let (return_percentage, wealth_multiplier) = if invested > 0.0 {
            ((corpus - invested) / invested * 100.0, corpus / invested)
        } else {
            (0.0, 0.0)
        };

        ProjectionSummary {
            years,
            months: self.config.total_months(),
            total_corpus: corpus,
            total_invested: invested,
            returns_earned: corpus - invested,
            inflation_adjusted_corpus: corpus / (1.0 + inflation_rate).powi(deflation_years),
            return_percentage,
            wealth_multiplier,
            real_return_assumption_percent: ((1.0 + annual_rate) / (1.0 + inflation_rate) - 1.0) * 100.0,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub months: u32,
    pub total_corpus: f64,
    pub total_invested: f64,
    pub returns_earned: f64,
    pub inflation_adjusted_corpus: f64,
    /// Gain over contributions, percent
    pub return_percentage: f64,
    pub wealth_multiplier: f64,
    /// Nominal return assumption net of inflation, percent
    pub real_return_assumption_percent: f64,
}
