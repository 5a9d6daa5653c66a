//! Core projection engine for monthly contribution and compounding simulations

use log::debug;
use serde::{Deserialize, Serialize};

use crate::inputs::{self, clamp_number, NumericInput};
use super::cashflows::{ProjectionResult, YearSnapshot};
use super::instrument::InstrumentType;
use super::state::AccumulationState;

/// Lowest nominal return accepted, percent. Keeps `1 + rate >= 0`.
const MIN_RETURN_PERCENT: f64 = -100.0;

/// Lowest inflation accepted, percent. Keeps the deflator positive.
const MIN_INFLATION_PERCENT: f64 = -99.0;

/// Longest horizon a single run simulates (720 months)
pub const MAX_HORIZON_YEARS: u32 = 60;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Number of years to project
    pub horizon_years: u32,

    /// Contribution per month (FD deposits twelve of these once)
    pub monthly_contribution: f64,

    /// Nominal annual return, percent
    pub annual_nominal_return_percent: f64,

    /// Annual inflation, percent
    pub annual_inflation_percent: f64,

    pub instrument: InstrumentType,

    /// Investor age at projection start, stamped onto snapshots
    #[serde(default)]
    pub start_age: Option<u32>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_years: 20,
            monthly_contribution: 10_000.0,
            annual_nominal_return_percent: 12.0,
            annual_inflation_percent: 6.0,
            instrument: InstrumentType::Sip,
            start_age: None,
        }
    }
}

impl ProjectionConfig {
    /// Build a config from raw form values using the documented growth-curve ranges
    pub fn from_raw<H, M, R, I>(
        horizon_years: H,
        monthly_contribution: M,
        expected_return_percent: R,
        inflation_percent: I,
        instrument: InstrumentType,
    ) -> Self
    where
        H: NumericInput,
        M: NumericInput,
        R: NumericInput,
        I: NumericInput,
    {
        Self {
            horizon_years: inputs::HORIZON_YEARS.apply(horizon_years).floor() as u32,
            monthly_contribution: inputs::MONTHLY_CONTRIBUTION.apply(monthly_contribution),
            annual_nominal_return_percent: inputs::EXPECTED_RETURN_PERCENT.apply(expected_return_percent),
            annual_inflation_percent: inputs::INFLATION_PERCENT.apply(inflation_percent),
            instrument,
            start_age: None,
        }
    }

    pub fn with_instrument(&self, instrument: InstrumentType) -> Self {
        Self {
            instrument,
            ..self.clone()
        }
    }

    pub fn total_months(&self) -> u32 {
        self.horizon_years.saturating_mul(12)
    }

    /// Nominal annual return as a decimal
    pub fn annual_rate(&self) -> f64 {
        self.annual_nominal_return_percent / 100.0
    }

    /// Annual inflation as a decimal
    pub fn inflation_rate(&self) -> f64 {
        self.annual_inflation_percent / 100.0
    }

    /// Copy with every numeric field forced finite and inside its domain.
    /// Negative or non-finite contributions become 0; non-finite rates become 0%.
    /// The horizon is capped at [`MAX_HORIZON_YEARS`].
    pub fn sanitized(&self) -> Self {
        Self {
            horizon_years: self.horizon_years.min(MAX_HORIZON_YEARS),
            monthly_contribution: clamp_number(self.monthly_contribution, 0.0, f64::MAX, 0.0),
            annual_nominal_return_percent: clamp_number(
                self.annual_nominal_return_percent,
                MIN_RETURN_PERCENT,
                f64::MAX,
                0.0,
            ),
            annual_inflation_percent: clamp_number(
                self.annual_inflation_percent,
                MIN_INFLATION_PERCENT,
                f64::MAX,
                0.0,
            ),
            ..self.clone()
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine; the config is sanitised up front
    pub fn new(config: ProjectionConfig) -> Self {
        let sanitized = config.sanitized();
        if sanitized != config {
            debug!("projection config adjusted from {:?} to {:?}", config, sanitized);
        }
        Self { config: sanitized }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the month-by-month simulation
    pub fn simulate(&self) -> ProjectionResult {
        let config = &self.config;
        let terms = config.instrument.terms();
        let period_rate = terms.compounding.period_rate(config.annual_rate());
        let inflation_rate = config.inflation_rate();
        let total_months = config.total_months();

        let mut result = ProjectionResult::new(config.clone());
        let mut state = AccumulationState::new();

        for _month in 1..=total_months {
            state.advance_month();

            let posted = terms.deposit.amount_for_month(state.month, config.monthly_contribution);
            state.post_contribution(posted);
            result.cashflows.push(if posted > 0.0 { -posted } else { 0.0 });

            if terms.compounding.applies_in(state.month) {
                state.apply_growth(period_rate);
            }

            if state.is_year_end() {
                let year = state.completed_years();
                result.add_snapshot(YearSnapshot::new(
                    year,
                    config.start_age.map(|age| age.saturating_add(year)),
                    state.corpus,
                    state.total_invested,
                    inflation_rate,
                ));
            }
        }

        // Terminal liquidation: the corpus flows back in the last month
        match result.cashflows.last_mut() {
            Some(last) => *last += state.corpus,
            None => {
                debug!("zero-month horizon for {}, emitting single cashflow", config.instrument);
                result.cashflows.push(state.corpus);
            }
        }

        result.final_corpus = state.corpus;
        result.final_invested = state.total_invested;
        result
    }
}

/// Simulate a single config
pub fn simulate(config: &ProjectionConfig) -> ProjectionResult {
    ProjectionEngine::new(config.clone()).simulate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config(instrument: InstrumentType, years: u32) -> ProjectionConfig {
        ProjectionConfig {
            horizon_years: years,
            monthly_contribution: 10_000.0,
            annual_nominal_return_percent: 12.0,
            annual_inflation_percent: 6.0,
            instrument,
            start_age: None,
        }
    }

    #[test]
    fn test_fd_single_year() {
        let result = simulate(&config(InstrumentType::Fd, 1));

        assert_eq!(result.snapshots.len(), 1);
        let year1 = &result.snapshots[0];
        assert_eq!(year1.year_index, 1);
        assert_eq!(year1.total_invested, 120_000.0);
        assert_relative_eq!(year1.total_corpus, 134_400.0, max_relative = 1e-12);
        assert_relative_eq!(year1.returns_earned, 14_400.0, max_relative = 1e-9);
        assert_relative_eq!(year1.inflation_adjusted_corpus, 134_400.0 / 1.06, max_relative = 1e-12);
    }

    #[test]
    fn test_fd_cashflows() {
        let result = simulate(&config(InstrumentType::Fd, 2));

        assert_eq!(result.cashflows.len(), 24);
        assert_eq!(result.cashflows[0], -120_000.0);
        assert!(result.cashflows[1..23].iter().all(|&cf| cf == 0.0));
        assert_relative_eq!(result.cashflows[23], 120_000.0 * 1.12 * 1.12, max_relative = 1e-12);
    }

    #[test]
    fn test_sip_matches_closed_form() {
        let result = simulate(&config(InstrumentType::Sip, 10));
        let r = (1.12_f64).powf(1.0 / 12.0) - 1.0;
        let n = 120;
        // Annuity due: each deposit compounds in the month it is posted
        let expected = 10_000.0 * ((1.0 + r).powi(n) - 1.0) / r * (1.0 + r);

        assert_relative_eq!(result.final_corpus, expected, max_relative = 1e-9);
    }

    #[test]
    fn test_rd_compounds_quarterly() {
        let result = simulate(&config(InstrumentType::Rd, 1));
        let q = (1.12_f64).powf(0.25) - 1.0;

        let mut corpus = 0.0;
        for month in 1..=12 {
            corpus += 10_000.0;
            if month % 3 == 0 {
                corpus *= 1.0 + q;
            }
        }
        assert_relative_eq!(result.final_corpus, corpus, max_relative = 1e-12);
    }

    #[test]
    fn test_invested_totals() {
        for instrument in [InstrumentType::Sip, InstrumentType::Rd] {
            let result = simulate(&config(instrument, 5));
            for snap in &result.snapshots {
                assert_eq!(snap.total_invested, 10_000.0 * 12.0 * snap.year_index as f64);
            }
        }

        let fd = simulate(&config(InstrumentType::Fd, 5));
        assert!(fd.snapshots.iter().all(|s| s.total_invested == 120_000.0));
    }

    #[test]
    fn test_returns_identity() {
        for instrument in InstrumentType::ALL {
            let result = simulate(&config(instrument, 7));
            for snap in &result.snapshots {
                assert_eq!(snap.returns_earned, snap.total_corpus - snap.total_invested);
            }
        }
    }

    #[test]
    fn test_zero_horizon() {
        let result = simulate(&config(InstrumentType::Sip, 0));

        assert!(result.snapshots.is_empty());
        assert_eq!(result.cashflows, vec![0.0]);
        assert_eq!(result.final_corpus, 0.0);
    }

    #[test]
    fn test_snapshot_ages() {
        let mut cfg = config(InstrumentType::Sip, 3);
        cfg.start_age = Some(25);
        let result = simulate(&cfg);

        let ages: Vec<Option<u32>> = result.snapshots.iter().map(|s| s.age).collect();
        assert_eq!(ages, vec![Some(26), Some(27), Some(28)]);
    }

    #[test]
    fn test_sanitize_non_finite_inputs() {
        let cfg = ProjectionConfig {
            monthly_contribution: -500.0,
            annual_nominal_return_percent: f64::NAN,
            annual_inflation_percent: f64::INFINITY,
            ..config(InstrumentType::Sip, 2)
        };
        let engine = ProjectionEngine::new(cfg);

        assert_eq!(engine.config().monthly_contribution, 0.0);
        assert_eq!(engine.config().annual_nominal_return_percent, 0.0);
        assert_eq!(engine.config().annual_inflation_percent, 0.0);

        let result = engine.simulate();
        assert!(result.snapshots.iter().all(|s| s.total_corpus == 0.0));
        assert!(result.cashflows.iter().all(|&cf| cf == 0.0));
    }

    #[test]
    fn test_horizon_capped_at_sixty_years() {
        let engine = ProjectionEngine::new(config(InstrumentType::Sip, 400_000_000));
        assert_eq!(engine.config().horizon_years, MAX_HORIZON_YEARS);

        let result = engine.simulate();
        assert_eq!(result.cashflows.len(), 720);
        assert_eq!(result.snapshots.len(), 60);
        assert_eq!(result.config.total_months(), 720);
    }

    #[test]
    fn test_from_raw_clamps_to_curve_ranges() {
        let cfg = ProjectionConfig::from_raw("75", -10.0, "abc", 25, InstrumentType::Rd);

        assert_eq!(cfg.horizon_years, 60);
        assert_eq!(cfg.monthly_contribution, 0.0);
        assert_eq!(cfg.annual_nominal_return_percent, 12.0);
        assert_eq!(cfg.annual_inflation_percent, 20.0);
        assert_eq!(cfg.instrument, InstrumentType::Rd);
    }

    #[test]
    fn test_summary() {
        let result = simulate(&config(InstrumentType::Fd, 1));
        let summary = result.summary();

        assert_eq!(summary.years, 1);
        assert_eq!(summary.months, 12);
        assert_relative_eq!(summary.return_percentage, 12.0, max_relative = 1e-9);
        assert_relative_eq!(summary.wealth_multiplier, 1.12, max_relative = 1e-12);
        assert_relative_eq!(summary.real_return_assumption_percent, (1.12 / 1.06 - 1.0) * 100.0, max_relative = 1e-12);

        let empty = simulate(&config(InstrumentType::Sip, 0)).summary();
        assert_eq!(empty.return_percentage, 0.0);
        assert_eq!(empty.wealth_multiplier, 0.0);
        assert_eq!(empty.inflation_adjusted_corpus, 0.0);
    }
}
