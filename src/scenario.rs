//! Side-by-side comparisons
//!
//! Scenario A / B retirement plans, and SIP vs RD vs FD growth curves for the
//! same contribution. Every projection is independent, so each side runs on
//! its own rayon task.

use serde::{Deserialize, Serialize};

use crate::inputs::{NumericInput, RawNumber};
use crate::plan::{PlanOutcome, RetirementPlan};
use crate::projection::{self, InstrumentType, ProjectionConfig, ProjectionResult};

/// Two plans evaluated together
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanComparison {
    pub primary: PlanOutcome,
    pub comparison: PlanOutcome,
    /// `comparison - primary`
    pub corpus_difference: f64,
    pub invested_difference: f64,
    pub inflation_adjusted_difference: f64,
    /// Real IRR gap in percentage points, `None` unless both plans have an IRR
    pub real_irr_difference: Option<f64>,
}

/// Evaluate two plans in parallel
pub fn compare_plans(primary: &RetirementPlan, comparison: &RetirementPlan) -> PlanComparison {
    let (primary, comparison) = rayon::join(|| primary.evaluate(), || comparison.evaluate());

    let real_irr_difference = match (&primary.irr, &comparison.irr) {
        (Some(a), Some(b)) => Some(b.annual_real_rate_percent - a.annual_real_rate_percent),
        _ => None,
    };

    PlanComparison {
        corpus_difference: comparison.summary.total_corpus - primary.summary.total_corpus,
        invested_difference: comparison.summary.total_invested - primary.summary.total_invested,
        inflation_adjusted_difference: comparison.summary.inflation_adjusted_corpus
            - primary.summary.inflation_adjusted_corpus,
        real_irr_difference,
        primary,
        comparison,
    }
}

fn default_raw(value: f64) -> RawNumber {
    RawNumber::Number(value)
}
fn default_curve_years() -> RawNumber { default_raw(20.0) }
fn default_curve_monthly() -> RawNumber { default_raw(10_000.0) }
fn default_curve_return() -> RawNumber { default_raw(12.0) }
fn default_curve_inflation() -> RawNumber { default_raw(6.0) }

/// Raw growth-curve form values; clamped to the documented ranges before use.
///
/// When `goal_age` is set the horizon is `goal_age - age` instead of `years`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveInputs {
    #[serde(default = "default_curve_years")]
    pub years: RawNumber,
    #[serde(default)]
    pub age: Option<RawNumber>,
    #[serde(default)]
    pub goal_age: Option<RawNumber>,
    #[serde(default = "default_curve_monthly")]
    pub monthly_contribution: RawNumber,
    #[serde(default = "default_curve_return")]
    pub expected_return_percent: RawNumber,
    #[serde(default = "default_curve_inflation")]
    pub inflation_percent: RawNumber,
}

impl Default for CurveInputs {
    fn default() -> Self {
        Self {
            years: default_curve_years(),
            age: None,
            goal_age: None,
            monthly_contribution: default_curve_monthly(),
            expected_return_percent: default_curve_return(),
            inflation_percent: default_curve_inflation(),
        }
    }
}

impl CurveInputs {
    /// Unclamped horizon: years to the goal age when one is given
    fn raw_horizon(&self) -> f64 {
        match &self.goal_age {
            Some(goal_age) => goal_age.to_number() - self.age.to_number(),
            None => self.years.to_number(),
        }
    }

    /// Clamped config for one instrument
    pub fn config_for(&self, instrument: InstrumentType) -> ProjectionConfig {
        ProjectionConfig::from_raw(
            self.raw_horizon(),
            &self.monthly_contribution,
            &self.expected_return_percent,
            &self.inflation_percent,
            instrument,
        )
    }
}

/// Corpus of each instrument at the end of one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub year: u32,
    pub sip: f64,
    pub rd: f64,
    pub fd: f64,
}

/// SIP, RD and FD projections for the same inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentComparison {
    pub sip: ProjectionResult,
    pub rd: ProjectionResult,
    pub fd: ProjectionResult,
    /// One point per year of the horizon
    pub curve: Vec<CurvePoint>,
}

/// Simulate all three instruments in parallel and line up their yearly corpus
pub fn compare_instruments(inputs: &CurveInputs) -> InstrumentComparison {
    let base = inputs.config_for(InstrumentType::Sip);
    let years = base.horizon_years;

    let simulate_as = |instrument: InstrumentType| projection::simulate(&base.with_instrument(instrument));
    let (sip, (rd, fd)) = rayon::join(
        || simulate_as(InstrumentType::Sip),
        || rayon::join(|| simulate_as(InstrumentType::Rd), || simulate_as(InstrumentType::Fd)),
    );

    let corpus_at = |result: &ProjectionResult, year: u32| {
        result.snapshot_for_year(year).map_or(0.0, |s| s.total_corpus)
    };

    let curve = (1..=years)
        .map(|year| CurvePoint {
            year,
            sip: corpus_at(&sip, year),
            rd: corpus_at(&rd, year),
            fd: corpus_at(&fd, year),
        })
        .collect();

    InstrumentComparison { sip, rd, fd, curve }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_default_plans() {
        let result = compare_plans(&RetirementPlan::default(), &RetirementPlan::default_comparison());

        assert_eq!(result.primary.summary.years, 35);
        assert_eq!(result.comparison.summary.years, 40);
        assert_eq!(
            result.invested_difference,
            15_000.0 * 12.0 * 40.0 - 10_000.0 * 12.0 * 35.0
        );
        assert_eq!(
            result.corpus_difference,
            result.comparison.summary.total_corpus - result.primary.summary.total_corpus
        );
        assert!(result.real_irr_difference.is_some());
    }

    #[test]
    fn test_irr_difference_requires_both_sides() {
        let retired = RetirementPlan {
            current_age: RawNumber::from(60.0),
            ..RetirementPlan::default()
        };
        let result = compare_plans(&RetirementPlan::default(), &retired);
        assert_eq!(result.real_irr_difference, None);
    }

    #[test]
    fn test_instrument_curves() {
        let inputs = CurveInputs {
            years: RawNumber::from(5.0),
            ..CurveInputs::default()
        };
        let comparison = compare_instruments(&inputs);

        assert_eq!(comparison.curve.len(), 5);
        assert_eq!(comparison.sip.config.instrument, InstrumentType::Sip);
        assert_eq!(comparison.rd.config.instrument, InstrumentType::Rd);
        assert_eq!(comparison.fd.config.instrument, InstrumentType::Fd);

        for point in &comparison.curve {
            // Monthly deposits outgrow a single year's lump sum after year 1
            assert!(point.sip > point.fd || point.year == 1);
            // RD credits a full quarter on deposits made mid-quarter
            assert!(point.rd > point.sip);
        }
    }

    #[test]
    fn test_curve_inputs_clamped() {
        let inputs: CurveInputs = serde_json::from_str(r#"{"years": "0", "expected_return_percent": "lots"}"#).unwrap();
        let config = inputs.config_for(InstrumentType::Sip);

        assert_eq!(config.horizon_years, 1);
        assert_eq!(config.annual_nominal_return_percent, 12.0);
        assert_eq!(config.monthly_contribution, 10_000.0);
    }

    #[test]
    fn test_horizon_from_goal_age() {
        let inputs = CurveInputs {
            years: RawNumber::from(5.0),
            age: Some(RawNumber::from("30")),
            goal_age: Some(RawNumber::from(45.0)),
            ..CurveInputs::default()
        };
        assert_eq!(inputs.config_for(InstrumentType::Sip).horizon_years, 15);

        let comparison = compare_instruments(&inputs);
        assert_eq!(comparison.curve.len(), 15);
    }

    #[test]
    fn test_goal_age_below_age_clamps_to_one_year() {
        let inputs = CurveInputs {
            age: Some(RawNumber::from(50.0)),
            goal_age: Some(RawNumber::from(40.0)),
            ..CurveInputs::default()
        };
        assert_eq!(inputs.config_for(InstrumentType::Rd).horizon_years, 1);
    }

    #[test]
    fn test_non_numeric_goal_age_falls_back() {
        let inputs: CurveInputs =
            serde_json::from_str(r#"{"years": 5, "age": 30, "goal_age": "retire early"}"#).unwrap();
        assert_eq!(inputs.config_for(InstrumentType::Fd).horizon_years, 20);

        let no_age: CurveInputs = serde_json::from_str(r#"{"goal_age": 55}"#).unwrap();
        assert_eq!(no_age.config_for(InstrumentType::Fd).horizon_years, 20);
    }
}
