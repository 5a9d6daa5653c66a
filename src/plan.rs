//! Age-based retirement plan
//!
//! Turns "save this much from age X until age Y" into a projection, a
//! summary and an IRR.

use serde::{Deserialize, Serialize};

use crate::inputs::{self, RawNumber};
use crate::irr::{self, IrrResult};
use crate::projection::{InstrumentType, ProjectionConfig, ProjectionEngine, ProjectionResult, ProjectionSummary};

fn default_current_age() -> RawNumber { RawNumber::Number(25.0) }
fn default_retirement_age() -> RawNumber { RawNumber::Number(60.0) }
fn default_monthly_contribution() -> RawNumber { RawNumber::Number(10_000.0) }
fn default_expected_return() -> RawNumber { RawNumber::Number(12.0) }
fn default_inflation() -> RawNumber { RawNumber::Number(6.0) }
fn default_instrument() -> InstrumentType { InstrumentType::Sip }

/// Savings plan from the current age to retirement.
///
/// Fields hold raw form values; they are clamped to the `PLAN_*` ranges in
/// [`crate::inputs`] when the plan is projected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementPlan {
    #[serde(default = "default_current_age")]
    pub current_age: RawNumber,

    #[serde(default = "default_retirement_age")]
    pub retirement_age: RawNumber,

    #[serde(default = "default_monthly_contribution")]
    pub monthly_contribution: RawNumber,

    /// Nominal annual return, percent
    #[serde(default = "default_expected_return")]
    pub expected_return_percent: RawNumber,

    /// Annual inflation, percent
    #[serde(default = "default_inflation")]
    pub inflation_percent: RawNumber,

    #[serde(default = "default_instrument")]
    pub instrument: InstrumentType,
}

impl Default for RetirementPlan {
    fn default() -> Self {
        Self {
            current_age: default_current_age(),
            retirement_age: default_retirement_age(),
            monthly_contribution: default_monthly_contribution(),
            expected_return_percent: default_expected_return(),
            inflation_percent: default_inflation(),
            instrument: default_instrument(),
        }
    }
}

impl RetirementPlan {
    /// The alternative plan shown next to the default one: retire at 65,
    /// save 15,000 a month at 10%
    pub fn default_comparison() -> Self {
        Self {
            retirement_age: RawNumber::Number(65.0),
            monthly_contribution: RawNumber::Number(15_000.0),
            expected_return_percent: RawNumber::Number(10.0),
            ..Self::default()
        }
    }

    /// Clamped `(current, retirement)` ages in whole years
    pub fn ages(&self) -> (u32, u32) {
        let current = inputs::PLAN_CURRENT_AGE.apply(&self.current_age).floor() as u32;
        let retirement = inputs::PLAN_RETIREMENT_AGE.apply(&self.retirement_age).floor() as u32;
        (current, retirement)
    }

    /// Years until retirement, 0 if already past it
    pub fn horizon_years(&self) -> u32 {
        let (current, retirement) = self.ages();
        retirement.saturating_sub(current)
    }

    pub fn projection_config(&self) -> ProjectionConfig {
        let (current, retirement) = self.ages();
        ProjectionConfig {
            horizon_years: retirement.saturating_sub(current),
            monthly_contribution: inputs::PLAN_MONTHLY_CONTRIBUTION.apply(&self.monthly_contribution),
            annual_nominal_return_percent: inputs::PLAN_EXPECTED_RETURN_PERCENT.apply(&self.expected_return_percent),
            annual_inflation_percent: inputs::PLAN_INFLATION_PERCENT.apply(&self.inflation_percent),
            instrument: self.instrument,
            start_age: Some(current),
        }
    }

    /// Project the plan and derive its summary and IRR
    pub fn evaluate(&self) -> PlanOutcome {
        let engine = ProjectionEngine::new(self.projection_config());
        let projection = engine.simulate();
        let summary = projection.summary();
        let irr = irr::calculate_irr(&projection.cashflows, engine.config().inflation_rate());

        log::debug!(
            "plan from age {:?} over {} years ({}): corpus {:.2}, irr {:?}",
            engine.config().start_age,
            engine.config().horizon_years,
            self.instrument,
            summary.total_corpus,
            irr.map(|r| r.annual_nominal_rate_percent)
        );

        PlanOutcome {
            plan: self.clone(),
            summary,
            irr,
            projection,
        }
    }
}

/// Evaluated plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub plan: RetirementPlan,
    pub summary: ProjectionSummary,
    /// `None` when the cashflows admit no IRR
    pub irr: Option<IrrResult>,
    pub projection: ProjectionResult,
}
