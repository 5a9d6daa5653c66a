//! Insurance need calculation

use serde::{Deserialize, Serialize};

use crate::inputs;

/// Maximum dependent buffer as a multiple of annual income
const MAX_DEPENDENT_MULTIPLE: f64 = 1.5;
/// Dependent buffer base multiple and per-dependent increment
const DEPENDENT_BASE_MULTIPLE: f64 = 0.4;
const DEPENDENT_STEP_MULTIPLE: f64 = 0.25;

/// Age from which half a year's income is added to the need
const AGE_BUFFER_THRESHOLD: f64 = 45.0;
const AGE_BUFFER_MULTIPLE: f64 = 0.5;

/// Coverage multiples at which the recommendation steps up
const HIGH_COVER_MULTIPLE: f64 = 10.0;
const RIDERS_COVER_MULTIPLE: f64 = 15.0;

/// Inputs to the insurance need calculation.
///
/// Every field is clamped to its documented range before use, so any value
/// (including NaN) is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceConfig {
    pub age: f64,
    pub annual_income: f64,
    pub annual_expenses: f64,
    pub dependents_count: f64,
    pub liabilities: f64,
    pub current_cover: f64,
    /// Years of expenses the cover should replace
    pub replacement_years: f64,
}

impl Default for InsuranceConfig {
    fn default() -> Self {
        Self {
            age: inputs::INSURED_AGE.fallback,
            annual_income: inputs::ANNUAL_INCOME.fallback,
            annual_expenses: inputs::ANNUAL_EXPENSES.fallback,
            dependents_count: inputs::DEPENDENTS_COUNT.fallback,
            liabilities: inputs::LIABILITIES.fallback,
            current_cover: inputs::CURRENT_COVER.fallback,
            replacement_years: inputs::REPLACEMENT_YEARS.fallback,
        }
    }
}

impl InsuranceConfig {
    /// Copy with every field clamped to its documented range
    pub fn clamped(&self) -> Self {
        Self {
            age: inputs::INSURED_AGE.apply(self.age),
            annual_income: inputs::ANNUAL_INCOME.apply(self.annual_income),
            annual_expenses: inputs::ANNUAL_EXPENSES.apply(self.annual_expenses),
            dependents_count: inputs::DEPENDENTS_COUNT.apply(self.dependents_count),
            liabilities: inputs::LIABILITIES.apply(self.liabilities),
            current_cover: inputs::CURRENT_COVER.apply(self.current_cover),
            replacement_years: inputs::REPLACEMENT_YEARS.apply(self.replacement_years),
        }
    }
}

/// Recommended product tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationTier {
    /// Standard term plan
    Standard,
    /// High cover term plan
    High,
    /// High cover term plan with riders
    HighPlusRiders,
}

impl RecommendationTier {
    pub fn from_coverage_multiple(multiple: f64) -> Self {
        if multiple >= RIDERS_COVER_MULTIPLE {
            RecommendationTier::HighPlusRiders
        } else if multiple >= HIGH_COVER_MULTIPLE {
            RecommendationTier::High
        } else {
            RecommendationTier::Standard
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RecommendationTier::Standard => "Standard term plan",
            RecommendationTier::High => "High cover term plan",
            RecommendationTier::HighPlusRiders => "High cover term plan + consider riders",
        }
    }
}

/// Insurance need with its components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceResult {
    pub gross_need: f64,
    /// Gross need less existing cover, floored at 0
    pub recommended_cover: f64,
    /// Recommended cover in multiples of annual income (0 without income)
    pub coverage_multiple: f64,
    pub recommendation_tier: RecommendationTier,

    pub income_replacement: f64,
    pub dependent_buffer: f64,
    pub age_buffer: f64,
}

/// Size the recommended life cover. Total: clamps every input first.
pub fn compute_insurance_need(config: &InsuranceConfig) -> InsuranceResult {
    let c = config.clamped();

    let income_replacement = c.annual_expenses * c.replacement_years;

    let dependent_buffer = if c.dependents_count > 0.0 {
        let multiple = (DEPENDENT_BASE_MULTIPLE + c.dependents_count * DEPENDENT_STEP_MULTIPLE)
            .min(MAX_DEPENDENT_MULTIPLE);
        c.annual_income * multiple
    } else {
        0.0
    };

    let age_buffer = if c.age >= AGE_BUFFER_THRESHOLD {
        c.annual_income * AGE_BUFFER_MULTIPLE
    } else {
        0.0
    };

    let gross_need = income_replacement + c.liabilities + dependent_buffer + age_buffer;
    let recommended_cover = (gross_need - c.current_cover).max(0.0);

    let coverage_multiple = if c.annual_income > 0.0 {
        recommended_cover / c.annual_income
    } else {
        0.0
    };

    InsuranceResult {
        gross_need,
        recommended_cover,
        coverage_multiple,
        recommendation_tier: RecommendationTier::from_coverage_multiple(coverage_multiple),
        income_replacement,
        dependent_buffer,
        age_buffer,
    }
}
