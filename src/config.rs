//! Planner config file
//!
//! A JSON document with optional sections; anything left out takes the
//! calculator defaults.
//!
//! ```json
//! {
//!   "plan": { "current_age": 30, "retirement_age": 60, "instrument": "sip" },
//!   "comparison": { "monthly_contribution": 15000 },
//!   "curve": { "years": "25" },
//!   "insurance": { "age": 35, "annual_income": 1500000 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{PlannerError, PlannerResult};
use crate::insurance::InsuranceConfig;
use crate::plan::RetirementPlan;
use crate::scenario::CurveInputs;

/// Everything the planner can evaluate in one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub plan: RetirementPlan,

    /// Scenario B; comparisons are skipped when absent
    #[serde(default)]
    pub comparison: Option<RetirementPlan>,

    #[serde(default)]
    pub curve: CurveInputs,

    #[serde(default)]
    pub insurance: InsuranceConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            plan: RetirementPlan::default(),
            comparison: Some(RetirementPlan::default_comparison()),
            curve: CurveInputs::default(),
            insurance: InsuranceConfig::default(),
        }
    }
}

impl PlannerConfig {
    /// Parse a config from JSON text
    pub fn from_json(text: &str) -> PlannerResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a config file
    pub fn from_path(path: &Path) -> PlannerResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| PlannerError::io(path, e))?;
        let config = Self::from_json(&text)?;
        log::info!("loaded planner config from {}", path.display());
        Ok(config)
    }
}
