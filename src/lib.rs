//! Savings Planner - deterministic projection engine for SIP, RD and FD savings
//!
//! This library provides:
//! - Month-by-month contribution and compounding projections per instrument
//! - Internal rate of return via hybrid Newton-Raphson / bisection
//! - Closed-form life-insurance cover sizing
//! - Retirement plan evaluation and side-by-side scenario comparison
//! - Input clamping so every calculation is total over its inputs

pub mod error;
pub mod inputs;
pub mod projection;
pub mod irr;
pub mod insurance;
pub mod plan;
pub mod scenario;
pub mod config;
pub mod report;

// Re-export commonly used types
pub use error::{PlannerError, PlannerResult};
pub use inputs::{clamp_number, ClampRange, RawNumber};
pub use projection::{InstrumentType, ProjectionConfig, ProjectionEngine, ProjectionResult, YearSnapshot, simulate};
pub use irr::{IrrResult, IrrSettings, solve_monthly_irr};
pub use insurance::{compute_insurance_need, InsuranceConfig, InsuranceResult, RecommendationTier};
pub use plan::{PlanOutcome, RetirementPlan};
pub use scenario::{compare_instruments, compare_plans, CurveInputs};
pub use config::PlannerConfig;
