//! Documented input ranges
//!
//! Growth-curve, retirement-plan and insurance form fields are clamped to
//! these bounds before they reach the engines.

use super::ClampRange;

/// Growth-curve horizon in years
pub const HORIZON_YEARS: ClampRange = ClampRange::new(1.0, 60.0, 20.0);

/// Monthly contribution amount
pub const MONTHLY_CONTRIBUTION: ClampRange = ClampRange::new(0.0, 10_000_000.0, 10_000.0);

/// Expected nominal annual return, percent
pub const EXPECTED_RETURN_PERCENT: ClampRange = ClampRange::new(0.0, 30.0, 12.0);

/// Annual inflation, percent
pub const INFLATION_PERCENT: ClampRange = ClampRange::new(0.0, 20.0, 6.0);

// Retirement plan inputs

pub const PLAN_CURRENT_AGE: ClampRange = ClampRange::new(18.0, 60.0, 25.0);
pub const PLAN_RETIREMENT_AGE: ClampRange = ClampRange::new(45.0, 75.0, 60.0);
pub const PLAN_MONTHLY_CONTRIBUTION: ClampRange = ClampRange::new(1_000.0, 100_000.0, 10_000.0);
pub const PLAN_EXPECTED_RETURN_PERCENT: ClampRange = ClampRange::new(7.0, 15.0, 12.0);
pub const PLAN_INFLATION_PERCENT: ClampRange = ClampRange::new(4.0, 8.0, 6.0);

// Insurance need inputs

pub const INSURED_AGE: ClampRange = ClampRange::new(18.0, 70.0, 30.0);
pub const ANNUAL_INCOME: ClampRange = ClampRange::new(0.0, 100_000_000.0, 0.0);
pub const ANNUAL_EXPENSES: ClampRange = ClampRange::new(0.0, 100_000_000.0, 0.0);
pub const DEPENDENTS_COUNT: ClampRange = ClampRange::new(0.0, 10.0, 0.0);
pub const LIABILITIES: ClampRange = ClampRange::new(0.0, 1_000_000_000.0, 0.0);
pub const CURRENT_COVER: ClampRange = ClampRange::new(0.0, 1_000_000_000.0, 0.0);
pub const REPLACEMENT_YEARS: ClampRange = ClampRange::new(5.0, 40.0, 20.0);
