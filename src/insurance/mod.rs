//! Life-insurance cover sizing
//!
//! Closed-form need estimate: years of expenses to replace, outstanding
//! liabilities, a buffer for dependents and a buffer for older earners, less
//! the cover already held.

mod need;

pub use need::{compute_insurance_need, InsuranceConfig, InsuranceResult, RecommendationTier};
