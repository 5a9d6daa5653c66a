//! Raw input sanitising shared by the projection engine and the insurance calculator
//!
//! Every numeric input passes through [`clamp_number`] before it reaches a
//! formula, so NaN and infinities never propagate into results.

mod clamp;
mod limits;

pub use clamp::{clamp_number, ClampRange, NumericInput, RawNumber};
pub use limits::*;
