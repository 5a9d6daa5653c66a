//! Projection engine for SIP, RD and FD savings simulations

mod state;
mod engine;
mod cashflows;
mod instrument;

pub use state::AccumulationState;
pub use engine::{ProjectionEngine, ProjectionConfig, simulate, MAX_HORIZON_YEARS};
pub use cashflows::{YearSnapshot, ProjectionResult, ProjectionSummary};
pub use instrument::{InstrumentType, InstrumentTerms, DepositSchedule, Compounding};
