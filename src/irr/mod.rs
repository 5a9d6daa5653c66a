//! Internal Rate of Return (IRR) from monthly projection cashflows
//!
//! The monthly rate is found with Newton-Raphson first; when that phase gives
//! up, bisection over a fixed bracket takes over. Mixed contribution and
//! lump-sum streams do not always have a derivative Newton can follow, while
//! a sign-changing bracket guarantees bisection converges.
//!
//! No displayable IRR is `None`, never zero.

mod npv;
mod newton;
mod bisection;

pub use npv::{npv, npv_derivative};
pub use newton::newton_raphson;
pub use bisection::bisection;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Tolerances and budgets for the hybrid solver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrSettings {
    /// Newton starting rate (monthly)
    pub initial_guess: f64,
    pub newton_max_iterations: u32,
    /// Successive-iterate delta at which Newton has converged
    pub newton_tolerance: f64,
    /// Derivative magnitude below which Newton gives up
    pub min_derivative: f64,
    /// Floor for Newton iterates, keeps `1 + rate > 0`
    pub rate_floor: f64,
    pub bracket_low: f64,
    pub bracket_high: f64,
    pub bisection_max_iterations: u32,
    /// NPV magnitude at which a bisection midpoint is accepted
    pub bisection_tolerance: f64,
}

impl Default for IrrSettings {
    fn default() -> Self {
        Self {
            initial_guess: 0.01,
            newton_max_iterations: 30,
            newton_tolerance: 1e-10,
            min_derivative: 1e-12,
            rate_floor: -0.99,
            bracket_low: -0.99,
            bracket_high: 10.0,
            bisection_max_iterations: 80,
            bisection_tolerance: 1e-8,
        }
    }
}

/// Monthly, annual nominal and annual real IRR, always present together
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrResult {
    /// Monthly rate as a decimal
    pub monthly_rate: f64,
    pub annual_nominal_rate_percent: f64,
    /// Nominal annual rate net of inflation, percent
    pub annual_real_rate_percent: f64,
}

/// Whether a stream can have an IRR at all: two or more entries with at
/// least one strictly positive and one strictly negative value
pub fn is_solvable(cashflows: &[f64]) -> bool {
    cashflows.len() >= 2
        && cashflows.iter().any(|&cf| cf > 0.0)
        && cashflows.iter().any(|&cf| cf < 0.0)
}

/// Monthly IRR with the default solver settings
pub fn solve_monthly_irr(cashflows: &[f64]) -> Option<f64> {
    solve_monthly_irr_with(cashflows, &IrrSettings::default())
}

/// Monthly IRR: Newton-Raphson, falling back to bisection
pub fn solve_monthly_irr_with(cashflows: &[f64], settings: &IrrSettings) -> Option<f64> {
    if !is_solvable(cashflows) {
        debug!("cashflows lack a sign change, no IRR");
        return None;
    }

    if let Some(rate) = newton_raphson(cashflows, settings) {
        return Some(rate);
    }

    debug!(
        "newton did not converge, bisecting on [{}, {}]",
        settings.bracket_low, settings.bracket_high
    );
    bisection(cashflows, settings.bracket_low, settings.bracket_high, settings)
}

/// Annualize a monthly rate and deflate it by inflation (decimal).
/// `None` in, or any non-finite rate along the way, gives `None`.
pub fn annualize(monthly_rate: Option<f64>, inflation_rate: f64) -> Option<IrrResult> {
    let monthly_rate = monthly_rate.filter(|r| r.is_finite())?;

    let annual_rate = (1.0 + monthly_rate).powi(12) - 1.0;
    if !annual_rate.is_finite() {
        return None;
    }

    let real_rate = (1.0 + annual_rate) / (1.0 + inflation_rate) - 1.0;
    if !real_rate.is_finite() {
        return None;
    }

    Some(IrrResult {
        monthly_rate,
        annual_nominal_rate_percent: annual_rate * 100.0,
        annual_real_rate_percent: real_rate * 100.0,
    })
}

/// Solve and annualize in one step
pub fn calculate_irr(cashflows: &[f64], inflation_rate: f64) -> Option<IrrResult> {
    annualize(solve_monthly_irr(cashflows), inflation_rate)
}

/// Parse a comma or whitespace separated list of cashflows
pub fn parse_cashflows(text: &str) -> Result<Vec<f64>, PlannerError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| PlannerError::InvalidCashflow(token.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_point(c: f64, p: f64, n: usize) -> Vec<f64> {
        let mut cashflows = vec![0.0; n + 1];
        cashflows[0] = -c;
        cashflows[n] = p;
        cashflows
    }

    #[test]
    fn test_two_point_round_trip() {
        for (c, p, n) in [(1000.0, 1100.0, 12), (50_000.0, 80_000.0, 60), (1.0, 1.0001, 3)] {
            let r = solve_monthly_irr(&two_point(c, p, n)).unwrap();
            assert_relative_eq!(c * (1.0 + r).powi(n as i32), p, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_one_sided_streams_have_no_irr() {
        assert_eq!(solve_monthly_irr(&[-100.0, -50.0, -10.0]), None);
        assert_eq!(solve_monthly_irr(&[100.0, 50.0, 10.0]), None);
        assert_eq!(solve_monthly_irr(&[0.0, 0.0]), None);
        assert_eq!(solve_monthly_irr(&[500.0]), None);
        assert_eq!(solve_monthly_irr(&[]), None);
    }

    #[test]
    fn test_falls_back_to_bisection() {
        // A zero Newton budget forces the bisection phase
        let settings = IrrSettings {
            newton_max_iterations: 0,
            ..IrrSettings::default()
        };
        let cashflows = two_point(1000.0, 1100.0, 12);
        let r = solve_monthly_irr_with(&cashflows, &settings).unwrap();

        assert_relative_eq!(1000.0 * (1.0 + r).powi(12), 1100.0, max_relative = 1e-6);
    }

    #[test]
    fn test_no_bracket_gives_none() {
        let settings = IrrSettings {
            newton_max_iterations: 0,
            bracket_low: 0.5,
            bracket_high: 1.0,
            ..IrrSettings::default()
        };
        assert_eq!(solve_monthly_irr_with(&two_point(1000.0, 1100.0, 12), &settings), None);
    }

    #[test]
    fn test_annualize() {
        let result = annualize(Some(0.01), 0.06).unwrap();
        let annual = 1.01_f64.powi(12) - 1.0;

        assert_eq!(result.monthly_rate, 0.01);
        assert_relative_eq!(result.annual_nominal_rate_percent, annual * 100.0);
        assert_relative_eq!(result.annual_real_rate_percent, ((1.0 + annual) / 1.06 - 1.0) * 100.0);
    }

    #[test]
    fn test_annualize_propagates_none() {
        assert_eq!(annualize(None, 0.06), None);
        assert_eq!(annualize(Some(f64::NAN), 0.06), None);
        assert_eq!(annualize(Some(0.01), -1.0), None);
    }

    #[test]
    fn test_parse_cashflows() {
        assert_eq!(parse_cashflows("-1000, 0,0 1100").unwrap(), vec![-1000.0, 0.0, 0.0, 1100.0]);
        assert!(matches!(
            parse_cashflows("-1000,abc"),
            Err(PlannerError::InvalidCashflow(token)) if token == "abc"
        ));
    }
}
