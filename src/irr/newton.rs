//! Newton-Raphson phase of the IRR solver

use log::trace;

use super::npv::{npv, npv_derivative};
use super::IrrSettings;

/// Newton-Raphson search for a periodic rate with zero NPV.
///
/// Returns `None` when the phase gives up: a non-finite NPV, derivative or
/// iterate, a near-zero derivative, or no convergence within the iteration
/// budget. Iterates are floored at `settings.rate_floor` between steps.
pub fn newton_raphson(cashflows: &[f64], settings: &IrrSettings) -> Option<f64> {
    let mut rate = settings.initial_guess;

    for iteration in 0..settings.newton_max_iterations {
        let f = npv(cashflows, rate);
        let df = npv_derivative(cashflows, rate);

        if !f.is_finite() || !df.is_finite() || df.abs() < settings.min_derivative {
            trace!("newton stalled at iteration {} (rate {}, npv {}, dnpv {})", iteration, rate, f, df);
            return None;
        }

        let next = rate - f / df;
        if !next.is_finite() {
            return None;
        }

        if (next - rate).abs() < settings.newton_tolerance {
            trace!("newton converged to {} after {} iterations", next, iteration + 1);
            return Some(next);
        }

        rate = next.max(settings.rate_floor);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_converges_on_simple_stream() {
        // 1000 out, 1100 back one period later
        let rate = newton_raphson(&[-1000.0, 1100.0], &IrrSettings::default()).unwrap();
        assert_relative_eq!(rate, 0.10, epsilon = 1e-10);
    }

    #[test]
    fn test_gives_up_on_flat_npv() {
        // All-zero stream has zero derivative everywhere
        assert_eq!(newton_raphson(&[0.0, 0.0, 0.0], &IrrSettings::default()), None);
    }

    #[test]
    fn test_respects_iteration_budget() {
        let settings = IrrSettings {
            newton_max_iterations: 0,
            ..IrrSettings::default()
        };
        assert_eq!(newton_raphson(&[-1000.0, 1100.0], &settings), None);
    }
}
