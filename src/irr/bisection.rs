//! Bisection fallback for the IRR solver

use log::trace;

use super::npv::npv;
use super::IrrSettings;

/// Bisection over `[low, high]` for a periodic rate with zero NPV.
///
/// The bracket must have finite NPVs at both ends that do not share a sign,
/// otherwise there is no guaranteed root and `None` is returned. A non-finite
/// NPV at a midpoint also yields `None`. When the iteration budget runs out
/// the last midpoint is returned.
pub fn bisection(cashflows: &[f64], low: f64, high: f64, settings: &IrrSettings) -> Option<f64> {
    let mut low = low;
    let mut high = high;
    let mut f_low = npv(cashflows, low);
    let f_high = npv(cashflows, high);

    if !f_low.is_finite() || !f_high.is_finite() || f_low * f_high > 0.0 {
        trace!("no sign change on [{}, {}]: npv {} / {}", low, high, f_low, f_high);
        return None;
    }

    for _ in 0..settings.bisection_max_iterations {
        let mid = (low + high) / 2.0;
        let f_mid = npv(cashflows, mid);

        if !f_mid.is_finite() {
            return None;
        }
        if f_mid.abs() < settings.bisection_tolerance {
            return Some(mid);
        }

        if f_low * f_mid <= 0.0 {
            high = mid;
        } else {
            low = mid;
            f_low = f_mid;
        }
    }

    Some((low + high) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_finds_root_in_bracket() {
        let rate = bisection(&[-1000.0, 1100.0], -0.5, 1.0, &IrrSettings::default()).unwrap();
        assert_abs_diff_eq!(rate, 0.10, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_bracket_without_sign_change() {
        assert_eq!(bisection(&[-1000.0, 1100.0], 0.2, 1.0, &IrrSettings::default()), None);
    }

    #[test]
    fn test_rejects_non_finite_endpoint() {
        assert_eq!(bisection(&[-1000.0, 1100.0], -1.0, 1.0, &IrrSettings::default()), None);
    }

    #[test]
    fn test_returns_midpoint_when_budget_exhausted() {
        let settings = IrrSettings {
            bisection_max_iterations: 1,
            ..IrrSettings::default()
        };
        // One halving of [0, 1] keeps [0, 0.5]; the midpoint of that is returned
        let rate = bisection(&[-1000.0, 1100.0], 0.0, 1.0, &settings).unwrap();
        assert_eq!(rate, 0.25);
    }
}
