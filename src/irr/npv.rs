//! Net present value of a periodic cashflow stream and its rate derivative

/// NPV at a periodic rate: `sum(cf[t] / (1 + rate)^t)`.
///
/// Returns `+inf` when `1 + rate <= 0`, where discounting is undefined.
pub fn npv(cashflows: &[f64], rate: f64) -> f64 {
    let base = 1.0 + rate;
    if base <= 0.0 {
        return f64::INFINITY;
    }

    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / base.powi(t as i32))
        .sum()
}

/// Derivative of [`npv`] with respect to the rate: `sum(-t * cf[t] / (1 + rate)^(t+1))`
pub fn npv_derivative(cashflows: &[f64], rate: f64) -> f64 {
    let base = 1.0 + rate;
    if base <= 0.0 {
        return f64::INFINITY;
    }

    cashflows
        .iter()
        .enumerate()
        .skip(1)
        .map(|(t, &cf)| -(t as f64) * cf / base.powi(t as i32 + 1))
        .sum()
}
