//! Clamp a raw value into a documented range with a fallback

use serde::{Deserialize, Serialize};

/// A raw numeric value as it arrives from a config file or form field.
///
/// JSON numbers and numeric strings are both accepted; anything that does not
/// parse becomes NaN and is replaced by the fallback when clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    /// Parse to a number, NaN when not numeric
    pub fn parse(&self) -> f64 {
        match self {
            RawNumber::Number(n) => *n,
            RawNumber::Text(s) => parse_text(s),
        }
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

/// Anything that can be read as a (possibly non-finite) number
pub trait NumericInput {
    fn to_number(&self) -> f64;
}

macro_rules! numeric_input_as_cast {
    ($($t:ty),*) => {
        $(
            impl NumericInput for $t {
                fn to_number(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

numeric_input_as_cast!(f64, f32, i32, i64, u8, u32, u64, usize);

impl NumericInput for &str {
    fn to_number(&self) -> f64 {
        parse_text(self)
    }
}

impl NumericInput for String {
    fn to_number(&self) -> f64 {
        parse_text(self)
    }
}

impl NumericInput for RawNumber {
    fn to_number(&self) -> f64 {
        self.parse()
    }
}

impl<T: NumericInput> NumericInput for Option<T> {
    fn to_number(&self) -> f64 {
        self.as_ref().map_or(f64::NAN, NumericInput::to_number)
    }
}

impl NumericInput for &String {
    fn to_number(&self) -> f64 {
        parse_text(self)
    }
}

impl NumericInput for &RawNumber {
    fn to_number(&self) -> f64 {
        self.parse()
    }
}

impl NumericInput for &f64 {
    fn to_number(&self) -> f64 {
        **self
    }
}

fn parse_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Clamp `value` into `[min, max]`, returning `fallback` when it is not a finite number.
///
/// Bounds are applied as `min(max(n, min), max)`, so an inverted range
/// resolves to `max` instead of panicking like [`f64::clamp`].
pub fn clamp_number<T: NumericInput>(value: T, min: f64, max: f64, fallback: f64) -> f64 {
    let n = value.to_number();
    if !n.is_finite() {
        return fallback;
    }
    n.max(min).min(max)
}

/// A documented input range together with its fallback
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampRange {
    pub min: f64,
    pub max: f64,
    pub fallback: f64,
}

impl ClampRange {
    pub const fn new(min: f64, max: f64, fallback: f64) -> Self {
        Self { min, max, fallback }
    }

    /// Apply this range to a raw value
    pub fn apply<T: NumericInput>(&self, value: T) -> f64 {
        let clamped = clamp_number(value, self.min, self.max, self.fallback);
        log::trace!("clamped input to {} within [{}, {}]", clamped, self.min, self.max);
        clamped
    }
}
