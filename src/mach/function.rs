use std::f64::consts::PI;

/// Scale of the tangent asymptote window per unit of `|x|`.
const TAN_EPSILON: f64 = 1.384_626_433_832_79e-16;

/// ## Total built-in functions
///
/// None of these panic or produce NaN or infinity from finite input.

pub struct Function {}

impl Function {
    /// Natural logarithm; `0.0` where it is undefined.
    pub fn safe_log(x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else {
            x.ln()
        }
    }

    /// Square root; `0.0` for negative input.
    pub fn safe_sqrt(x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            x.sqrt()
        }
    }

    /// Tangent; `0.0` close to an odd multiple of π/2.
    pub fn safe_tan(x: f64) -> f64 {
        let c = x / PI;
        let d = c - c.floor() - 0.5;
        let e = x.abs().floor() * TAN_EPSILON;
        if d >= -e && d <= e {
            0.0
        } else {
            x.tan()
        }
    }

    /// `-1`, `0` or `1`. Zero and NaN are both `0`.
    pub fn sign(x: f64) -> f64 {
        if x > 0.0 {
            1.0
        } else if x < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    /// Rounds half to even.
    pub fn round(x: f64) -> f64 {
        x.round_ties_even()
    }

    pub fn reciprocal(x: f64) -> f64 {
        if x == 0.0 {
            0.0
        } else {
            1.0 / x
        }
    }
}
