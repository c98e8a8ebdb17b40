use rand::Rng;

/// ## Stack operators
///
/// Binary and ternary operators over `f64`. Booleans are `0.0` and `1.0`;
/// any non-zero operand counts as true.

pub struct Operation {}

impl Operation {
    pub fn divide(lhs: f64, rhs: f64) -> f64 {
        if rhs == 0.0 {
            0.0
        } else {
            lhs / rhs
        }
    }

    pub fn quotient(lhs: f64, rhs: f64) -> f64 {
        if rhs == 0.0 {
            0.0
        } else {
            (lhs / rhs).floor()
        }
    }

    /// Floored modulo: the result takes the sign of `rhs`.
    pub fn modulo(lhs: f64, rhs: f64) -> f64 {
        if rhs == 0.0 {
            0.0
        } else {
            lhs - rhs * (lhs / rhs).floor()
        }
    }

    /// Small integer exponents are multiplied out. A negative exponent
    /// gives `0.0`, not a reciprocal.
    pub fn power(base: f64, exponent: f64) -> f64 {
        let a = base;
        if exponent == 2.0 {
            a * a
        } else if exponent == 3.0 {
            a * a * a
        } else if exponent == 4.0 {
            let t = a * a;
            t * t
        } else if exponent == 5.0 {
            let t = a * a;
            t * t * a
        } else if exponent == 6.0 {
            let t = a * a * a;
            t * t
        } else if exponent == 7.0 {
            let t = a * a * a;
            t * t * a
        } else if exponent == 8.0 {
            let t = a * a;
            let t = t * t;
            t * t
        } else if exponent == 0.0 {
            1.0
        } else if exponent < 0.0 {
            0.0
        } else {
            a.powf(exponent)
        }
    }

    pub fn fused_multiply_add(a: f64, b: f64, c: f64) -> f64 {
        a * b + c
    }

    pub fn min(lhs: f64, rhs: f64) -> f64 {
        if lhs < rhs {
            lhs
        } else {
            rhs
        }
    }

    pub fn max(lhs: f64, rhs: f64) -> f64 {
        if lhs > rhs {
            lhs
        } else {
            rhs
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
        min + rng.gen::<f64>() * (max - min)
    }

    /// Uniform integer in `[min, max)`; `min` when the range is empty.
    pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
        let min = min as i32;
        let max = max as i32;
        if max <= min {
            min as f64
        } else {
            rng.gen_range(min..max) as f64
        }
    }

    pub fn conditional(condition: f64, when_true: f64, when_false: f64) -> f64 {
        if condition != 0.0 {
            when_true
        } else {
            when_false
        }
    }

    pub fn equal(lhs: f64, rhs: f64) -> f64 {
        Operation::truth(lhs == rhs)
    }

    pub fn not_equal(lhs: f64, rhs: f64) -> f64 {
        Operation::truth(lhs != rhs)
    }

    pub fn less(lhs: f64, rhs: f64) -> f64 {
        Operation::truth(lhs < rhs)
    }

    pub fn greater(lhs: f64, rhs: f64) -> f64 {
        Operation::truth(lhs > rhs)
    }

    pub fn less_equal(lhs: f64, rhs: f64) -> f64 {
        Operation::truth(lhs <= rhs)
    }

    pub fn greater_equal(lhs: f64, rhs: f64) -> f64 {
        Operation::truth(lhs >= rhs)
    }

    pub fn not(val: f64) -> f64 {
        Operation::truth(val == 0.0)
    }

    pub fn and(lhs: f64, rhs: f64) -> f64 {
        Operation::truth(lhs != 0.0 && rhs != 0.0)
    }

    pub fn or(lhs: f64, rhs: f64) -> f64 {
        Operation::truth(lhs != 0.0 || rhs != 0.0)
    }

    pub fn nand(lhs: f64, rhs: f64) -> f64 {
        Operation::not(Operation::and(lhs, rhs))
    }

    pub fn nor(lhs: f64, rhs: f64) -> f64 {
        Operation::not(Operation::or(lhs, rhs))
    }

    pub fn xor(lhs: f64, rhs: f64) -> f64 {
        Operation::truth((lhs != 0.0) != (rhs != 0.0))
    }

    pub fn truth(b: bool) -> f64 {
        if b {
            1.0
        } else {
            0.0
        }
    }
}
