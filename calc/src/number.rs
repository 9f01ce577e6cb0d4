use std::{fmt, ops};

/// Values computed by the calculator. Integer arithmetic stays exact until
/// it overflows, anything touching a float becomes a float.
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// True division, always a float. None when dividing by zero.
    pub fn checked_div(self, rhs: Number) -> Option<Number> {
        let divisor = rhs.as_f64();
        if divisor == 0.0 {
            return None;
        }
        Some(Number::Float(self.as_f64() / divisor))
    }

    // Apply an integer op, falling back to floats on overflow or mixed input
    fn combine(
        self,
        rhs: Number,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64) -> Number
    {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match int_op(a, b) {
                Some(n) => Number::Int(n),
                None => Number::Float(float_op(a as f64, b as f64)),
            },
            (a, b) => Number::Float(float_op(a.as_f64(), b.as_f64())),
        }
    }
}

impl ops::Add for Number {
    type Output = Number;
    fn add(self, rhs: Number) -> Number {
        self.combine(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl ops::Sub for Number {
    type Output = Number;
    fn sub(self, rhs: Number) -> Number {
        self.combine(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl ops::Mul for Number {
    type Output = Number;
    fn mul(self, rhs: Number) -> Number {
        self.combine(rhs, i64::checked_mul, |a, b| a * b)
    }
}

// Ints compare exactly between themselves, everything else as floats
impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self { Number::Int(n) }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self { Number::Float(n) }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            // keep a trailing .0 so floats don't read as ints
            Number::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 =>
                write!(f, "{:.1}", x),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Number;

    #[test]
    fn int_arith_is_exact() {
        assert_eq!(Number::Int(80) * Number::Int(8) + Number::Int(1), Number::Int(641));
        assert!((Number::Int(7) - Number::Int(9)).is_int());
        assert_eq!(Number::Int(7) - Number::Int(9), Number::Int(-2));
    }

    #[test]
    fn mixed_promotes() {
        let n = Number::Int(1) + Number::Float(2.4);
        assert!(!n.is_int());
        assert!((n.as_f64() - 3.4).abs() < 1e-12);
    }

    #[test]
    fn overflow_promotes() {
        let n = Number::Int(i64::MAX) + Number::Int(1);
        assert!(!n.is_int());
        assert_eq!(n.as_f64(), i64::MAX as f64 + 1.0);
        assert!(!(Number::Int(i64::MIN) * Number::Int(-1)).is_int());
    }

    #[test]
    fn division() {
        assert_eq!(Number::Int(4).checked_div(Number::Int(2)), Some(Number::Float(2.0)));
        assert!(!Number::Int(4).checked_div(Number::Int(2)).unwrap().is_int());
        assert_eq!(Number::Int(1).checked_div(Number::Int(4)), Some(Number::Float(0.25)));
        assert_eq!(Number::Int(1).checked_div(Number::Int(0)), None);
        assert_eq!(Number::Float(1.0).checked_div(Number::Float(0.0)), None);
    }

    #[test]
    fn display() {
        assert_eq!(Number::Int(641).to_string(), "641");
        assert_eq!(Number::Float(2.0).to_string(), "2.0");
        assert_eq!(Number::Float(-0.25).to_string(), "-0.25");
        assert_eq!(Number::Float(1e20).to_string(), "100000000000000000000");
    }
}
