use crate::error::ConstructionError;

/// The numeric payload of a constant. Integers are kept exact as long as
/// they fit in an `i64`, everything else is a real number. The distinction
/// only matters for rendering and for folding, numerically `Integer(5)` and
/// `Real(5.0)` are the same value.
#[derive(Debug, Copy, Clone)]
pub enum Value {
    Integer(i64),
    Real(f64),
}

use Value::*;

impl Value {
    pub fn to_f64(self) -> f64 {
        match self {
            Integer(val) => val as f64,
            Real(val) => val,
        }
    }

    pub fn add(self, other: Value) -> Value {
        match (self, other) {
            (Integer(a), Integer(b)) => match a.checked_add(b) {
                Some(sum) => Integer(sum),
                None => Real(a as f64 + b as f64),
            },
            (a, b) => Real(a.to_f64() + b.to_f64()),
        }
    }

    pub fn sub(self, other: Value) -> Value {
        match (self, other) {
            (Integer(a), Integer(b)) => match a.checked_sub(b) {
                Some(diff) => Integer(diff),
                None => Real(a as f64 - b as f64),
            },
            (a, b) => Real(a.to_f64() - b.to_f64()),
        }
    }

    pub fn mul(self, other: Value) -> Value {
        match (self, other) {
            (Integer(a), Integer(b)) => match a.checked_mul(b) {
                Some(prod) => Integer(prod),
                None => Real(a as f64 * b as f64),
            },
            (a, b) => Real(a.to_f64() * b.to_f64()),
        }
    }

    /// True division. The result is always real, and the caller is expected
    /// to have ruled out a zero divisor.
    pub fn div(self, other: Value) -> Value {
        Real(self.to_f64() / other.to_f64())
    }

    /// Raise `self` to the power `exponent`. Zero raised to a negative power
    /// and powers without a real result are errors.
    pub fn pow(self, exponent: Value) -> Result<Value, ConstructionError> {
        if self == 0. && exponent.to_f64() < 0. {
            return Err(ConstructionError::ZeroToNegativePower(exponent.to_f64()));
        }
        if let (Integer(base), Integer(exp)) = (self, exponent) {
            if let Ok(exp) = u32::try_from(exp) {
                if let Some(result) = base.checked_pow(exp) {
                    return Ok(Integer(result));
                }
            }
        }
        let (base, exp) = (self.to_f64(), exponent.to_f64());
        let result = f64::powf(base, exp);
        if result.is_nan() && !base.is_nan() && !exp.is_nan() {
            return Err(ConstructionError::NonRealPower(base, exp));
        }
        return Ok(Real(result));
    }

    pub fn neg(self) -> Value {
        match self {
            Integer(val) => match val.checked_neg() {
                Some(val) => Integer(val),
                None => Real(-(val as f64)),
            },
            Real(val) => Real(-val),
        }
    }

    pub fn abs(self) -> Value {
        match self {
            Integer(val) => match val.checked_abs() {
                Some(val) => Integer(val),
                None => Real(f64::abs(val as f64)),
            },
            Real(val) => Real(f64::abs(val)),
        }
    }

    /// The sign of the value. Zero maps to an integer zero, anything else to
    /// a real `1.0` or `-1.0`.
    pub fn signum(self) -> Value {
        let val = self.to_f64();
        if val == 0. {
            Integer(0)
        } else {
            Real(f64::copysign(1., val))
        }
    }

    /// Natural logarithm, `None` outside the domain.
    pub fn ln(self) -> Option<Value> {
        let val = self.to_f64();
        if val <= 0. {
            None
        } else {
            Some(Real(f64::ln(val)))
        }
    }

    pub fn exp(self) -> Value {
        Real(f64::exp(self.to_f64()))
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.to_f64() == *other
    }
}

impl PartialOrd<f64> for Value {
    fn partial_cmp(&self, other: &f64) -> Option<std::cmp::Ordering> {
        self.to_f64().partial_cmp(other)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Real(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Integer(value)
    }
}
