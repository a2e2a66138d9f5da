use crate::error;
use crate::lang::{ast::Operator, Error};

type Result<T> = std::result::Result<T, Error>;

/// ## Integer arithmetic
///
/// Sums, differences and products wrap on overflow like the 32-bit machine
/// integers they model.
pub struct Operation {}

impl Operation {
    pub fn binary(op: Operator, lhs: i32, rhs: i32) -> Result<i32> {
        use Operator::*;
        match op {
            Plus => Operation::sum(lhs, rhs),
            Minus => Operation::subtract(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
            Modulus => Operation::modulus(lhs, rhs),
            Power => Operation::power(lhs, rhs),
        }
    }

    pub fn sum(lhs: i32, rhs: i32) -> Result<i32> {
        Ok(lhs.wrapping_add(rhs))
    }

    pub fn subtract(lhs: i32, rhs: i32) -> Result<i32> {
        Ok(lhs.wrapping_sub(rhs))
    }

    pub fn multiply(lhs: i32, rhs: i32) -> Result<i32> {
        Ok(lhs.wrapping_mul(rhs))
    }

    /// Truncates toward zero.
    pub fn divide(lhs: i32, rhs: i32) -> Result<i32> {
        if rhs == 0 {
            return Err(error!(DivideByZero; "DIVIDED BY ZERO"));
        }
        Ok(lhs.wrapping_div(rhs))
    }

    /// A negative divisor is always added once to the remainder, so
    /// `7 MOD -3` is -2 and `6 MOD -3` is -3. With a positive divisor a
    /// negative remainder is lifted: `-7 MOD 3` is 2.
    pub fn modulus(lhs: i32, rhs: i32) -> Result<i32> {
        if rhs == 0 {
            return Err(error!(DivideByZero; "MOD BY ZERO"));
        }
        let rem = lhs.wrapping_rem(rhs);
        if rhs < 0 || rem < 0 {
            Ok(rem.wrapping_add(rhs))
        } else {
            Ok(rem)
        }
    }

    /// Computed in floating point and narrowed back. Results beyond the
    /// integer range saturate and large exponents lose precision.
    pub fn power(lhs: i32, rhs: i32) -> Result<i32> {
        Ok(f64::from(lhs).powf(f64::from(rhs)) as i32)
    }
}
