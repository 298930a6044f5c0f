//! Big Number Representation
//!
//! Provides arbitrary precision integers as a sign plus an ordered sequence of
//! 15-bit digit groups, least-significant first.
//!
//! The representation is fixed by the wire format rather than by any host integer
//! type, so it carries exactly what a `LONG` payload carries. Conversions to and
//! from `malachite::Integer` are provided for arithmetic and display.

use std::fmt;

use malachite::Integer;
use thiserror::Error;

/// Number of bits carried by one digit group
pub const DIGIT_BITS: u32 = 15;

/// Radix of the digit-group representation (2^15)
pub const DIGIT_BASE: u32 = 1 << DIGIT_BITS;

/// Largest value a single digit group may hold (2^15 - 1)
pub const DIGIT_MAX: u16 = (DIGIT_BASE - 1) as u16;

/// Sign of a big integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Strictly negative
    Negative,
    /// Exactly zero (no digit groups)
    Zero,
    /// Strictly positive
    Positive,
}

/// Big integer construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BigIntError {
    /// A digit group does not fit in 15 bits
    #[error("digit group {digit} at position {position} exceeds {max}", max = DIGIT_MAX)]
    DigitOutOfRange {
        /// Index of the offending group (least-significant first)
        position: usize,
        /// The group value
        digit: u16,
    },
    /// Sign and digit groups disagree (zero with digits, or non-zero without)
    #[error("sign {sign:?} does not match {count} digit groups")]
    SignMismatch {
        /// The requested sign
        sign: Sign,
        /// Number of digit groups supplied
        count: usize,
    },
    /// The most-significant digit group is zero
    #[error("most-significant digit group is zero (non-canonical)")]
    TrailingZero,
}

/// Arbitrary precision integer in canonical digit-group form
///
/// Invariants, enforced by every constructor:
/// - every digit group is in `[0, 32767]`
/// - the last (most-significant) group is non-zero
/// - `Sign::Zero` if and only if there are no groups
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    digits: Vec<u16>,
}

impl BigInt {
    /// The zero value (no digit groups)
    pub fn zero() -> Self {
        Self {
            sign: Sign::Zero,
            digits: Vec::new(),
        }
    }

    /// Build a big integer from an explicit sign and digit groups
    ///
    /// # Arguments
    /// * `sign` - Sign of the value
    /// * `digits` - 15-bit groups, least-significant first
    ///
    /// # Returns
    /// * `Ok(BigInt)` - The canonical value
    /// * `Err(BigIntError)` - Out-of-range digit, trailing zero group, or sign mismatch
    pub fn new(sign: Sign, digits: Vec<u16>) -> Result<Self, BigIntError> {
        check_digits(&digits)?;
        if digits.last() == Some(&0) {
            return Err(BigIntError::TrailingZero);
        }
        let zero = sign == Sign::Zero;
        if zero != digits.is_empty() {
            return Err(BigIntError::SignMismatch {
                sign,
                count: digits.len(),
            });
        }
        Ok(Self { sign, digits })
    }

    /// Build a big integer from a wire-style sign flag and digit groups, normalizing
    /// away trailing zero groups instead of rejecting them.
    ///
    /// # Returns
    /// * `Ok((BigInt, normalized))` - The canonical value, and whether any trailing
    ///   zero group had to be removed
    /// * `Err(BigIntError)` - A digit group exceeds 15 bits
    pub fn from_digits_lenient(negative: bool, mut digits: Vec<u16>) -> Result<(Self, bool), BigIntError> {
        check_digits(&digits)?;
        let original_len = digits.len();
        while digits.last() == Some(&0) {
            digits.pop();
        }
        let normalized = digits.len() != original_len;
        let sign = if digits.is_empty() {
            Sign::Zero
        } else if negative {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Ok((Self { sign, digits }, normalized))
    }

    /// Convert a 64-bit signed integer
    pub fn from_i64(value: i64) -> Self {
        let sign = match value {
            0 => return Self::zero(),
            v if v < 0 => Sign::Negative,
            _ => Sign::Positive,
        };
        let mut magnitude = value.unsigned_abs();
        let mut digits = Vec::new();
        while magnitude != 0 {
            digits.push((magnitude & u64::from(DIGIT_MAX)) as u16);
            magnitude >>= DIGIT_BITS;
        }
        Self { sign, digits }
    }

    /// Convert to a 64-bit signed integer
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        let mut magnitude: u64 = 0;
        for &digit in self.digits.iter().rev() {
            if magnitude.leading_zeros() < DIGIT_BITS {
                return None;
            }
            magnitude = (magnitude << DIGIT_BITS) | u64::from(digit);
        }
        match self.sign {
            Sign::Zero => Some(0),
            Sign::Positive => i64::try_from(magnitude).ok(),
            Sign::Negative => {
                if magnitude == i64::MIN.unsigned_abs() {
                    Some(i64::MIN)
                } else {
                    i64::try_from(magnitude).ok().map(|m| -m)
                }
            }
        }
    }

    /// Convert a malachite Integer by repeated division by the digit base
    pub fn from_integer(value: &Integer) -> Self {
        let zero = Integer::from(0);
        if *value == zero {
            return Self::zero();
        }
        let is_negative = *value < zero;
        let mut v = if is_negative { -value.clone() } else { value.clone() };
        let base = Integer::from(DIGIT_BASE);

        let mut digits = Vec::new();
        while v > zero {
            let remainder = &v % &base;
            // Remainder is always < 2^15
            let group = u64::try_from(&remainder).unwrap_or(0);
            digits.push(group as u16);
            v = &v / &base;
        }

        Self {
            sign: if is_negative { Sign::Negative } else { Sign::Positive },
            digits,
        }
    }

    /// Convert to a malachite Integer
    pub fn to_integer(&self) -> Integer {
        let base = Integer::from(DIGIT_BASE);
        let mut value = Integer::from(0);
        for &digit in self.digits.iter().rev() {
            value = value * &base + Integer::from(digit);
        }
        if self.sign == Sign::Negative {
            -value
        } else {
            value
        }
    }

    /// Sign of the value
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Digit groups, least-significant first
    pub fn digits(&self) -> &[u16] {
        &self.digits
    }

    /// Number of digit groups
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }
}

fn check_digits(digits: &[u16]) -> Result<(), BigIntError> {
    match digits.iter().position(|&d| d > DIGIT_MAX) {
        Some(position) => Err(BigIntError::DigitOutOfRange {
            position,
            digit: digits[position],
        }),
        None => Ok(()),
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::from_i64(i64::from(value))
    }
}

impl From<&Integer> for BigInt {
    fn from(value: &Integer) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_integer())
    }
}
