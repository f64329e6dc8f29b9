//! Scratch big number in base 10^17 used by the arbitrary-precision paths.
//!
//! Only the two operations the codec needs are provided: dividing by the radix and
//! multiplying by the radix while adding a digit. `RADIX * LIMB_BASE` stays below `u64::MAX`,
//! so a single limb plus its carry never overflows.

use super::RADIX;
use std::fmt;

pub const LIMB_DIGITS: usize = 17;
pub const LIMB_BASE: u64 = 100_000_000_000_000_000;

/// Limbs are stored least-significant first; the most-significant limb is never zero.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Limbs {
    limbs: Vec<u64>,
}

fn parse_chunk(chunk: &[u8]) -> Option<u64> {
    chunk.iter().try_fold(0u64, |limb, &digit| match digit {
        b'0'..=b'9' => Some(limb * 10 + u64::from(digit - b'0')),
        _ => None,
    })
}

impl Limbs {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            limbs: Vec::with_capacity(capacity),
        }
    }

    /// Splits `digits` into 17-digit chunks aligned to the least-significant end.
    /// Returns `None` if any byte is not an ASCII digit.
    pub fn from_decimal(digits: &[u8]) -> Option<Self> {
        let mut limbs = Vec::with_capacity(digits.len() / LIMB_DIGITS + 1);
        for chunk in digits.rchunks(LIMB_DIGITS) {
            limbs.push(parse_chunk(chunk)?);
        }
        let mut limbs = Self { limbs };
        limbs.trim();
        Some(limbs)
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    fn trim(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    /// Divides in place by the radix, sweeping from the most-significant limb, and returns the remainder.
    pub fn div_rem_radix(&mut self) -> u8 {
        let mut remainder = 0;
        for limb in self.limbs.iter_mut().rev() {
            let value = remainder * LIMB_BASE + *limb;
            *limb = value / RADIX;
            remainder = value % RADIX;
        }
        self.trim();
        remainder as u8
    }

    /// Computes `self * RADIX + digit` in place.
    pub fn mul_add_radix(&mut self, digit: u8) {
        let mut carry = u64::from(digit);
        for limb in &mut self.limbs {
            let value = *limb * RADIX + carry;
            if value < LIMB_BASE {
                *limb = value;
                carry = 0;
            } else {
                *limb = value % LIMB_BASE;
                carry = value / LIMB_BASE;
            }
        }
        if carry > 0 {
            self.limbs.push(carry);
        }
    }
}

impl fmt::Display for Limbs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.limbs.split_last() {
            None => write!(f, "0"),
            Some((most_significant, rest)) => {
                write!(f, "{}", most_significant)?;
                for limb in rest.iter().rev() {
                    write!(f, "{:017}", limb)?;
                }
                Ok(())
            }
        }
    }
}
