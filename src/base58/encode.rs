use super::{limbs::Limbs, Alphabet, FLICKR, RADIX};
use std::{error, fmt};

/// Decimal numbers shorter than this always fit in a `u64` (10^19 < u64::MAX < 10^20).
const FIXED_WIDTH_DIGITS: usize = 20;

/// Maximum number of symbols needed for a `u64`.
const U64_SYMBOLS: usize = 11;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A byte outside `'0'..='9'` in `segment`, the bytes that were being parsed.
    InvalidDigit { segment: Vec<u8> },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDigit { segment } => write!(
                f,
                "expecting a non-negative number but got {:?}",
                String::from_utf8_lossy(segment)
            ),
        }
    }
}

fn parse_u64(digits: &[u8]) -> Result<u64, Error> {
    digits.iter().try_fold(0u64, |n, &digit| match digit {
        b'0'..=b'9' => Ok(n * 10 + u64::from(digit - b'0')),
        _ => Err(Error::InvalidDigit { segment: digits.to_vec() }),
    })
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    /// Encodes a decimal number given as ASCII digits.
    ///
    /// Every leading `'0'` becomes one zero-symbol, so `decode` restores the input exactly.
    /// Up to 19 significant digits are converted through a `u64`; longer numbers go through
    /// base 10^17 limbs.
    pub fn encode(&self, input: impl AsRef<[u8]>) -> Result<String, Error> {
        let input = input.as_ref();
        let zeros = input.iter().take_while(|&&digit| digit == b'0').count();
        let digits = &input[zeros..];

        let mut output = String::with_capacity(input.len());
        output.extend(std::iter::repeat(self.alphabet.zero() as char).take(zeros));
        if digits.is_empty() {
            return Ok(output);
        }

        if digits.len() < FIXED_WIDTH_DIGITS {
            self.push_u64(&mut output, parse_u64(digits)?);
            return Ok(output);
        }

        let mut limbs = Limbs::from_decimal(digits).ok_or_else(|| Error::InvalidDigit { segment: input.to_vec() })?;
        // Digits come out least-significant first.
        let mut values = Vec::with_capacity(digits.len());
        while !limbs.is_zero() {
            values.push(limbs.div_rem_radix());
        }
        output.extend(values.iter().rev().map(|&value| self.alphabet.symbol(value as usize) as char));
        Ok(output)
    }

    /// Encodes a native integer. Zero encodes to a single zero-symbol.
    pub fn encode_u64(&self, n: u64) -> String {
        let mut output = String::with_capacity(U64_SYMBOLS);
        self.push_u64(&mut output, n);
        output
    }

    fn push_u64(&self, output: &mut String, mut n: u64) {
        let mut values = [0u8; U64_SYMBOLS];
        let mut len = 0;
        loop {
            values[len] = (n % RADIX) as u8;
            len += 1;
            n /= RADIX;
            if n == 0 {
                break;
            }
        }
        output.extend(values[..len].iter().rev().map(|&value| self.alphabet.symbol(value as usize) as char));
    }

    pub fn alphabet(&self) -> &'a Alphabet<58> {
        self.alphabet
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&FLICKR);

pub fn encode(input: impl AsRef<[u8]>) -> Result<String, Error> {
    Encoder::default().encode(input)
}

pub fn encode_u64(n: u64) -> String {
    Encoder::default().encode_u64(n)
}

#[cfg(test)]
mod tests {
    use super::{Encoder, Error};
    use crate::base58::{BITCOIN, NAMES};
    use rand::Rng;

    #[test]
    fn encode_u64() {
        assert_eq!(super::encode_u64(0), "1");
        assert_eq!(super::encode_u64(57), "Z");
        assert_eq!(super::encode_u64(58), "21");
        assert_eq!(super::encode_u64(430804206899405823), "ZZZZZZZZZZ");
        assert_eq!(super::encode_u64(u64::MAX), "JPwcyDCgEup");
        assert_eq!(super::encode_u64(u64::MAX).len(), 11);
    }

    #[test]
    fn encode_u64_matches_encode() {
        let mut rng = rand::thread_rng();
        for name in NAMES {
            let encoder = Encoder::new(crate::base58::alphabet_by_name(name).unwrap());
            for i in 0..100u32 {
                let n = rng.gen::<u64>() % 10u64.pow(i / 5);
                assert_eq!(encoder.encode_u64(n), encoder.encode(n.to_string()).unwrap());
            }
            assert_eq!(encoder.encode_u64(u64::MAX), encoder.encode(u64::MAX.to_string()).unwrap());
        }
    }

    #[test]
    fn fixed_width_boundary() {
        // 19 digits stay on the u64 path, 20 digits take the limb path
        assert_eq!(super::encode("9999999999999999999"), Ok("pdjvYZfL3PR".to_string()));
        assert_eq!(super::encode("10000000000000000000"), Ok("pdjvYZfL3PS".to_string()));
        assert_eq!(super::encode("18446744073709551615"), Ok("JPwcyDCgEup".to_string()));
        assert_eq!(super::encode("18446744073709551616"), Ok("JPwcyDCgEuq".to_string()));
        assert_eq!(super::encode("000000000000000000001"), Ok(format!("{}2", "1".repeat(20))));
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(super::encode(""), Ok(String::new()));
        assert_eq!(super::encode("0"), Ok("1".to_string()));
        assert_eq!(super::encode("0".repeat(40)), Ok("1".repeat(40)));
        assert_eq!(Encoder::new(&BITCOIN).encode("0032"), Ok("11Z".to_string()));
    }

    #[test]
    fn invalid_digit() {
        assert_eq!(
            super::encode("foo"),
            Err(Error::InvalidDigit { segment: b"foo".to_vec() })
        );
        assert_eq!(super::encode("-5"), Err(Error::InvalidDigit { segment: b"-5".to_vec() }));
        assert_eq!(
            super::encode("-100000000000000000000"),
            Err(Error::InvalidDigit {
                segment: b"-100000000000000000000".to_vec()
            })
        );
        // the fixed-width path reports the digits after the zero prefix
        assert_eq!(super::encode("007x"), Err(Error::InvalidDigit { segment: b"7x".to_vec() }));
        // the limb path reports the whole input
        assert_eq!(
            super::encode("0012345678901234567890123x"),
            Err(Error::InvalidDigit {
                segment: b"0012345678901234567890123x".to_vec()
            })
        );
        assert_eq!(
            super::encode("foo").unwrap_err().to_string(),
            r#"expecting a non-negative number but got "foo""#
        );
    }
}
