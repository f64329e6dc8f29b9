use super::{limbs::Limbs, Alphabet, FLICKR, RADIX};
use std::{error, fmt};

/// Symbol strings shorter than this always fit in a `u64` (58^10 < u64::MAX < 58^11).
const FIXED_WIDTH_SYMBOLS: usize = 11;

/// A limb holds 17 decimal digits, which is at least nine symbols' worth (log10(58) < 1.77).
const SYMBOLS_PER_LIMB: usize = 9;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidSymbol { symbol: u8, input: Vec<u8> },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSymbol { symbol, input } => write!(
                f,
                "invalid character '{}' in decoding a base58 string \"{}\"",
                *symbol as char,
                String::from_utf8_lossy(input)
            ),
        }
    }
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    fn value(&self, symbol: u8, input: &[u8]) -> Result<u8, Error> {
        self.alphabet.value(symbol).ok_or_else(|| Error::InvalidSymbol {
            symbol,
            input: input.to_vec(),
        })
    }

    /// Decodes symbols into a decimal number.
    ///
    /// Leading zero-symbols become leading `'0'` digits. The last symbol is never counted as
    /// part of that prefix: it is always converted, so `k` zero-symbols decode to `k` zeros.
    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<String, Error> {
        let input = input.as_ref();
        let Some((_, head)) = input.split_last() else {
            return Ok(String::new());
        };
        let zero = self.alphabet.zero();
        let zeros = head.iter().take_while(|&&symbol| symbol == zero).count();
        let symbols = &input[zeros..];

        let mut output = "0".repeat(zeros);
        if symbols.len() < FIXED_WIDTH_SYMBOLS {
            let n = self.fold(symbols, input)?;
            output.push_str(&n.to_string());
            return Ok(output);
        }

        let mut limbs = Limbs::with_capacity(symbols.len() / SYMBOLS_PER_LIMB + 1);
        for &symbol in symbols {
            limbs.mul_add_radix(self.value(symbol, input)?);
        }
        output.push_str(&limbs.to_string());
        Ok(output)
    }

    /// Decodes symbols into a native integer.
    ///
    /// Values above `u64::MAX` wrap around modulo 2^64 instead of failing. Eleven symbols can
    /// exceed the range, ten cannot; callers that must detect overflow have to check the length
    /// (or compare against `encode_u64(u64::MAX)`) themselves.
    pub fn decode_u64(&self, input: impl AsRef<[u8]>) -> Result<u64, Error> {
        let input = input.as_ref();
        self.fold(input, input)
    }

    fn fold(&self, symbols: &[u8], input: &[u8]) -> Result<u64, Error> {
        symbols.iter().try_fold(0u64, |n, &symbol| {
            Ok(n.wrapping_mul(RADIX).wrapping_add(u64::from(self.value(symbol, input)?)))
        })
    }

    pub fn alphabet(&self) -> &'a Alphabet<58> {
        self.alphabet
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&FLICKR);

pub fn decode(input: impl AsRef<[u8]>) -> Result<String, Error> {
    Decoder::default().decode(input)
}

pub fn decode_u64(input: impl AsRef<[u8]>) -> Result<u64, Error> {
    Decoder::default().decode_u64(input)
}
