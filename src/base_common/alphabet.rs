use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
    InvalidLength { expected: usize, length: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#04x} at index {}", character, index),
            Self::InvalidLength { expected, length } => write!(f, "Expecting {} characters but got {}", expected, length),
        }
    }
}

/// Bijection between `N` ASCII symbols and the digit values `0..N`.
///
/// The reverse table is filled from the forward table at construction, so the two always agree.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Alphabet<const N: usize> {
    symbols: [u8; N],
    values: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut symbols = [0u8; N];
        let mut values: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < N {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { character, index });
            }
            if let Some(first) = values[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            symbols[index] = character;
            values[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { symbols, values })
    }

    /// Builds an alphabet from a runtime-supplied symbol list, checking its length first.
    pub fn from_slice(characters: &[u8]) -> Result<Self, Error> {
        let characters: &[u8; N] = characters.try_into().map_err(|_| Error::InvalidLength {
            expected: N,
            length: characters.len(),
        })?;
        Self::new(characters)
    }

    /// Symbol for `value`. Panics if `value >= N`.
    pub fn symbol(&self, value: usize) -> u8 {
        self.symbols[value]
    }

    /// Digit value of `symbol`, or `None` when the byte is not part of the alphabet.
    pub fn value(&self, symbol: u8) -> Option<u8> {
        self.values.get(symbol as usize).copied().flatten()
    }

    pub fn zero(&self) -> u8 {
        self.symbols[0]
    }

    pub fn symbols(&self) -> &[u8; N] {
        &self.symbols
    }

    pub const fn len(&self) -> usize {
        N
    }
}
