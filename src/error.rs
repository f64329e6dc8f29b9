use crate::{
    base58::{decode, encode},
    base_common::alphabet,
};
use std::{error, fmt, io};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    Alphabet(alphabet::Error),
    UnknownAlphabet { name: String },
    InvalidVariable { key: String, value: String },
}

impl error::Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alphabet(error) => write!(f, "invalid alphabet: {}", error),
            Self::UnknownAlphabet { name } => write!(f, "unknown encoding: {}", name),
            Self::InvalidVariable { key, value } => write!(f, "Invalid {} {}", key, value),
        }
    }
}

impl From<alphabet::Error> for ConfigError {
    fn from(error: alphabet::Error) -> Self {
        Self::Alphabet(error)
    }
}

/// Any failure surfaced by the command-line tool.
#[derive(Debug)]
pub enum Error {
    Encode(encode::Error),
    Decode(decode::Error),
    Config(ConfigError),
    Io { context: String, source: io::Error },
}

impl Error {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Encode(error) => Some(error),
            Self::Decode(error) => Some(error),
            Self::Config(error) => Some(error),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(error) => write!(f, "{}", error),
            Self::Decode(error) => write!(f, "{}", error),
            Self::Config(error) => write!(f, "{}", error),
            Self::Io { context, source } => write!(f, "{}: {}", context, source),
        }
    }
}

impl From<encode::Error> for Error {
    fn from(error: encode::Error) -> Self {
        Self::Encode(error)
    }
}

impl From<decode::Error> for Error {
    fn from(error: decode::Error) -> Self {
        Self::Decode(error)
    }
}

impl From<ConfigError> for Error {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}
