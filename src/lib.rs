//! Conversion of decimal numbers of any length to and from base58.
//!
//! ```
//! use base58_numeric::base58::{Decoder, Encoder, BITCOIN};
//!
//! let encoder = Encoder::new(&BITCOIN);
//! let encoded = encoder.encode("0079228162514264337593543950336").unwrap();
//! assert_eq!(encoded, "115qCHTcgbQwpvYZQ9d");
//! assert_eq!(Decoder::new(&BITCOIN).decode(&encoded).unwrap(), "0079228162514264337593543950336");
//! ```

pub mod base58;
pub mod base_common;
pub mod chronometer;
pub mod cli;
pub mod configuration;
pub mod error;
pub mod logger;

pub use base58::{alphabet_by_name, decode, decode_u64, encode, encode_u64, Alphabet, Decoder, Encoder};
pub use error::{ConfigError, Error};
