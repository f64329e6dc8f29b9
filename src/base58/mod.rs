pub mod decode;
pub mod encode;
mod limbs;

pub use crate::base_common::Alphabet;
use crate::error::ConfigError;

pub use decode::{decode, decode_u64, Decoder};
pub use encode::{encode, encode_u64, Encoder};

pub const RADIX: u64 = 58;

/// Alphabet of Flickr short URLs. Used by the module-level functions.
pub const FLICKR: Alphabet<58> = match Alphabet::new(b"123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

/// Alphabet of Ripple addresses.
pub const RIPPLE: Alphabet<58> = match Alphabet::new(b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

/// Alphabet of Bitcoin addresses.
pub const BITCOIN: Alphabet<58> = match Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const NAMES: [&str; 3] = ["flickr", "ripple", "bitcoin"];

pub fn alphabet_by_name(name: &str) -> Result<&'static Alphabet<58>, ConfigError> {
    match name {
        "flickr" => Ok(&FLICKR),
        "ripple" => Ok(&RIPPLE),
        "bitcoin" => Ok(&BITCOIN),
        _ => Err(ConfigError::UnknownAlphabet { name: name.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::{alphabet_by_name, Decoder, Encoder, BITCOIN, FLICKR, NAMES, RIPPLE};
    use crate::error::ConfigError;

    // (decimal, flickr, ripple, bitcoin)
    const VECTORS: &[(&str, &str, &str, &str)] = &[
        ("", "", "", ""),
        ("0", "1", "r", "1"),
        ("32", "y", "Z", "Z"),
        ("64", "27", "pf", "27"),
        ("000", "111", "rrr", "111"),
        ("512", "9Q", "9q", "9q"),
        ("1024", "iE", "JC", "Jf"),
        ("16777216", "2tZhm", "p7zHM", "2UzHM"),
        ("00000000000", "11111111111", "rrrrrrrrrrr", "11111111111"),
        ("00068719476736", "1112NGvhhq", "rrrpo6WHHR", "1112ohWHHR"),
        ("430804206899405823", "ZZZZZZZZZZ", "zzzzzzzzzz", "zzzzzzzzzz"),
        ("430804206899405824", "21111111111", "prrrrrrrrrr", "21111111111"),
        ("9999999999999999999", "pdjvYZfL3PR", "QDKWyzEmsFi", "QDKWyzFm3pr"),
        ("10000000000000000000", "pdjvYZfL3PS", "QDKWyzEmsF1", "QDKWyzFm3ps"),
        ("18446744073709551615", "JPwcyDCgEup", "jFXUZedGCVQ", "jpXCZedGfVQ"),
        ("18446744073709551616", "JPwcyDCgEuq", "jFXUZedGCVR", "jpXCZedGfVR"),
        ("00000000000000000000", "11111111111111111111", "rrrrrrrrrrrrrrrrrrrr", "11111111111111111111"),
        ("00000000000000000001", "11111111111111111112", "rrrrrrrrrrrrrrrrrrrp", "11111111111111111112"),
        ("79228162514264337593543950336", "5QchsBFApWPVxyp9C", "nqUHTcgbQAFvYZQ9d", "5qCHTcgbQwpvYZQ9d"),
        ("00000000018446744073709551616", "111111111JPwcyDCgEuq", "rrrrrrrrrjFXUZedGCVR", "111111111jpXCZedGfVR"),
    ];

    #[test]
    fn encode() {
        for &(decimal, flickr, ripple, bitcoin) in VECTORS {
            assert_eq!(Encoder::new(&FLICKR).encode(decimal).unwrap(), flickr);
            assert_eq!(Encoder::new(&RIPPLE).encode(decimal).unwrap(), ripple);
            assert_eq!(Encoder::new(&BITCOIN).encode(decimal).unwrap(), bitcoin);
        }
    }

    #[test]
    fn decode() {
        for &(decimal, flickr, ripple, bitcoin) in VECTORS {
            assert_eq!(Decoder::new(&FLICKR).decode(flickr).unwrap(), decimal);
            assert_eq!(Decoder::new(&RIPPLE).decode(ripple).unwrap(), decimal);
            assert_eq!(Decoder::new(&BITCOIN).decode(bitcoin).unwrap(), decimal);
        }
    }

    #[test]
    fn module_functions_use_flickr() {
        assert_eq!(super::encode("79228162514264337593543950336").unwrap(), "5QchsBFApWPVxyp9C");
        assert_eq!(super::decode("5QchsBFApWPVxyp9C").unwrap(), "79228162514264337593543950336");
        assert_eq!(super::encode_u64(u64::MAX), "JPwcyDCgEup");
        assert_eq!(super::decode_u64("JPwcyDCgEup").unwrap(), u64::MAX);
    }

    #[test]
    fn presets_are_bijections() {
        for name in NAMES {
            let alphabet = alphabet_by_name(name).unwrap();
            for value in 0..58 {
                assert_eq!(alphabet.value(alphabet.symbol(value)), Some(value as u8));
            }
            let mut symbols = alphabet.symbols().to_vec();
            symbols.sort_unstable();
            symbols.dedup();
            assert_eq!(symbols.len(), 58);
        }
    }

    #[test]
    fn alphabet_by_name_rejects_unknown_names() {
        assert_eq!(alphabet_by_name("bitcoin").unwrap(), &BITCOIN);
        assert_eq!(
            alphabet_by_name("base64"),
            Err(ConfigError::UnknownAlphabet {
                name: "base64".to_string()
            })
        );
        assert_eq!(
            alphabet_by_name("Flickr").unwrap_err().to_string(),
            "unknown encoding: Flickr"
        );
    }

    #[test]
    fn long_round_trip() {
        let digits: String = (0..500).map(|index| char::from(b'0' + (index * 7 % 10) as u8)).collect();
        for name in NAMES {
            let alphabet = alphabet_by_name(name).unwrap();
            let encoded = Encoder::new(alphabet).encode(&digits).unwrap();
            assert_eq!(Decoder::new(alphabet).decode(&encoded).unwrap(), digits);
        }
    }

    #[test]
    fn shared_between_threads() {
        std::thread::scope(|scope| {
            for name in NAMES {
                scope.spawn(move || {
                    let alphabet = alphabet_by_name(name).unwrap();
                    for n in (0..u64::MAX).step_by(1 << 50) {
                        let encoded = Encoder::new(alphabet).encode_u64(n);
                        assert_eq!(Decoder::new(alphabet).decode_u64(&encoded).unwrap(), n);
                    }
                });
            }
        });
    }
}
