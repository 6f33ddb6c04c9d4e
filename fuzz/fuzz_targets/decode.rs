#![no_main]

use libfuzzer_sys::fuzz_target;
use urlenc::{decode, encode, DecodeError};

fuzz_target!(|data: &[u8]| {
    match decode(data) {
        Ok(decoded) => {
            // Anything that decodes must survive a round trip through encode.
            assert!(decoded.len() <= data.len());
            assert_eq!(decode(encode(&decoded)).as_deref(), Ok(decoded.as_str()));
        }
        Err(DecodeError::InvalidEscape { offset, escape }) => {
            assert_eq!(data[offset], b'%');
            assert!(escape.starts_with('%'));
        }
        Err(DecodeError::InvalidUtf8 { .. }) => {}
    }
});
