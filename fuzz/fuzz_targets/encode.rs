#![no_main]

use libfuzzer_sys::fuzz_target;
use urlenc::{decode, encode, is_unreserved};

fuzz_target!(|data: &[u8]| {
    let encoded = encode(data);
    assert!(encoded
        .bytes()
        .all(|b| is_unreserved(b) || b == b'%' || b == b'+'));

    if let Ok(text) = std::str::from_utf8(data) {
        assert_eq!(decode(&encoded).as_deref(), Ok(text));
    }
});
