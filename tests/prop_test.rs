use std::sync::LazyLock;

use percent_encoding::{percent_decode, percent_encode, AsciiSet, NON_ALPHANUMERIC};
use proptest::{
    arbitrary::any, collection::vec, prop_assert, prop_assert_eq, proptest, test_runner::Config,
};
use regex::Regex;
use urlenc::{decode, encode, Mode};

/// Everything but the unreserved set.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

static ENCODED_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z0-9._~+-]|%[0-9A-F]{2})*$").unwrap());

fn baseline_encode(input: &[u8]) -> String {
    percent_encode(input, QUERY).to_string().replace("%20", "+")
}

fn baseline_decode(input: &[u8]) -> Option<String> {
    let plus_as_space: Vec<u8> = input
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    percent_decode(&plus_as_space)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

proptest! {
    #![proptest_config(Config::with_cases(10000))]

    #[test]
    fn decode_inverts_encode(s in any::<String>()) {
        prop_assert_eq!(decode(encode(&s)), Ok(s));
    }

    #[test]
    fn unreserved_strings_encode_to_themselves(s in "[A-Za-z0-9._~-]*") {
        prop_assert_eq!(encode(&s), s);
    }

    #[test]
    fn encoded_output_has_query_shape(data in vec(any::<u8>(), 0..256)) {
        let out = encode(&data);
        prop_assert!(ENCODED_SHAPE.is_match(&out), "unexpected characters in {:?}", out);
    }

    #[test]
    fn encode_matches_percent_encoding_crate(data in vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(encode(&data), baseline_encode(&data));
    }

    #[test]
    fn successful_decode_matches_percent_encoding_crate(data in vec(any::<u8>(), 0..256)) {
        if let Ok(decoded) = decode(&data) {
            prop_assert_eq!(Some(decoded), baseline_decode(&data));
        }
    }

    #[test]
    fn decode_never_grows_input(data in vec(any::<u8>(), 0..256)) {
        if let Ok(decoded) = decode(&data) {
            prop_assert!(decoded.len() <= data.len());
        }
    }

    #[test]
    fn mode_dispatch_matches_free_functions(s in any::<String>()) {
        prop_assert_eq!(Mode::Encode.transcode(&s), Ok(encode(&s)));
        prop_assert_eq!(Mode::Decode.transcode(&s), decode(&s));
    }
}
