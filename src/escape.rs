//! Query-component percent-encoding.
//!
//! Bytes in the unreserved set (`A-Z a-z 0-9 - _ . ~`) are copied as-is, a
//! space becomes `+` and every other byte becomes `%XX` with upper-case hex
//! digits. Decoding reverses this and accepts hex digits in either case.
//!
//! Both directions work on bytes, so a multi-byte UTF-8 character is escaped
//! as one `%XX` triple per byte. Decoding only succeeds if the unescaped bytes
//! are valid UTF-8.
use std::string::FromUtf8Error;

use memchr::memchr2;

use crate::types::{DecodeError, PERCENT, PLUS, SPACE};

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Transcoder selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Encode,
    Decode,
}

impl Mode {
    /// Apply the selected transform to a single input item.
    ///
    /// # Errors
    ///
    /// Only `Mode::Decode` can fail, see [`decode`].
    pub fn transcode<T: AsRef<[u8]>>(self, input: T) -> Result<String, DecodeError> {
        match self {
            Mode::Encode => Ok(encode(input)),
            Mode::Decode => decode(input),
        }
    }
}

/// Whether `byte` is copied unchanged by [`encode`].
#[must_use]
pub fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

/// Percent-encode `input` for use in a URL query component.
#[must_use]
pub fn encode<T: AsRef<[u8]>>(input: T) -> String {
    let input = input.as_ref();
    if input.iter().all(|&b| is_unreserved(b)) {
        return ascii_to_string(input.to_vec());
    }

    let escaped = input
        .iter()
        .filter(|&&b| !is_unreserved(b) && b != SPACE)
        .count();
    let mut output = Vec::with_capacity(input.len() + escaped * 2);
    for &byte in input {
        if is_unreserved(byte) {
            output.push(byte);
        } else if byte == SPACE {
            output.push(PLUS);
        } else {
            output.extend_from_slice(&[
                PERCENT,
                HEX_UPPER[usize::from(byte >> 4)],
                HEX_UPPER[usize::from(byte & 0x0f)],
            ]);
        }
    }
    ascii_to_string(output)
}

/// Decode a percent-encoded query component.
///
/// # Errors
///
/// Returns `DecodeError::InvalidEscape` if a `%` is not followed by two hex
/// digits and `DecodeError::InvalidUtf8` if the unescaped bytes are not valid
/// UTF-8. No partial output is produced in either case.
pub fn decode<T: AsRef<[u8]>>(input: T) -> Result<String, DecodeError> {
    let input = input.as_ref();
    let Some(first) = memchr2(PERCENT, PLUS, input) else {
        return into_utf8(input.to_vec());
    };

    let mut output = Vec::with_capacity(input.len());
    let mut read_pos = 0;
    let mut found = Some(first);

    while let Some(i) = found {
        output.extend_from_slice(&input[read_pos..i]);
        if input[i] == PLUS {
            output.push(SPACE);
            read_pos = i + 1;
        } else {
            let hi = input.get(i + 1).copied().and_then(hex_value);
            let lo = input.get(i + 2).copied().and_then(hex_value);
            let (Some(hi), Some(lo)) = (hi, lo) else {
                return Err(invalid_escape(input, i));
            };
            output.push((hi << 4) | lo);
            read_pos = i + 3;
        }
        found = memchr2(PERCENT, PLUS, &input[read_pos..]).map(|pos| pos + read_pos);
    }

    output.extend_from_slice(&input[read_pos..]);
    into_utf8(output)
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn invalid_escape(input: &[u8], offset: usize) -> DecodeError {
    let end = input.len().min(offset + 3);
    DecodeError::InvalidEscape {
        offset,
        escape: String::from_utf8_lossy(&input[offset..end]).into_owned(),
    }
}

fn into_utf8(bytes: Vec<u8>) -> Result<String, DecodeError> {
    String::from_utf8(bytes).map_err(|err| DecodeError::InvalidUtf8 {
        offset: err.utf8_error().valid_up_to(),
    })
}

fn ascii_to_string(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|FromUtf8Error { .. }| {
        unreachable!("encode produced non-ASCII output (should be impossible)")
    })
}
