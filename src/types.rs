use core::fmt;
use std::{io, process::ExitCode};

pub const PERCENT: u8 = b'%';
pub const PLUS: u8 = b'+';
pub const SPACE: u8 = b' ';
pub const LF: u8 = b'\n';

/// Error type for decode operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A `%` that is not followed by two hexadecimal digits.
    ///
    /// `escape` holds the `%` and at most two characters after it, `offset`
    /// is the byte position of the `%` in the input.
    InvalidEscape { offset: usize, escape: String },
    /// The unescaped bytes do not form valid UTF-8.
    ///
    /// `offset` is the position of the first invalid byte in the decoded
    /// output, not in the input.
    InvalidUtf8 { offset: usize },
}

impl DecodeError {
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::InvalidEscape { offset, .. } | DecodeError::InvalidUtf8 { offset } => {
                *offset
            }
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidEscape { escape, .. } => {
                write!(f, "invalid URL escape {escape:?}")
            }
            DecodeError::InvalidUtf8 { offset } => {
                write!(f, "decoded bytes are not valid UTF-8 at byte {offset}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Process exit statuses. The numeric values are stable so calling scripts
/// can branch on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Exit {
    Success = 0,
    Usage = 1,
    IoError = 2,
    DecodeError = 3,
}

impl Exit {
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit.code())
    }
}

/// Error type for a complete run of the tool.
#[derive(Debug)]
pub enum Error {
    /// Help was requested or the flags were invalid. The message is the full
    /// text that should be shown on the error stream.
    Usage(String),
    /// Reading from standard input failed.
    Read(io::Error),
    /// Writing to standard output failed.
    Write(io::Error),
    /// An input item could not be decoded.
    Decode { input: String, source: DecodeError },
}

impl Error {
    #[must_use]
    pub fn exit(&self) -> Exit {
        match self {
            Error::Usage(_) => Exit::Usage,
            Error::Read(_) | Error::Write(_) => Exit::IoError,
            Error::Decode { .. } => Exit::DecodeError,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage(message) => f.write_str(message.trim_end_matches('\n')),
            Error::Read(err) => write!(f, "stdin read failed: {err}"),
            Error::Write(err) => write!(f, "stdout write failed: {err}"),
            Error::Decode { input, source } => write!(f, "bad encoding: {input:?}: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Usage(_) => None,
            Error::Read(err) | Error::Write(err) => Some(err),
            Error::Decode { source, .. } => Some(source),
        }
    }
}

/// Result type alias for a run of the tool.
pub type Result<T> = std::result::Result<T, Error>;
