#![doc = include_str!("../README.md")]

pub mod cli;
pub mod driver;
pub mod escape;
pub mod logger;
mod types;

pub use cli::{Args, Config, Source};
pub use driver::{report, run, Lines, Writer};
pub use escape::{decode, encode, is_unreserved, Mode};
pub use types::*;
