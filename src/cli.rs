//! Command line flags and their resolution into an immutable [`Config`].

use std::ffi::OsString;

use clap::{CommandFactory, Parser};

use crate::{escape::Mode, Error, Result};

pub const CONFLICT_MESSAGE: &str = "decode and encode are both set. I don't know what to do.";

// `-h/--help` is declared by hand so that help goes to stderr with the usage
// exit status instead of clap's stdout/0 behaviour.
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(name = "urlenc", disable_help_flag = true, args_override_self = true)]
pub struct Args {
    /// run in decode mode
    #[arg(short = 'D', long)]
    pub decode: bool,

    /// run in encode mode
    #[arg(short = 'E', long)]
    pub encode: bool,

    /// print usage and exit
    #[arg(short = 'h', long)]
    pub help: bool,

    /// read URLs from stdin instead of args
    #[arg(long)]
    pub stdin: bool,

    /// strings to transform
    #[arg(value_name = "STRING", value_parser = clap::value_parser!(OsString))]
    pub inputs: Vec<OsString>,
}

/// Where input items come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Positional arguments, in the order given. They are kept as raw OS
    /// strings so arguments that are not UTF-8 can still be encoded.
    Args(Vec<OsString>),
    /// Lines of standard input until end-of-stream.
    Stdin,
}

/// Resolved, read-only run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub source: Source,
}

impl Config {
    /// Parse a full argument vector (program name first) into a `Config`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Usage` when help is requested, when both modes are
    /// selected, or when clap rejects the arguments. The error message is the
    /// text to show the user.
    pub fn parse_from<I, T>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let program = argv.first().map_or_else(
            || env!("CARGO_PKG_NAME").to_string(),
            |name| name.to_string_lossy().into_owned(),
        );

        let args =
            Args::try_parse_from(&argv).map_err(|err| Error::Usage(err.render().to_string()))?;
        Self::resolve(args, &program)
    }

    /// Turn parsed flags into a `Config`.
    ///
    /// Help wins over everything else, then the encode/decode conflict is
    /// checked. Without a mode flag the tool encodes.
    ///
    /// # Errors
    ///
    /// See [`Config::parse_from`].
    pub fn resolve(args: Args, program: &str) -> Result<Self> {
        if args.help {
            return Err(Error::Usage(usage(program)));
        }

        let mode = match (args.decode, args.encode) {
            (true, true) => return Err(Error::Usage(CONFLICT_MESSAGE.to_string())),
            (true, false) => Mode::Decode,
            (false, _) => Mode::Encode,
        };

        let source = if args.stdin {
            if !args.inputs.is_empty() {
                log::debug!(
                    "reading stdin, ignoring {} positional argument(s)",
                    args.inputs.len()
                );
            }
            Source::Stdin
        } else {
            Source::Args(args.inputs)
        };

        log::debug!("resolved mode {mode:?}, source {source:?}");
        Ok(Self { mode, source })
    }
}

/// Usage text shown for `--help`.
#[must_use]
pub fn usage(program: &str) -> String {
    let mut command = Args::command();
    format!(
        "{program} is an encoder and decoder for percent-encoding (a.k.a. URI-encoding)\n\n{}",
        command.render_help()
    )
}
