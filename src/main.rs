use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

use urlenc::{logger, report, run, Config, Exit};

fn main() -> ExitCode {
    logger::setup_logger();

    let result = Config::parse_from(std::env::args_os()).and_then(|config| {
        let stdout = BufWriter::new(io::stdout().lock());
        run(&config, io::stdin().lock(), stdout).map(drop)
    });

    match result {
        Ok(()) => Exit::Success.into(),
        Err(err) => report(&err, io::stderr().lock()).into(),
    }
}
