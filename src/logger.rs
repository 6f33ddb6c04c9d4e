use std::io;

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

pub const LOG_ENV: &str = "URLENC_LOG";

/// Log level from `URLENC_LOG`. Unset or unknown means off, so the only
/// thing on stderr is the tool's own diagnostics.
#[must_use]
pub fn logging_level(value: Option<&str>) -> LevelFilter {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        Some("info") => LevelFilter::Info,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        _ => LevelFilter::Off,
    }
}

pub fn setup_logger() {
    let level_filter = logging_level(std::env::var(LOG_ENV).ok().as_deref());
    if level_filter == LevelFilter::Off {
        return;
    }

    if let Err(e) = Dispatch::new()
        .format(move |out, message, record| match level_filter {
            LevelFilter::Debug | LevelFilter::Trace => out.finish(format_args!(
                "[{}][{}]: {} <{}:{}>",
                Local::now().format("%b-%d-%Y %H:%M:%S.%f"),
                record.level(),
                message,
                record.file().unwrap_or("unknown_file"),
                record.line().unwrap_or(0),
            )),
            _ => out.finish(format_args!("[{}]: {}", record.level(), message)),
        })
        .level(level_filter)
        .chain(io::stderr())
        .apply()
    {
        eprintln!("Logger initialization failed: {e}");
    }
    log::debug!("Enabled log {level_filter}.");
}
