//! The read/transform/write loop.

use std::io::{BufRead, Write};

use crate::{
    cli::{Config, Source},
    escape::Mode,
    types::{Exit, LF},
    Error, Result,
};

/// Line-by-line reader over a `BufRead`.
///
/// Lines are raw bytes with the trailing `\n` (and a `\r` before it) removed.
/// A last line without terminator is still returned.
pub struct Lines<R> {
    inner: R,
    line_buf: Vec<u8>,
    end_of_stream: bool,
}

impl<R: BufRead> Lines<R> {
    /// Read lines from `inner`.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line_buf: Vec::new(),
            end_of_stream: false,
        }
    }

    /// Read the next line, or `None` at end-of-stream.
    ///
    /// # Errors
    ///
    /// Propagates read errors from the inner reader.
    pub fn next_line(&mut self) -> std::io::Result<Option<&[u8]>> {
        if self.end_of_stream {
            return Ok(None);
        }

        self.line_buf.clear();
        if self.inner.read_until(LF, &mut self.line_buf)? == 0 {
            self.end_of_stream = true;
            return Ok(None);
        }
        Ok(Some(strip_line_ending(&self.line_buf)))
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Writes one transcoded line per input item.
///
/// Every line is flushed as soon as it is written, so output keeps pace with
/// input that arrives slowly.
pub struct Writer<W> {
    inner: W,
    mode: Mode,
    items: usize,
}

impl<W: Write> Writer<W> {
    /// Write items transcoded with `mode` to `inner`.
    pub fn new(inner: W, mode: Mode) -> Self {
        Self {
            inner,
            mode,
            items: 0,
        }
    }

    /// Transcode `input` and write it followed by a newline.
    ///
    /// # Errors
    ///
    /// `Error::Decode` if the input cannot be decoded (nothing is written for
    /// it), `Error::Write` if the output rejects the line or the flush.
    pub fn write_item<T: AsRef<[u8]>>(&mut self, input: T) -> Result<()> {
        let input = input.as_ref();
        let output = self.mode.transcode(input).map_err(|source| Error::Decode {
            input: String::from_utf8_lossy(input).into_owned(),
            source,
        })?;
        log::trace!("item {}: {} -> {} bytes", self.items, input.len(), output.len());

        self.inner
            .write_all(output.as_bytes())
            .and_then(|()| self.inner.write_all(&[LF]))
            .and_then(|()| self.inner.flush())
            .map_err(Error::Write)?;
        self.items += 1;
        Ok(())
    }

    /// Number of items written so far.
    #[must_use]
    pub fn items(&self) -> usize {
        self.items
    }

    /// Flush and return the inner writer.
    ///
    /// # Errors
    ///
    /// `Error::Write` if flushing fails.
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush().map_err(Error::Write)?;
        Ok(self.inner)
    }
}

/// Run the tool for `config`, reading from `stdin` when the source is
/// [`Source::Stdin`] and writing results to `stdout`.
///
/// Stops at the first error; items before it have already been written.
///
/// # Errors
///
/// `Error::Read`, `Error::Write` or `Error::Decode`.
pub fn run<R: BufRead, W: Write>(config: &Config, stdin: R, stdout: W) -> Result<W> {
    let mut writer = Writer::new(stdout, config.mode);

    match &config.source {
        Source::Args(inputs) => {
            for input in inputs {
                writer.write_item(input.as_encoded_bytes())?;
            }
        }
        Source::Stdin => {
            let mut lines = Lines::new(stdin);
            while let Some(line) = lines.next_line().map_err(Error::Read)? {
                writer.write_item(line)?;
            }
        }
    }

    log::debug!("{} item(s) transcoded", writer.items());
    writer.finish()
}

/// Write the diagnostic for `err` to `stderr` and pick the exit status.
///
/// If the diagnostic itself cannot be written the status is `Exit::IoError`,
/// whatever the original error was.
pub fn report<W: Write>(err: &Error, mut stderr: W) -> Exit {
    match writeln!(stderr, "{err}").and_then(|()| stderr.flush()) {
        Ok(()) => err.exit(),
        Err(_) => Exit::IoError,
    }
}
