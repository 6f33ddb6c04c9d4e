#![allow(dead_code)]

use std::io::{self, Read, Write};

/// Reader that hands out the data of several readers one after another, so
/// a single logical stream arrives in caller-chosen pieces.
pub struct TestReader<R, I> {
    readers: I,
    current: Option<R>,
}

impl<R: Read, I: Iterator<Item = R>> TestReader<R, I> {
    pub fn new(mut readers: I) -> TestReader<R, I> {
        let current = readers.next();
        TestReader { readers, current }
    }
}

impl<R: Read, I: Iterator<Item = R>> Read for TestReader<R, I> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            match self.current {
                Some(ref mut r) => {
                    let n = r.read(buf)?;
                    if n > 0 {
                        return Ok(n);
                    }
                }
                None => return Ok(0),
            }
            self.current = self.readers.next();
        }
    }
}

/// Reader that returns `data` and then fails.
pub struct FailingReader<'a> {
    data: &'a [u8],
}

impl<'a> FailingReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }
}

impl Read for FailingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::other("device went away"));
        }
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Writer that accepts `capacity` bytes and then reports a broken pipe.
#[derive(Debug)]
pub struct FailingWriter {
    pub written: Vec<u8>,
    capacity: usize,
}

impl FailingWriter {
    pub fn new(capacity: usize) -> Self {
        Self {
            written: Vec::new(),
            capacity,
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.capacity - self.written.len();
        if room == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));
        }
        let n = buf.len().min(room);
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer that keeps unflushed bytes apart from flushed ones, one entry in
/// `flushed` per flush that had something to push out.
#[derive(Debug, Default)]
pub struct FlushTrackingWriter {
    pub pending: Vec<u8>,
    pub flushed: Vec<Vec<u8>>,
}

impl Write for FlushTrackingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            self.flushed.push(std::mem::take(&mut self.pending));
        }
        Ok(())
    }
}

/// Writer that accepts every write but cannot flush.
#[derive(Debug)]
pub struct FlushFailingWriter;

impl Write for FlushFailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
    }
}
