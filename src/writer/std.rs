use std::io;
use std::sync::mpsc;

use super::Writer;
use crate::syslog::Severity;

#[repr(transparent)]
///Writer that uses channel to send lines.
///
///This is mostly useful for testing purposes.
pub struct InMemory<T>(mpsc::Sender<T>);

impl<T: for<'a> From<&'a str>> InMemory<T> {
    #[inline(always)]
    ///Creates new in memory writer using provided sender
    pub fn new(chan: mpsc::Sender<T>) -> Self {
        Self(chan)
    }

    #[inline(always)]
    ///Returns reference to underlying channel
    pub fn channel(&self) -> &mpsc::Sender<T> {
        &self.0
    }
}

impl<T: for<'a> From<&'a str> + Send> Writer for InMemory<T> {
    #[inline(always)]
    fn write(&mut self, _severity: Option<Severity>, line: &str) -> io::Result<()> {
        self.0.send(line.into()).map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "receiver is dropped"))
    }
}

impl<T> Clone for InMemory<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}

#[repr(transparent)]
///Writer over any `io::Write` destination: console stream, file, buffer.
pub struct Stream<W>(W);

impl<W: io::Write> Stream<W> {
    #[inline(always)]
    ///Creates new writer
    pub const fn new(inner: W) -> Self {
        Self(inner)
    }

    #[inline(always)]
    ///Returns underlying destination
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl Stream<io::Stderr> {
    #[inline(always)]
    ///Creates writer to standard error
    pub fn stderr() -> Self {
        Self(io::stderr())
    }
}

impl Stream<io::Stdout> {
    #[inline(always)]
    ///Creates writer to standard output
    pub fn stdout() -> Self {
        Self(io::stdout())
    }
}

impl<W: io::Write + Send> Writer for Stream<W> {
    #[inline(always)]
    fn write(&mut self, _severity: Option<Severity>, line: &str) -> io::Result<()> {
        self.0.write_all(line.as_bytes())
    }

    #[inline(always)]
    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}
