//!Logger writer
use ::std::io;

use crate::syslog::Severity;

mod std;
pub use self::std::*;

///Log writer
///
///Destination of already rendered lines
pub trait Writer: Send {
    ///Performs write of the full line, including trailing new line.
    ///
    ///Severity is `None` for fatal and panic lines and is only for informational purpose
    fn write(&mut self, severity: Option<Severity>, line: &str) -> io::Result<()>;

    #[inline(always)]
    ///Flushes any buffered output
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<W: Writer + ?Sized> Writer for Box<W> {
    #[inline(always)]
    fn write(&mut self, severity: Option<Severity>, line: &str) -> io::Result<()> {
        (**self).write(severity, line)
    }

    #[inline(always)]
    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
