//! Priority filtered logger with syslog levels
//!
//! Every logger holds priority mask with one bit per [Severity], enabling all levels up to
//! and including configured threshold.
//! Lines that pass the mask are written as `<header>[<level>] <message>`.
//!
//! ```
//! use std::sync::mpsc;
//! use syslog_logger::{Flags, Logger, Prefix, Severity, writer};
//!
//! let (sender, receiver) = mpsc::channel::<String>();
//! let logger = Logger::new(writer::InMemory::new(sender), Prefix::EMPTY, Flags::EMPTY, Severity::LOG_NOTICE);
//!
//! syslog_logger::warning!(logger: logger, "disk is {}% full", 91);
//! syslog_logger::debug!(logger: logger, "not written");
//!
//! assert_eq!(receiver.try_recv().unwrap(), "[warning] disk is 91% full\n");
//! assert!(receiver.try_recv().is_err());
//! ```

#![warn(missing_docs)]
#![allow(clippy::style)]

use core::fmt;
use core::panic::Location;
use core::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod syslog;
pub use syslog::{Facility, Level, Severity};
pub use syslog::header::{Flags, Prefix};
pub mod writer;
pub mod global;
mod macros;
#[cfg(feature = "log04")]
pub mod log04;
#[cfg(feature = "tracing")]
pub mod tracing;

use syslog::header::{Header, Origin};
use syslog::mask;

const FATAL_TAG: &str = "fatal";
const PANIC_TAG: &str = "panic";

struct Sink {
    writer: Box<dyn writer::Writer>,
    prefix: Prefix,
    flags: Flags,
    line: String,
}

impl Sink {
    fn write(&mut self, severity: Option<Severity>, origin: Origin<'_>, text: &str) {
        self.line.clear();
        let header = Header::new(&self.prefix, self.flags, origin);
        let _ = header.write_buffer(&mut self.line);
        self.line.push_str(text);
        if !self.line.ends_with('\n') {
            self.line.push('\n');
        }

        //Logging never fails, so destination errors are dropped
        let _ = self.writer.write(severity, &self.line);
    }
}

///Error of the panic level, carrying rendered `[panic] <message>` text.
///
///Returned by [Logger::panic] after it is written, to be propagated by the caller.
///
///```compile_fail
///#![deny(unused_must_use)]
///use std::sync::mpsc;
///use syslog_logger::{Flags, Level, Logger, Prefix, writer};
///
///let (sender, _receiver) = mpsc::channel::<String>();
///let logger = Logger::new(writer::InMemory::new(sender), Prefix::EMPTY, Flags::EMPTY, Level::EMERG);
///syslog_logger::raise!(logger: logger, "dropped");
///```
#[must_use = "panic level error must be propagated, otherwise execution continues as if nothing happened"]
#[derive(Clone, PartialEq, Eq)]
pub struct Panic(String);

impl Panic {
    #[inline(always)]
    ///Returns rendered message
    pub fn message(&self) -> &str {
        &self.0
    }

    #[inline(always)]
    ///Returns rendered message
    pub fn into_message(self) -> String {
        self.0
    }
}

impl fmt::Debug for Panic {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, fmt)
    }
}

impl fmt::Display for Panic {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.0)
    }
}

impl std::error::Error for Panic {}

///Priority filtered logger
///
///Priority mask is atomic, so each log call observes single snapshot of it.
///Destination, prefix and flags are kept behind lock, which is also held while line is written.
///Message is formatted before the lock is taken, so arguments may log through the same logger.
pub struct Logger {
    upto: AtomicU32,
    sink: Mutex<Sink>,
}

impl Logger {
    ///Creates new logger, enabling every severity up to and including `level`
    pub fn new<W: writer::Writer + 'static>(writer: W, prefix: Prefix, flags: Flags, level: impl Into<Level>) -> Self {
        Self {
            upto: AtomicU32::new(mask::up_to(level.into())),
            sink: Mutex::new(Sink {
                writer: Box::new(writer),
                prefix,
                flags,
                line: String::new(),
            }),
        }
    }

    #[inline(always)]
    fn sink(&self) -> MutexGuard<'_, Sink> {
        //Sink is always left in valid state, so poisoning is irrelevant
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }

    ///Replaces destination, keeping prefix and flags
    pub fn set_output<W: writer::Writer + 'static>(&self, writer: W) {
        self.sink().writer = Box::new(writer);
    }

    #[inline]
    ///Returns current prefix
    pub fn prefix(&self) -> Prefix {
        self.sink().prefix.clone()
    }

    #[inline]
    ///Sets prefix
    pub fn set_prefix(&self, prefix: Prefix) {
        self.sink().prefix = prefix;
    }

    #[inline]
    ///Returns current flags
    pub fn flags(&self) -> Flags {
        self.sink().flags
    }

    #[inline]
    ///Sets flags
    pub fn set_flags(&self, flags: Flags) {
        self.sink().flags = flags;
    }

    #[inline]
    ///Returns current threshold
    pub fn priority(&self) -> Level {
        mask::threshold(self.upto.load(Ordering::Relaxed))
    }

    #[inline]
    ///Enables every severity up to and including `level`.
    ///
    ///Level is not validated.
    pub fn set_priority(&self, level: impl Into<Level>) {
        self.upto.store(mask::up_to(level.into()), Ordering::Relaxed);
    }

    #[inline]
    ///Returns whether `severity` passes priority mask
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.upto.load(Ordering::Relaxed) & severity.mask() != 0
    }

    ///Flushes destination
    pub fn flush(&self) {
        let _ = self.sink().writer.flush();
    }

    pub(crate) fn log_at(&self, severity: Severity, origin: Origin<'_>, args: fmt::Arguments<'_>) {
        if self.is_enabled(severity) {
            let text = format!("[{}] {}", severity.name(), args);
            self.sink().write(Some(severity), origin, &text);
        }
    }

    #[inline]
    #[track_caller]
    ///Writes message with `severity` if it passes priority mask
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.log_at(severity, Location::caller().into(), args)
    }

    #[inline]
    #[track_caller]
    ///Logs with [Severity::LOG_EMERG]
    pub fn emerg(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::LOG_EMERG, args)
    }

    #[inline]
    #[track_caller]
    ///Logs with [Severity::LOG_ALERT]
    pub fn alert(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::LOG_ALERT, args)
    }

    #[inline]
    #[track_caller]
    ///Logs with [Severity::LOG_CRIT]
    pub fn crit(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::LOG_CRIT, args)
    }

    #[inline]
    #[track_caller]
    ///Logs with [Severity::LOG_ERR]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::LOG_ERR, args)
    }

    #[inline]
    #[track_caller]
    ///Logs with [Severity::LOG_WARNING]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::LOG_WARNING, args)
    }

    #[inline]
    #[track_caller]
    ///Logs with [Severity::LOG_NOTICE]
    pub fn notice(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::LOG_NOTICE, args)
    }

    #[inline]
    #[track_caller]
    ///Logs with [Severity::LOG_INFO]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::LOG_INFO, args)
    }

    #[inline]
    #[track_caller]
    ///Logs with [Severity::LOG_DEBUG]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::LOG_DEBUG, args)
    }

    #[track_caller]
    ///Writes `[fatal]` message regardless of priority and exits process with status 1
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        let text = format!("[{}] {}", FATAL_TAG, args);
        {
            let mut sink = self.sink();
            sink.write(None, Location::caller().into(), &text);
            let _ = sink.writer.flush();
        }
        std::process::exit(1)
    }

    #[track_caller]
    ///Writes `[panic]` message regardless of priority and returns it as error.
    ///
    ///```
    ///use std::sync::mpsc;
    ///use syslog_logger::{Flags, Level, Logger, Panic, Prefix, writer};
    ///
    ///fn load(logger: &Logger) -> Result<(), Panic> {
    ///    Err(logger.panic(format_args!("config is {}", "missing")))
    ///}
    ///
    ///let (sender, _receiver) = mpsc::channel::<String>();
    ///let logger = Logger::new(writer::InMemory::new(sender), Prefix::EMPTY, Flags::EMPTY, Level::EMERG);
    ///assert_eq!(load(&logger).unwrap_err().message(), "[panic] config is missing");
    ///```
    pub fn panic(&self, args: fmt::Arguments<'_>) -> Panic {
        let message = format!("[{}] {}", PANIC_TAG, args);
        let mut sink = self.sink();
        sink.write(None, Location::caller().into(), &message);
        let _ = sink.writer.flush();
        Panic(message)
    }
}

impl AsRef<Logger> for Logger {
    #[inline(always)]
    fn as_ref(&self) -> &Logger {
        self
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sink = self.sink();
        fmt.debug_struct("Logger")
           .field("priority", &self.priority())
           .field("prefix", &sink.prefix)
           .field("flags", &sink.flags)
           .finish()
    }
}
