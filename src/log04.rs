//!Implementation for `log` crate interface
//!
//!Key-value pairs of records are not written.

use log04::{Log, Metadata, Record, Level, LevelFilter, SetLoggerError, max_level, STATIC_MAX_LEVEL};

use crate::syslog::header::Origin;
use crate::{Logger, Severity};

impl From<Level> for Severity {
    #[inline(always)]
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Self::LOG_ERR,
            Level::Warn => Self::LOG_WARNING,
            Level::Info => Self::LOG_NOTICE,
            Level::Debug => Self::LOG_INFO,
            Level::Trace => Self::LOG_DEBUG,
        }
    }
}

impl Log for Logger {
    #[inline(always)]
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= max_level() && metadata.level() <= STATIC_MAX_LEVEL && self.is_enabled(metadata.level().into())
    }

    #[inline]
    fn log(&self, record: &Record) {
        if !Log::enabled(self, record.metadata()) {
            return;
        }

        let origin = Origin {
            file: record.file().unwrap_or("<unknown>"),
            line: record.line().unwrap_or(0),
        };
        self.log_at(record.level().into(), origin, *record.args());
    }

    #[inline(always)]
    fn flush(&self) {
        Logger::flush(self)
    }
}

///Installs `logger` as `log` crate logger.
///
///Max level of `log` is set to `Trace` so that priority mask alone filters records.
pub fn install(logger: &'static Logger) -> Result<(), SetLoggerError> {
    log04::set_logger(logger).map(|()| log04::set_max_level(LevelFilter::Trace))
}
