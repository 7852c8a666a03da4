//! Logging macros
//!
//! Without target every macro uses [default logger](crate::global::logger).
//! Specific logger is selected by prefixing arguments with `logger: <expr>,`
//!
//! ```ignore
//! info!("started {}", name);
//! info!(logger: my_logger, "started {}", name);
//! ```

#[macro_export]
///Logs with [Severity::LOG_EMERG](crate::Severity::LOG_EMERG)
macro_rules! emerg {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::Logger::emerg(&$logger, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::emerg(format_args!($($arg)+))
    };
}

#[macro_export]
///Logs with [Severity::LOG_ALERT](crate::Severity::LOG_ALERT)
macro_rules! alert {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::Logger::alert(&$logger, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::alert(format_args!($($arg)+))
    };
}

#[macro_export]
///Logs with [Severity::LOG_CRIT](crate::Severity::LOG_CRIT)
macro_rules! crit {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::Logger::crit(&$logger, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::crit(format_args!($($arg)+))
    };
}

#[macro_export]
///Logs with [Severity::LOG_ERR](crate::Severity::LOG_ERR)
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::Logger::error(&$logger, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::error(format_args!($($arg)+))
    };
}

#[macro_export]
///Logs with [Severity::LOG_WARNING](crate::Severity::LOG_WARNING)
macro_rules! warning {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::Logger::warning(&$logger, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::warning(format_args!($($arg)+))
    };
}

#[macro_export]
///Logs with [Severity::LOG_NOTICE](crate::Severity::LOG_NOTICE)
macro_rules! notice {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::Logger::notice(&$logger, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::notice(format_args!($($arg)+))
    };
}

#[macro_export]
///Logs with [Severity::LOG_INFO](crate::Severity::LOG_INFO)
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::Logger::info(&$logger, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::info(format_args!($($arg)+))
    };
}

#[macro_export]
///Logs with [Severity::LOG_DEBUG](crate::Severity::LOG_DEBUG)
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::Logger::debug(&$logger, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::debug(format_args!($($arg)+))
    };
}

#[macro_export]
///Writes `[fatal]` message regardless of priority and exits process
macro_rules! fatal {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::Logger::fatal(&$logger, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::fatal(format_args!($($arg)+))
    };
}

#[macro_export]
///Writes `[panic]` message regardless of priority, evaluating to [Panic](crate::Panic) error
///
///```
///use std::sync::mpsc;
///use syslog_logger::{Flags, Level, Logger, Panic, Prefix, writer};
///
///fn parse(logger: &Logger, text: &str) -> Result<u8, Panic> {
///    text.parse().map_err(|error| syslog_logger::raise!(logger: logger, "'{}': {}", text, error))
///}
///
///let (sender, receiver) = mpsc::channel::<String>();
///let logger = Logger::new(writer::InMemory::new(sender), Prefix::EMPTY, Flags::EMPTY, Level::EMERG);
///assert!(parse(&logger, "x").is_err());
///assert_eq!(receiver.try_recv().unwrap(), "[panic] 'x': invalid digit found in string\n");
///```
macro_rules! raise {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::Logger::panic(&$logger, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::panic(format_args!($($arg)+))
    };
}
