//! Process-wide default logger
//!
//! Default logger writes to stderr with [Flags::STD] and enables levels up to [Level::ERR].
//! It is created on first use and never reads environment on its own: host should call
//! [init_from_env] at startup to apply [LEVEL_ENV].

use core::fmt;
use std::env;
use std::sync::OnceLock;

use crate::{writer, Flags, Level, Logger, Panic, Prefix, Severity};

///Environment variable with threshold of default logger.
///
///Value is matched against level names (`emerg`, `alert`, `crit`, `err`, `warning`, `notice`,
///`info`, `debug` and `none`), ignoring case.
pub const LEVEL_ENV: &str = "GOLOGLEVEL";

static DEFAULT: OnceLock<Logger> = OnceLock::new();

///Returns default logger
pub fn logger() -> &'static Logger {
    DEFAULT.get_or_init(|| Logger::new(writer::Stream::stderr(), Prefix::EMPTY, Flags::STD, Level::ERR))
}

///Resolves level name, falling back to [Level::ERR] when it is absent or unknown
pub fn resolve_level(value: Option<&str>) -> Level {
    value.and_then(Level::from_name).unwrap_or(Level::ERR)
}

///Reads threshold from [LEVEL_ENV]
pub fn level_from_env() -> Level {
    resolve_level(env::var(LEVEL_ENV).ok().as_deref())
}

///Applies [LEVEL_ENV] to default logger, returning resolved level
pub fn init_from_env() -> Level {
    let level = level_from_env();
    logger().set_priority(level);
    level
}

#[inline]
///Replaces destination of default logger
pub fn set_output<W: writer::Writer + 'static>(writer: W) {
    logger().set_output(writer)
}

#[inline]
///Returns prefix of default logger
pub fn prefix() -> Prefix {
    logger().prefix()
}

#[inline]
///Sets prefix of default logger
pub fn set_prefix(prefix: Prefix) {
    logger().set_prefix(prefix)
}

#[inline]
///Returns flags of default logger
pub fn flags() -> Flags {
    logger().flags()
}

#[inline]
///Sets flags of default logger
pub fn set_flags(flags: Flags) {
    logger().set_flags(flags)
}

#[inline]
///Returns threshold of default logger
pub fn priority() -> Level {
    logger().priority()
}

#[inline]
///Sets threshold of default logger
pub fn set_priority(level: impl Into<Level>) {
    logger().set_priority(level)
}

#[inline]
///Returns whether `severity` passes default logger's mask
pub fn is_enabled(severity: Severity) -> bool {
    logger().is_enabled(severity)
}

#[inline]
#[track_caller]
///Logs with `severity` using default logger
pub fn log(severity: Severity, args: fmt::Arguments<'_>) {
    logger().log(severity, args)
}

#[inline]
#[track_caller]
///Logs with [Severity::LOG_EMERG] using default logger
pub fn emerg(args: fmt::Arguments<'_>) {
    logger().emerg(args)
}

#[inline]
#[track_caller]
///Logs with [Severity::LOG_ALERT] using default logger
pub fn alert(args: fmt::Arguments<'_>) {
    logger().alert(args)
}

#[inline]
#[track_caller]
///Logs with [Severity::LOG_CRIT] using default logger
pub fn crit(args: fmt::Arguments<'_>) {
    logger().crit(args)
}

#[inline]
#[track_caller]
///Logs with [Severity::LOG_ERR] using default logger
pub fn error(args: fmt::Arguments<'_>) {
    logger().error(args)
}

#[inline]
#[track_caller]
///Logs with [Severity::LOG_WARNING] using default logger
pub fn warning(args: fmt::Arguments<'_>) {
    logger().warning(args)
}

#[inline]
#[track_caller]
///Logs with [Severity::LOG_NOTICE] using default logger
pub fn notice(args: fmt::Arguments<'_>) {
    logger().notice(args)
}

#[inline]
#[track_caller]
///Logs with [Severity::LOG_INFO] using default logger
pub fn info(args: fmt::Arguments<'_>) {
    logger().info(args)
}

#[inline]
#[track_caller]
///Logs with [Severity::LOG_DEBUG] using default logger
pub fn debug(args: fmt::Arguments<'_>) {
    logger().debug(args)
}

#[track_caller]
///Writes `[fatal]` message using default logger and exits process
pub fn fatal(args: fmt::Arguments<'_>) -> ! {
    logger().fatal(args)
}

#[track_caller]
///Writes `[panic]` message using default logger and returns it as error
pub fn panic(args: fmt::Arguments<'_>) -> Panic {
    logger().panic(args)
}
