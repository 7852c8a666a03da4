use std::sync::mpsc;

use syslog_logger::writer::InMemory;
use syslog_logger::{Flags, Level, Logger, Prefix, Severity};

#[test]
fn should_filter_log04_records_by_priority() {
    let (sender, receiver) = mpsc::channel::<String>();
    let logger = Logger::new(InMemory::new(sender), Prefix::EMPTY, Flags::SHORT_FILE, Level::NOTICE);
    let logger: &'static Logger = Box::leak(Box::new(logger));

    syslog_logger::log04::install(logger).expect("to install logger");
    assert_eq!(Severity::from(log04::Level::Info), Severity::LOG_NOTICE);

    let line = line!() + 1;
    log04::info!("Some info log");
    let log = receiver.try_recv().expect("to have line");
    println!("line1={log}");
    assert_eq!(log, format!("log04.rs:{line}: [notice] Some info log\n"));

    log04::debug!("Should not show debug log");
    assert!(receiver.try_recv().is_err(), "Debug logs are filtered out");

    logger.set_priority(Level::DEBUG);
    logger.set_flags(Flags::EMPTY);
    log04::trace!("Trace is {}", "debug");
    assert_eq!(receiver.try_recv().expect("to have line"), "[debug] Trace is debug\n");

    log04::warn!("Some warning log");
    assert_eq!(receiver.try_recv().expect("to have line"), "[warning] Some warning log\n");
}
