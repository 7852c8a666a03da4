//!Tracing support
//!
//!Only event message is written, other fields are ignored.

use core::fmt;

use tracing::{Event, Level, Metadata};
use tracing::subscriber::{Interest, Subscriber as Collect};
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::Context;

use crate::syslog::header::Origin;
use crate::{Logger, Severity};

//Event message which is recorded as it is rather than as field
const MESSAGE_FIELD: &str = "message";

impl From<Level> for Severity {
    #[inline(always)]
    fn from(level: Level) -> Self {
        match level {
            Level::ERROR => Self::LOG_ERR,
            Level::WARN => Self::LOG_WARNING,
            Level::INFO => Self::LOG_NOTICE,
            Level::DEBUG => Self::LOG_INFO,
            Level::TRACE => Self::LOG_DEBUG,
        }
    }
}

///Tracing layer writing events into [Logger]
///
///`L` is anything that refers to logger: `Logger`, `&'static Logger`, `Arc<Logger>`
pub struct LoggerLayer<L> {
    logger: L,
}

impl<L> LoggerLayer<L> {
    #[inline(always)]
    ///Creates new instance
    pub const fn new(logger: L) -> Self {
        Self {
            logger,
        }
    }
}

struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    #[inline(always)]
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == MESSAGE_FIELD {
            let _ = fmt::Write::write_fmt(&mut self.message, format_args!("{:?}", value));
        }
    }

    #[inline(always)]
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == MESSAGE_FIELD {
            self.message.push_str(value);
        }
    }
}

impl<C: Collect, L: AsRef<Logger> + 'static> tracing_subscriber::layer::Layer<C> for LoggerLayer<L> {
    #[inline(always)]
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        //Priority can change at any moment, so it cannot be cached per callsite
        Interest::sometimes()
    }

    #[inline(always)]
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, C>) -> bool {
        self.logger.as_ref().is_enabled((*metadata.level()).into())
    }

    #[inline]
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, C>) {
        let metadata = event.metadata();
        let mut visitor = MessageVisitor {
            message: String::new(),
        };
        event.record(&mut visitor);

        let origin = Origin {
            file: metadata.file().unwrap_or("<unknown>"),
            line: metadata.line().unwrap_or(0),
        };
        self.logger.as_ref().log_at((*metadata.level()).into(), origin, format_args!("{}", visitor.message));
    }
}
