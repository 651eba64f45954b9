//! Process-wide logging channel.
//!
//! [`init`] installs the global [`tracing`] subscriber exactly once per
//! process; emission afterwards is the ordinary `tracing` macro surface
//! (`error!`, `warn!`, `info!`, ...). Two transports exist, selected by
//! [`LogMode`](crate::LogMode):
//!
//! - **System**: events go to the local syslog daemon in RFC 3164 format,
//!   tagged with the configured daemon identity and the process id, at the
//!   syslog priority matching the event level.
//! - **Diagnostic**: events go to standard error as
//!   `[<priority>] <ident>: <message>` lines, one per event.
//!
//! Emission never fails and never terminates the process: formatting or
//! transport problems after initialization are silently absorbed.

use std::fmt;
use std::sync::Mutex;

use syslog::{Facility, Formatter3164, Logger, LoggerBackend};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::{Config, LogMode};
use crate::error::{Error, Result};

/// Fixed message category for the system log transport.
const FACILITY: Facility = Facility::LOG_DAEMON;

/// Initialize the process-wide logging channel.
///
/// Call exactly once, before any other component of this layer runs. The
/// transport and level come from `config`; `RUST_LOG` directives are
/// honored on top of the configured level.
///
/// # Errors
///
/// Returns an error if the system log channel cannot be opened or if a
/// global subscriber is already installed (double initialization).
pub fn init(config: &Config) -> Result<()> {
    let level: Level = config.logging.level.into();
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    match config.logging.mode {
        LogMode::System => {
            let formatter = Formatter3164 {
                facility: FACILITY,
                hostname: None,
                process: config.name.clone(),
                pid: std::process::id(),
            };
            let logger = syslog::unix(formatter)
                .map_err(|e| Error::log_init(format!("Failed to open system log: {e}")))?;
            let subscriber = tracing_subscriber::registry()
                .with(filter)
                .with(SyslogLayer {
                    logger: Mutex::new(logger),
                });
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::log_init(format!("Failed to initialize logging: {e}")))?;
        }
        LogMode::Diagnostic => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .event_format(DiagnosticFormat {
                    ident: config.name.clone(),
                })
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::log_init(format!("Failed to initialize logging: {e}")))?;
        }
    }

    Ok(())
}

/// Map a tracing level to the conventional syslog numeric priority.
pub(crate) fn priority(level: Level) -> u8 {
    if level == Level::ERROR {
        3
    } else if level == Level::WARN {
        4
    } else if level == Level::INFO {
        6
    } else {
        7
    }
}

/// Collects an event's fields into a single message line.
///
/// The `message` field leads; any remaining fields append as `key=value`
/// pairs so structured context survives the flat syslog transport.
#[derive(Default)]
struct MessageVisitor {
    buf: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        use fmt::Write;
        if field.name() == "message" {
            self.buf.push_str(value);
        } else {
            let _ = write!(self.buf, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        use fmt::Write;
        if field.name() == "message" {
            let _ = write!(self.buf, "{value:?}");
        } else {
            let _ = write!(self.buf, " {}={:?}", field.name(), value);
        }
    }
}

/// Routes events to the local syslog daemon at the matching priority.
struct SyslogLayer {
    logger: Mutex<Logger<LoggerBackend, Formatter3164>>,
}

impl<S: Subscriber> Layer<S> for SyslogLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = MessageVisitor::default();
        event.record(&mut message);

        let Ok(mut logger) = self.logger.lock() else {
            return;
        };

        // Emission must never fail or panic; transport errors are dropped.
        let level = *event.metadata().level();
        let _ = if level == Level::ERROR {
            logger.err(&message.buf)
        } else if level == Level::WARN {
            logger.warning(&message.buf)
        } else if level == Level::INFO {
            logger.info(&message.buf)
        } else {
            logger.debug(&message.buf)
        };
    }
}

/// Renders `[<priority>] <ident>: <message>` diagnostic lines.
struct DiagnosticFormat {
    ident: String,
}

impl<S, N> FormatEvent<S, N> for DiagnosticFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let level = *event.metadata().level();
        write!(writer, "[{}] {}: ", priority(level), self.ident)?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_mapping() {
        assert_eq!(priority(Level::ERROR), 3);
        assert_eq!(priority(Level::WARN), 4);
        assert_eq!(priority(Level::INFO), 6);
        assert_eq!(priority(Level::DEBUG), 7);
        assert_eq!(priority(Level::TRACE), 7);
    }

    /// Scratch subscriber exposing events to [`MessageVisitor`] assertions.
    struct Capture(std::sync::Arc<std::sync::Mutex<String>>);

    impl Subscriber for Capture {
        fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
            true
        }
        fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }
        fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}
        fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}
        fn event(&self, event: &Event<'_>) {
            let mut visitor = MessageVisitor::default();
            event.record(&mut visitor);
            *self.0.lock().unwrap() = visitor.buf;
        }
        fn enter(&self, _: &tracing::span::Id) {}
        fn exit(&self, _: &tracing::span::Id) {}
    }

    #[test]
    fn test_message_visitor_collects_fields() {
        let out = std::sync::Arc::new(std::sync::Mutex::new(String::new()));
        let dispatch = tracing::Dispatch::new(Capture(std::sync::Arc::clone(&out)));

        tracing::dispatcher::with_default(&dispatch, || {
            tracing::info!(attempt = 2, "retry scheduled");
        });

        let rendered = out.lock().unwrap().clone();
        assert!(rendered.starts_with("retry scheduled"));
        assert!(rendered.contains("attempt=2"));
    }
}
