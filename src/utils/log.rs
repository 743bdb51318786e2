//! Logging bootstrap.
//!
//! `tracing` events are forwarded to the browser console by [`ConsoleLayer`]
//! (errors to `console.error`, warnings to `console.warn`, and so on). Off
//! wasm, a `fmt` layer writing to stderr is installed instead. [`init`] is
//! called once from `main`; later calls are ignored.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

/// Where a formatted log line ends up.
pub type Sink = fn(Level, &str);

/// Layer writing one line per event: `LEVEL target: message key=value ...`.
pub struct ConsoleLayer {
    max_level: Level,
    sink: Sink,
}

impl ConsoleLayer {
    pub fn new(max_level: Level) -> Self {
        Self::with_sink(max_level, console_sink)
    }

    pub fn with_sink(max_level: Level, sink: Sink) -> Self {
        Self { max_level, sink }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        // More verbose levels compare greater.
        if *meta.level() > self.max_level {
            return;
        }

        let mut line = LineVisitor::default();
        event.record(&mut line);
        let text = format!(
            "{} {}: {}{}",
            meta.level(),
            meta.target(),
            line.message,
            line.fields
        );
        (self.sink)(*meta.level(), &text);
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn console_sink(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::log_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn console_sink(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Default verbosity: debug builds log everything down to DEBUG.
pub fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the global subscriber.
pub fn init(max_level: Level) {
    #[cfg(target_arch = "wasm32")]
    let installed = tracing_subscriber::registry()
        .with(ConsoleLayer::new(max_level))
        .try_init();

    #[cfg(not(target_arch = "wasm32"))]
    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::filter::LevelFilter::from_level(max_level)),
        )
        .try_init();

    if installed.is_err() {
        tracing::debug!("logging already initialised");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    thread_local! {
        static LINES: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    fn capture(level: Level, line: &str) {
        LINES.with(|l| l.borrow_mut().push((level, line.to_string())));
    }

    #[test]
    fn test_console_layer_formats_and_filters() {
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::with_sink(Level::INFO, capture));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(path = "math", status = 404, "listing failed");
            tracing::debug!("too verbose");
        });

        let lines = LINES.with(|l| l.borrow().clone());
        assert_eq!(lines.len(), 1);
        let (level, text) = &lines[0];
        assert_eq!(*level, Level::WARN);
        assert!(text.starts_with("WARN "));
        assert!(text.ends_with("listing failed path=math status=404"));
    }
}
