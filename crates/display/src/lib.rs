//! Dual-channel display multiplexing for bridge values.
//!
//! A [`DisplayMultiplexer`] renders a sequence of values into one
//! [`DisplayBundle`] (plain-text and rich-markup channels, per-value
//! renderings joined by newlines) and hands it to the display-sink
//! collaborator, either as a new entry or as an in-place update of an
//! existing slot. This is the only side-effecting operation in the core.

pub mod printer;
pub mod sink;

pub use printer::{JsonPretty, PrettyPrinter};
pub use sink::{DisplaySink, MemorySink};

use notebridge_types::{DisplayBundle, DisplayHandle};
use serde_json::Value;

/// Channel renderings of a single value, shaped by the requested flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Described {
    /// Only the plain-text channel was requested.
    Text(String),
    /// Only the rich-markup channel was requested.
    Html(String),
    /// Both channels were requested.
    Both { text: String, html: String },
}

impl Described {
    pub fn text(&self) -> Option<&str> {
        match self {
            Described::Text(text) | Described::Both { text, .. } => Some(text),
            Described::Html(_) => None,
        }
    }

    pub fn html(&self) -> Option<&str> {
        match self {
            Described::Html(html) | Described::Both { html, .. } => Some(html),
            Described::Text(_) => None,
        }
    }
}

/// Renders value sequences and pushes them at the display sink.
pub struct DisplayMultiplexer {
    printer: Box<dyn PrettyPrinter>,
    sink: Box<dyn DisplaySink>,
}

impl DisplayMultiplexer {
    /// Multiplexer over `sink` using the default JSON printer.
    pub fn new(sink: Box<dyn DisplaySink>) -> Self {
        Self::with_printer(Box::new(JsonPretty), sink)
    }

    /// Multiplexer with an explicit pretty-printing collaborator.
    pub fn with_printer(printer: Box<dyn PrettyPrinter>, sink: Box<dyn DisplaySink>) -> Self {
        Self { printer, sink }
    }

    /// Render one value on the requested channels.
    ///
    /// With a single flag set the bare channel string is returned; with
    /// both set, both channels. When neither flag is set the text channel
    /// is returned (callers should request at least one channel).
    pub fn describe(&self, value: &Value, want_text: bool, want_html: bool) -> Described {
        match (want_text, want_html) {
            (true, true) => Described::Both {
                text: self.printer.render_text(value),
                html: self.printer.render_html(value),
            },
            (false, true) => Described::Html(self.printer.render_html(value)),
            _ => Described::Text(self.printer.render_text(value)),
        }
    }

    /// Render `values` into one bundle and push it at the sink.
    ///
    /// With no values this is a no-op and the sink is not called. With a
    /// `target` the bundle replaces that slot's content in place; without
    /// one a new display entry is published. Channels are raw either way.
    pub fn render(&mut self, values: &[Value], target: Option<&DisplayHandle>) {
        if values.is_empty() {
            return;
        }

        let text = values
            .iter()
            .map(|v| self.printer.render_text(v))
            .collect::<Vec<_>>()
            .join("\n");
        let html = values
            .iter()
            .map(|v| self.printer.render_html(v))
            .collect::<Vec<_>>()
            .join("\n");
        let bundle = DisplayBundle::new(text, html);

        match target {
            Some(handle) => {
                tracing::debug!(handle = %handle, values = values.len(), "updating display slot");
                self.sink.update(handle, bundle);
            }
            None => {
                tracing::debug!(values = values.len(), "publishing display entry");
                self.sink.publish(bundle);
            }
        }
    }

}
