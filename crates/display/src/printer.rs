use serde_json::Value;

/// Pretty-printing collaborator: renders one value per channel.
///
/// The multiplexer treats implementations as black boxes with no knowledge
/// of their formatting rules.
pub trait PrettyPrinter {
    /// Structure-aware plain-text rendering.
    fn render_text(&self, value: &Value) -> String;

    /// Rich-markup rendering.
    fn render_html(&self, value: &Value) -> String;
}

/// Default printer: pretty JSON for the text channel, an escaped
/// `<pre>` block for the rich channel.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonPretty;

impl PrettyPrinter for JsonPretty {
    fn render_text(&self, value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    }

    fn render_html(&self, value: &Value) -> String {
        format!("<pre>{}</pre>", escape_html(&self.render_text(value)))
    }
}

/// Escape the five HTML-significant characters.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
