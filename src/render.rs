//! Turning a reply into the text shown in the `result` element.

use std::io::Write;

use serde_json::Value;

use crate::api::{ApiResponse, Outcome};
use crate::error::ClientResult;

pub const ERROR_PREFIX: &str = "Error: ";

/// Destination for rendered text. Each call replaces whatever was shown before.
pub trait ResultSink {
    fn set_text(&mut self, text: &str) -> ClientResult<()>;
}

/// Prints each rendered text on its own line.
pub struct StdoutSink<W = std::io::Stdout> {
    out: W,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdoutSink<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultSink for StdoutSink<W> {
    fn set_text(&mut self, text: &str) -> ClientResult<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Keeps the last rendered text in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferSink {
    text: Option<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` until something has been rendered.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl ResultSink for BufferSink {
    fn set_text(&mut self, text: &str) -> ClientResult<()> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

/// `String(value)` for a JSON value.
///
/// Arrays join their elements with `,` (null elements become empty),
/// objects show as `[object Object]`, numbers use `Number#toString` form.
pub fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(x) => js_number(x),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Shortest round-trip digits, exponent form outside `[1e-6, 1e21)`.
fn js_number(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }

    let magnitude = x.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{x}");
    }

    let exp = format!("{x:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

/// What assigning the `result` field to `textContent` shows: absent and `null` clear it.
pub fn result_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(other) => js_string(other),
    }
}

/// What `"Error: " + message` shows: absent is the word `undefined`.
pub fn message_text(value: Option<&Value>) -> String {
    let message = match value {
        None => "undefined".to_string(),
        Some(other) => js_string(other),
    };
    format!("{ERROR_PREFIX}{message}")
}

/// The text a reply renders as.
pub fn render_text(response: &ApiResponse) -> String {
    match response.outcome() {
        Outcome::Success { result } => result_text(result.as_ref()),
        Outcome::Failure { message } => message_text(message.as_ref()),
    }
}

pub fn render(response: &ApiResponse, sink: &mut impl ResultSink) -> ClientResult<()> {
    sink.set_text(&render_text(response))
}
