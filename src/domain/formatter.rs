//! JSON value formatter for the response viewer
//!
//! Renders a decoded JSON value into indented, annotated segments. The layout is
//! two spaces per depth level, one element per line, commas between elements,
//! and `[]` / `{}` for empty containers.

use super::FormatError;
use serde::Serialize;
use serde_json::Value;

/// Annotation attached to a rendered segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Null,
    String,
    Number,
    Boolean,
    Key,
}

impl TokenKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            TokenKind::Null => "json-viewer-null",
            TokenKind::String => "json-viewer-string",
            TokenKind::Number => "json-viewer-number",
            TokenKind::Boolean => "json-viewer-boolean",
            TokenKind::Key => "json-viewer-key",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: Option<TokenKind>,
    pub text: String,
}

/// Output of [`format_value`]: an ordered list of segments.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Rendered {
    segments: Vec<Segment>,
}

impl Rendered {
    fn tagged(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment {
                kind: Some(kind),
                text: text.into(),
            }],
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        let mut rendered = Self::default();
        rendered.push_plain(text);
        rendered
    }

    fn push_plain(&mut self, text: impl Into<String>) {
        let text = text.into();
        // Merge adjacent plain text so the segment list stays short.
        if let Some(last) = self.segments.last_mut() {
            if last.kind.is_none() {
                last.text.push_str(&text);
                return;
            }
        }
        self.segments.push(Segment { kind: None, text });
    }

    fn append(&mut self, other: Rendered) {
        for segment in other.segments {
            match segment.kind {
                Some(_) => self.segments.push(segment),
                None => self.push_plain(segment.text),
            }
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Concatenated text without annotations.
    pub fn to_plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// HTML for a `<pre>` container; tagged segments become classed spans.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for segment in &self.segments {
            let escaped = escape_html(&segment.text);
            match segment.kind {
                Some(kind) => {
                    html.push_str(&format!(
                        r#"<span class="{}">{}</span>"#,
                        kind.css_class(),
                        escaped
                    ));
                }
                None => html.push_str(&escaped),
            }
        }
        html
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Formatter input: an already decoded value or raw text still to be parsed.
#[derive(Debug, Clone)]
pub enum JsonInput<'a> {
    Decoded(&'a Value),
    Raw(&'a str),
}

/// Render `input` from depth zero. Raw text that fails to parse yields
/// [`FormatError::InvalidJson`] instead of a partial render.
pub fn render(input: JsonInput<'_>) -> Result<Rendered, FormatError> {
    match input {
        JsonInput::Decoded(value) => Ok(format_value(value, 0)),
        JsonInput::Raw(text) => {
            let value: Value = serde_json::from_str(text).map_err(FormatError::invalid_json)?;
            Ok(format_value(&value, 0))
        }
    }
}

pub fn format_value(value: &Value, depth: usize) -> Rendered {
    match value {
        Value::Null => Rendered::tagged(TokenKind::Null, "null"),
        Value::String(s) => Rendered::tagged(TokenKind::String, format!("\"{}\"", s)),
        Value::Number(n) => Rendered::tagged(TokenKind::Number, n.to_string()),
        Value::Bool(b) => Rendered::tagged(TokenKind::Boolean, b.to_string()),
        Value::Array(items) => {
            if items.is_empty() {
                return Rendered::plain("[]");
            }
            let children = items.iter().map(|item| format_value(item, depth + 1));
            container('[', ']', children, depth)
        }
        Value::Object(entries) => {
            if entries.is_empty() {
                return Rendered::plain("{}");
            }
            let children = entries.iter().map(|(key, val)| {
                let mut entry = Rendered::tagged(TokenKind::Key, format!("\"{}\"", key));
                entry.push_plain(": ");
                entry.append(format_value(val, depth + 1));
                entry
            });
            container('{', '}', children, depth)
        }
    }
}

fn container(
    open: char,
    close: char,
    children: impl ExactSizeIterator<Item = Rendered>,
    depth: usize,
) -> Rendered {
    let inner_indent = "  ".repeat(depth + 1);
    let last = children.len().saturating_sub(1);

    let mut rendered = Rendered::plain(open.to_string());
    for (index, child) in children.enumerate() {
        rendered.push_plain(format!("\n{}", inner_indent));
        rendered.append(child);
        if index < last {
            rendered.push_plain(",");
        }
    }
    rendered.push_plain(format!("\n{}{}", "  ".repeat(depth), close));
    rendered
}

/// Re-indent a request body with two spaces. Used by the "Format JSON" action.
pub fn pretty_body(text: &str) -> Result<String, FormatError> {
    let value: Value = serde_json::from_str(text).map_err(FormatError::invalid_json)?;
    serde_json::to_string_pretty(&value).map_err(FormatError::invalid_json)
}
