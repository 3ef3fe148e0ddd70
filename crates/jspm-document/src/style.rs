//! Formatting style detection so rewrites keep the file's look

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

use crate::Result;

const DEFAULT_INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Style {
    indent: String,
    trailing_newline: bool,
    crlf: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            trailing_newline: true,
            crlf: false,
        }
    }
}

impl Style {
    /// Take the indentation of the first indented line and the line endings
    /// of `source`.
    pub(crate) fn detect(source: &str) -> Self {
        let indent = source
            .lines()
            .skip(1)
            .map(|line| {
                line.chars()
                    .take_while(|c| *c == ' ' || *c == '\t')
                    .collect::<String>()
            })
            .find(|indent| !indent.is_empty())
            .unwrap_or_else(|| DEFAULT_INDENT.to_string());

        Self {
            indent,
            trailing_newline: source.ends_with('\n'),
            crlf: source.contains("\r\n"),
        }
    }

    pub(crate) fn render(&self, root: &Map<String, Value>) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(self.indent.as_bytes());
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        root.serialize(&mut serializer)?;

        let mut text = String::from_utf8_lossy(&buf).into_owned();
        if self.trailing_newline {
            text.push('\n');
        }
        if self.crlf {
            text = text.replace('\n', "\r\n");
        }
        Ok(text)
    }
}
