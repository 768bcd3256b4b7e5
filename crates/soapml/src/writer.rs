//! Output configuration and the string writer shared by every render pass

use crate::escape::escape_text;

/// Configuration options for rendering
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatConfig {
    /// Whether to emit newlines and indentation
    pub pretty: bool,
    /// String repeated once per nesting level when `pretty` is set
    pub indent: String,
}

/// Compact output
impl Default for FormatConfig {
    fn default() -> Self {
        Self::compact()
    }
}

impl FormatConfig {
    pub const DEFAULT_INDENT: &'static str = "  ";

    /// Single-line output without any inserted whitespace
    pub fn compact() -> Self {
        Self {
            pretty: false,
            indent: String::new(),
        }
    }

    /// Indented output, two spaces per level
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            indent: Self::DEFAULT_INDENT.to_string(),
        }
    }

    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}

/// Forward-only XML string builder.
///
/// Every tag line goes through [`XmlWriter::pad`] and [`XmlWriter::newline`],
/// which are no-ops in compact mode. Nothing written is ever revisited.
#[derive(Debug)]
pub struct XmlWriter<'a> {
    out: String,
    config: &'a FormatConfig,
}

impl<'a> XmlWriter<'a> {
    pub fn new(config: &'a FormatConfig) -> Self {
        Self {
            out: String::new(),
            config,
        }
    }

    pub const fn is_pretty(&self) -> bool {
        self.config.pretty
    }

    /// Indentation for `depth` levels
    pub fn pad(&mut self, depth: usize) {
        if self.config.pretty {
            for _ in 0..depth {
                self.out.push_str(&self.config.indent);
            }
        }
    }

    pub fn newline(&mut self) {
        if self.config.pretty {
            self.out.push('\n');
        }
    }

    pub fn push(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub fn push_char(&mut self, c: char) {
        self.out.push(c);
    }

    /// A complete line: indentation, `s`, newline
    pub fn line(&mut self, depth: usize, s: &str) {
        self.pad(depth);
        self.push(s);
        self.newline();
    }

    /// `<tag>escaped text</tag>` on its own line
    pub fn text_element(&mut self, depth: usize, tag: &str, text: &str) {
        self.pad(depth);
        self.push_char('<');
        self.push(tag);
        self.push_char('>');
        self.push(&escape_text(text));
        self.push("</");
        self.push(tag);
        self.push_char('>');
        self.newline();
    }

    /// Opening tag line of a container element
    pub fn open(&mut self, depth: usize, tag: &str) {
        self.pad(depth);
        self.push_char('<');
        self.push(tag);
        self.push_char('>');
        self.newline();
    }

    /// Closing tag line of a container element
    pub fn close(&mut self, depth: usize, tag: &str) {
        self.pad(depth);
        self.push("</");
        self.push(tag);
        self.push_char('>');
        self.newline();
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn finish(self) -> String {
        self.out
    }
}
