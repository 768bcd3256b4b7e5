//! Envelope serialization entry points

use std::fmt;

use crate::envelope::EnvelopeBuilder;
use crate::writer::FormatConfig;

/// Rendered SOAP XML document
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SoapXml(String);

impl SoapXml {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SoapXml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SoapXml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SoapXml> for String {
    fn from(xml: SoapXml) -> Self {
        xml.0
    }
}

/// Reusable render settings for envelopes.
///
/// Defaults to pretty output with a two-space indent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Serializer {
    pub pretty: bool,
    pub indent: String,
}

impl Default for Serializer {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: FormatConfig::DEFAULT_INDENT.to_string(),
        }
    }
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self {
            pretty: false,
            indent: String::new(),
        }
    }

    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn config(&self) -> FormatConfig {
        FormatConfig {
            pretty: self.pretty,
            indent: self.indent.clone(),
        }
    }

    pub fn serialize(&self, envelope: &EnvelopeBuilder) -> SoapXml {
        SoapXml(envelope.render(&self.config()))
    }
}
