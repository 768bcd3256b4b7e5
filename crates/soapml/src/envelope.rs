//! The envelope builder and the document render pass

pub mod body;
pub mod namespaces;

pub use body::{BodyBuilder, BodyContent};
pub use namespaces::Namespaces;

use std::fmt;

use tracing::debug;

use crate::content::{Section, SoapComponent};
use crate::error::{Error, Result};
use crate::fault::Fault;
use crate::serializer::SoapXml;
use crate::version::SoapVersion;
use crate::writer::{FormatConfig, XmlWriter};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Root builder for a SOAP envelope.
///
/// The body is set at most once: [`body`](Self::body) and
/// [`fault`](Self::fault) are mutually exclusive and the second call fails
/// with [`ErrorKind::DuplicateBody`](crate::ErrorKind::DuplicateBody).
/// Rendering never mutates the builder, so repeated renders are identical.
///
/// ```
/// use soapml::{ElementHolder, SoapComponent, SoapVersion, soap_envelope};
///
/// # fn main() -> soapml::Result<()> {
/// let envelope = soap_envelope(|env| {
///     env.version(SoapVersion::V1_1).envelope_prefix("soap");
///     env.namespaces(|ns| ns.ns("xmlns:ns", "http://example.com/api"));
///     env.body(|body| {
///         body.element("ns:Response", |e| e.content("OK"));
///         Ok(())
///     })
/// })?;
///
/// assert!(envelope.to_pretty_string("  ").contains("<soap:Body>"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EnvelopeBuilder {
    version: SoapVersion,
    envelope_prefix: String,
    schema_location: Option<String>,
    namespaces: Namespaces,
    header: Option<Section>,
    body: Option<BodyContent>,
}

impl Default for EnvelopeBuilder {
    fn default() -> Self {
        Self {
            version: SoapVersion::default(),
            envelope_prefix: Self::DEFAULT_PREFIX.to_string(),
            schema_location: None,
            namespaces: Namespaces::new(),
            header: None,
            body: None,
        }
    }
}

impl EnvelopeBuilder {
    pub const DEFAULT_PREFIX: &'static str = "soapenv";

    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the SOAP version. Set it before configuring the body or fault.
    pub fn version(&mut self, version: SoapVersion) -> &mut Self {
        self.version = version;
        self
    }

    /// Prefix bound to the envelope namespace (default `soapenv`)
    pub fn envelope_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.envelope_prefix = prefix.into();
        self
    }

    /// Overrides the envelope namespace URI the version would select
    pub fn schema_location(&mut self, uri: impl Into<String>) -> &mut Self {
        self.schema_location = Some(uri.into());
        self
    }

    /// Replaces the extra namespace declarations
    pub fn namespaces(&mut self, block: impl FnOnce(&mut Namespaces)) -> &mut Self {
        let mut namespaces = Namespaces::new();
        block(&mut namespaces);
        self.namespaces = namespaces;
        self
    }

    /// Configures the header section
    pub fn header(&mut self, block: impl FnOnce(&mut Section)) -> &mut Self {
        let mut header = Section::new();
        block(&mut header);
        self.header = Some(header);
        self
    }

    /// Configures the body with ordinary elements
    pub fn body(&mut self, block: impl FnOnce(&mut BodyBuilder) -> Result<()>) -> Result<()> {
        self.check_body_not_set("body")?;
        let mut body = BodyBuilder::new(self.version);
        block(&mut body)?;
        self.body = Some(BodyContent::Elements(body));
        Ok(())
    }

    /// Configures the whole body as a fault shaped by the current version
    pub fn fault(&mut self, block: impl FnOnce(&mut Fault) -> Result<()>) -> Result<()> {
        self.check_body_not_set("fault")?;
        let mut fault = self.version.fault_builder();
        block(&mut fault)?;
        self.body = Some(BodyContent::Fault(fault));
        Ok(())
    }

    fn check_body_not_set(&self, method: &str) -> Result<()> {
        if self.body.is_some() {
            debug!(method, "rejecting second body configuration");
            return Err(Error::duplicate_body());
        }
        Ok(())
    }

    pub const fn soap_version(&self) -> SoapVersion {
        self.version
    }

    pub fn prefix(&self) -> &str {
        &self.envelope_prefix
    }

    pub fn body_content(&self) -> Option<&BodyContent> {
        self.body.as_ref()
    }

    /// Namespace URI bound to the envelope prefix
    pub fn namespace_uri(&self) -> &str {
        self.schema_location
            .as_deref()
            .unwrap_or_else(|| self.version.namespace_uri())
    }

    /// Renders the full document
    pub fn render(&self, config: &FormatConfig) -> String {
        debug!(
            version = %self.version,
            prefix = %self.envelope_prefix,
            pretty = config.pretty,
            "rendering envelope"
        );
        let mut w = XmlWriter::new(config);
        w.push(XML_DECLARATION);
        w.newline();
        self.write_envelope(&mut w, 0);
        debug!(bytes = w.len(), "envelope rendered");
        w.finish()
    }

    /// Renders into the [`SoapXml`] wrapper
    pub fn to_xml(&self, pretty: bool, indent: &str) -> SoapXml {
        let config = FormatConfig {
            pretty,
            indent: indent.to_string(),
        };
        SoapXml::new(self.render(&config))
    }

    fn write_envelope(&self, w: &mut XmlWriter<'_>, depth: usize) {
        let prefix = self.envelope_prefix.as_str();

        w.pad(depth);
        w.push(&format!(
            "<{prefix}:Envelope xmlns:{prefix}=\"{}\"",
            self.namespace_uri()
        ));
        for (attribute, uri) in self.namespaces.iter() {
            w.push(&format!(" {attribute}=\"{uri}\""));
        }
        w.push_char('>');
        w.newline();

        if let Some(header) = &self.header {
            header.write_wrapped(w, &format!("{prefix}:Header"), depth + 1);
        }

        let body_tag = format!("{prefix}:Body");
        w.open(depth + 1, &body_tag);
        if let Some(body) = &self.body {
            body.write(w, prefix, depth + 2);
        }
        w.close(depth + 1, &body_tag);

        w.close(depth, &format!("{prefix}:Envelope"));
    }
}

impl SoapComponent for EnvelopeBuilder {
    fn write_to(&self, w: &mut XmlWriter<'_>, depth: usize) {
        w.push(XML_DECLARATION);
        w.newline();
        self.write_envelope(w, depth);
    }

    fn render(&self, config: &FormatConfig) -> String {
        Self::render(self, config)
    }
}

impl fmt::Display for EnvelopeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_compact_string())
    }
}

/// Builds an envelope with the configuration closure.
///
/// ```
/// use soapml::{FaultScope, SoapComponent, SoapVersion, soap_envelope};
///
/// # fn main() -> soapml::Result<()> {
/// let envelope = soap_envelope(|env| {
///     env.version(SoapVersion::V1_2).envelope_prefix("env");
///     env.fault(|f| {
///         f.code("env:Receiver")?;
///         f.reason(|r| r.text("Internal ghost registry unavailable"))
///     })
/// })?;
///
/// assert!(envelope
///     .to_compact_string()
///     .contains(r#"<env:Text xml:lang="en">Internal ghost registry unavailable</env:Text>"#));
/// # Ok(())
/// # }
/// ```
pub fn soap_envelope(
    block: impl FnOnce(&mut EnvelopeBuilder) -> Result<()>,
) -> Result<EnvelopeBuilder> {
    let mut envelope = EnvelopeBuilder::new();
    block(&mut envelope)?;
    Ok(envelope)
}
