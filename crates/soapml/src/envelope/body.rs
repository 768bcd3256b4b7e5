//! SOAP body content

use crate::content::{Child, ElementHolder, Section};
use crate::error::Result;
use crate::fault::Fault;
use crate::version::SoapVersion;
use crate::writer::XmlWriter;

/// Ordinary body content: elements in order, optionally followed by a fault.
///
/// ```
/// use soapml::{BodyBuilder, ElementHolder, SoapVersion};
///
/// let mut body = BodyBuilder::new(SoapVersion::V1_1);
/// body.element("ns:GetUserResponse", |e| {
///     e.element("name", |n| n.content("John Doe"));
/// });
/// assert!(body.fault_ref().is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BodyBuilder {
    version: SoapVersion,
    content: Section,
    fault: Option<Fault>,
}

impl BodyBuilder {
    pub fn new(version: SoapVersion) -> Self {
        Self {
            version,
            content: Section::new(),
            fault: None,
        }
    }

    pub const fn version(&self) -> SoapVersion {
        self.version
    }

    /// Attaches a fault rendered after the body's elements.
    ///
    /// The fault shape follows the envelope's version. A later call replaces
    /// the earlier fault.
    pub fn fault(&mut self, block: impl FnOnce(&mut Fault) -> Result<()>) -> Result<()> {
        let mut fault = self.version.fault_builder();
        block(&mut fault)?;
        self.fault = Some(fault);
        Ok(())
    }

    pub fn fault_ref(&self) -> Option<&Fault> {
        self.fault.as_ref()
    }

    pub(crate) fn write(&self, w: &mut XmlWriter<'_>, prefix: &str, depth: usize) {
        self.content.write_content(w, depth);
        if let Some(fault) = &self.fault {
            fault.write(w, prefix, depth);
        }
    }
}

impl ElementHolder for BodyBuilder {
    fn children(&self) -> &[Child] {
        self.content.children()
    }

    fn children_mut(&mut self) -> &mut Vec<Child> {
        self.content.children_mut()
    }
}

/// What the envelope body holds once configured
#[derive(Clone, Debug, PartialEq)]
pub enum BodyContent {
    Elements(BodyBuilder),
    Fault(Fault),
}

impl BodyContent {
    pub(crate) fn write(&self, w: &mut XmlWriter<'_>, prefix: &str, depth: usize) {
        match self {
            Self::Elements(body) => body.write(w, prefix, depth),
            Self::Fault(fault) => fault.write(w, prefix, depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::FaultScope;
    use crate::writer::FormatConfig;

    #[test]
    fn test_elements_then_fault() -> Result<()> {
        let mut body = BodyBuilder::new(SoapVersion::V1_1);
        body.fault(|f| f.fault_code("soap:Server"))?;
        body.element("ns:partial", |e| e.content("yes"));

        let config = FormatConfig::compact();
        let mut w = XmlWriter::new(&config);
        body.write(&mut w, "soap", 0);
        assert_eq!(
            w.finish(),
            "<ns:partial>yes</ns:partial>\
             <soap:Fault><faultcode>soap:Server</faultcode></soap:Fault>"
        );
        Ok(())
    }

    #[test]
    fn test_failed_fault_block_is_not_attached() {
        let mut body = BodyBuilder::new(SoapVersion::V1_2);
        let result = body.fault(|f| f.fault_actor("urn:actor"));
        assert!(result.is_err());
        assert!(body.fault_ref().is_none());
    }
}
