//! Version-specific SOAP fault structures behind one configuration surface
//!
//! SOAP 1.1 faults use `faultcode`, `faultstring`, `faultactor`, `detail`.
//! SOAP 1.2 faults use `Code`, `Reason`, `Node`, `Role`, `Detail`.
//!
//! The configuration closure handed to callers is the same for both
//! versions because the version is only known at the envelope. Invoking an
//! operation that belongs to the other version fails with
//! [`ErrorKind::VersionMismatch`](crate::ErrorKind::VersionMismatch) at call
//! time.

pub mod code;
pub mod reason;
pub mod soap11;
pub mod soap12;

pub use code::FaultCode;
pub use reason::FaultReason;
pub use soap11::Soap11Fault;
pub use soap12::Soap12Fault;

use crate::content::Section;
use crate::error::{Error, Result};
use crate::version::SoapVersion;
use crate::writer::XmlWriter;

/// Fault configuration operations for both SOAP versions.
///
/// Every operation defaults to a version-mismatch error; each fault shape
/// overrides the operations its version supports.
pub trait FaultScope {
    /// Configures the detail section (both versions)
    fn detail(&mut self, block: impl FnOnce(&mut Section)) -> Result<()>;

    /// SOAP 1.1 fault code, e.g. `soap:Server`
    fn fault_code(&mut self, _code: impl Into<String>) -> Result<()> {
        Err(Error::version_mismatch("fault_code", SoapVersion::V1_1))
    }

    /// SOAP 1.1 human-readable description
    fn fault_string(&mut self, _reason: impl Into<String>) -> Result<()> {
        Err(Error::version_mismatch("fault_string", SoapVersion::V1_1))
    }

    /// SOAP 1.1 URI of the actor that caused the fault
    fn fault_actor(&mut self, _actor: impl Into<String>) -> Result<()> {
        Err(Error::version_mismatch("fault_actor", SoapVersion::V1_1))
    }

    /// SOAP 1.2 fault code without subcodes, e.g. `env:Receiver`
    fn code(&mut self, _value: impl Into<String>) -> Result<()> {
        Err(Error::version_mismatch("code", SoapVersion::V1_2))
    }

    /// SOAP 1.2 fault code with subcodes
    fn code_with(&mut self, _block: impl FnOnce(&mut FaultCode)) -> Result<()> {
        Err(Error::version_mismatch("code_with", SoapVersion::V1_2))
    }

    /// SOAP 1.2 reason text and language
    fn reason(&mut self, _block: impl FnOnce(&mut FaultReason)) -> Result<()> {
        Err(Error::version_mismatch("reason", SoapVersion::V1_2))
    }

    /// SOAP 1.2 URI of the node that generated the fault
    fn node(&mut self, _node: impl Into<String>) -> Result<()> {
        Err(Error::version_mismatch("node", SoapVersion::V1_2))
    }

    /// SOAP 1.2 URI of the role the node was acting in
    fn role(&mut self, _role: impl Into<String>) -> Result<()> {
        Err(Error::version_mismatch("role", SoapVersion::V1_2))
    }
}

/// Version-specific rendering of the content inside `<prefix:Fault>`
pub(crate) trait FaultBody {
    fn write_body(&self, w: &mut XmlWriter<'_>, prefix: &str, depth: usize);
}

/// A fault of either SOAP version
#[derive(Clone, Debug, PartialEq)]
pub enum Fault {
    V1_1(Soap11Fault),
    V1_2(Soap12Fault),
}

impl Fault {
    pub const fn version(&self) -> SoapVersion {
        match self {
            Self::V1_1(_) => SoapVersion::V1_1,
            Self::V1_2(_) => SoapVersion::V1_2,
        }
    }

    pub(crate) fn write(&self, w: &mut XmlWriter<'_>, prefix: &str, depth: usize) {
        let tag = format!("{prefix}:Fault");
        w.open(depth, &tag);
        match self {
            Self::V1_1(fault) => fault.write_body(w, prefix, depth + 1),
            Self::V1_2(fault) => fault.write_body(w, prefix, depth + 1),
        }
        w.close(depth, &tag);
    }
}

impl FaultScope for Fault {
    fn detail(&mut self, block: impl FnOnce(&mut Section)) -> Result<()> {
        match self {
            Self::V1_1(fault) => fault.detail(block),
            Self::V1_2(fault) => fault.detail(block),
        }
    }

    fn fault_code(&mut self, code: impl Into<String>) -> Result<()> {
        match self {
            Self::V1_1(fault) => fault.fault_code(code),
            Self::V1_2(fault) => fault.fault_code(code),
        }
    }

    fn fault_string(&mut self, reason: impl Into<String>) -> Result<()> {
        match self {
            Self::V1_1(fault) => fault.fault_string(reason),
            Self::V1_2(fault) => fault.fault_string(reason),
        }
    }

    fn fault_actor(&mut self, actor: impl Into<String>) -> Result<()> {
        match self {
            Self::V1_1(fault) => fault.fault_actor(actor),
            Self::V1_2(fault) => fault.fault_actor(actor),
        }
    }

    fn code(&mut self, value: impl Into<String>) -> Result<()> {
        match self {
            Self::V1_1(fault) => fault.code(value),
            Self::V1_2(fault) => fault.code(value),
        }
    }

    fn code_with(&mut self, block: impl FnOnce(&mut FaultCode)) -> Result<()> {
        match self {
            Self::V1_1(fault) => fault.code_with(block),
            Self::V1_2(fault) => fault.code_with(block),
        }
    }

    fn reason(&mut self, block: impl FnOnce(&mut FaultReason)) -> Result<()> {
        match self {
            Self::V1_1(fault) => fault.reason(block),
            Self::V1_2(fault) => fault.reason(block),
        }
    }

    fn node(&mut self, node: impl Into<String>) -> Result<()> {
        match self {
            Self::V1_1(fault) => fault.node(node),
            Self::V1_2(fault) => fault.node(node),
        }
    }

    fn role(&mut self, role: impl Into<String>) -> Result<()> {
        match self {
            Self::V1_1(fault) => fault.role(role),
            Self::V1_2(fault) => fault.role(role),
        }
    }
}

/// Writes the detail wrapper when a detail was configured
pub(crate) fn write_detail(
    detail: Option<&Section>,
    w: &mut XmlWriter<'_>,
    tag: &str,
    depth: usize,
) {
    if let Some(detail) = detail {
        detail.write_wrapped(w, tag, depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ElementHolder;
    use crate::error::ErrorKind;
    use crate::writer::FormatConfig;

    fn render(fault: &Fault, prefix: &str) -> String {
        let config = FormatConfig::compact();
        let mut w = XmlWriter::new(&config);
        fault.write(&mut w, prefix, 0);
        w.finish()
    }

    #[test]
    fn test_soap12_methods_fail_on_soap11() {
        let mut fault = SoapVersion::V1_1.fault_builder();
        let err = fault.code("env:Receiver").err();
        assert_eq!(
            err.map(|e| e.kind().clone()),
            Some(ErrorKind::VersionMismatch {
                method: "code",
                required: SoapVersion::V1_2
            })
        );
        assert!(fault.code_with(|_| {}).is_err());
        assert!(fault.reason(|_| {}).is_err());
        assert!(fault.node("n").is_err());
        assert!(fault.role("r").is_err());
    }

    #[test]
    fn test_soap11_methods_fail_on_soap12() {
        let mut fault = SoapVersion::V1_2.fault_builder();
        let err = fault.fault_code("soap:Server").err();
        assert_eq!(
            err.map(|e| e.to_string()),
            Some("fault_code requires SOAP 1.1".to_string())
        );
        assert!(fault.fault_string("s").is_err());
        assert!(fault.fault_actor("a").is_err());
    }

    #[test]
    fn test_detail_is_shared() -> Result<()> {
        for version in [SoapVersion::V1_1, SoapVersion::V1_2] {
            let mut fault = version.fault_builder();
            fault.detail(|d| d.element("errorCode", |e| e.content("E1")))?;
            assert_eq!(fault.version(), version);
        }
        Ok(())
    }

    #[test]
    fn test_failed_call_leaves_fault_untouched() {
        let mut fault = SoapVersion::V1_2.fault_builder();
        let _ = fault.fault_code("soap:Server");
        assert_eq!(render(&fault, "env"), "<env:Fault></env:Fault>");
    }

    #[test]
    fn test_wrapper_uses_envelope_prefix() -> Result<()> {
        let mut fault = SoapVersion::V1_1.fault_builder();
        fault.fault_code("SOAP-ENV:Client")?;
        assert_eq!(
            render(&fault, "SOAP-ENV"),
            "<SOAP-ENV:Fault><faultcode>SOAP-ENV:Client</faultcode></SOAP-ENV:Fault>"
        );
        Ok(())
    }
}
