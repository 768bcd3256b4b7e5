//! soapml - SOAP 1.1 / 1.2 envelope builder
//!
//! # Quick Start
//!
//! ```
//! use soapml::{ElementHolder, SoapComponent, SoapVersion, soap_envelope};
//! # fn main() -> Result<(), soapml::Error> {
//! let envelope = soap_envelope(|env| {
//!     env.version(SoapVersion::V1_1).envelope_prefix("soap");
//!     env.namespaces(|ns| ns.ns("xmlns:ns", "http://example.com/ghost"));
//!     env.body(|body| {
//!         body.element("ns:deleteGhostResponse", |e| {
//!             e.element("ns:success", |s| s.content(true));
//!         });
//!         Ok(())
//!     })
//! })?;
//!
//! assert_eq!(
//!     envelope.to_pretty_string("  "),
//!     r#"<?xml version="1.0" encoding="UTF-8"?>
//! <soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:ns="http://example.com/ghost">
//!   <soap:Body>
//!     <ns:deleteGhostResponse>
//!       <ns:success>true</ns:success>
//!     </ns:deleteGhostResponse>
//!   </soap:Body>
//! </soap:Envelope>
//! "#
//! );
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod escape;
pub use escape::{escape_attr, escape_text};

pub mod writer;
pub use writer::{FormatConfig, XmlWriter};

pub mod version;
pub use version::SoapVersion;

pub mod content;
pub use content::{Child, Element, ElementHolder, ElementList, Section, SoapComponent};

pub mod fault;
pub use fault::{Fault, FaultCode, FaultReason, FaultScope, Soap11Fault, Soap12Fault};

pub mod envelope;
pub use envelope::{BodyBuilder, BodyContent, EnvelopeBuilder, Namespaces, soap_envelope};

pub mod serializer;
pub use serializer::{Serializer, SoapXml};

pub mod endpoint;
pub use endpoint::{
    EndpointModule, RestEndpointRegistry, SoapEndpointRegistry, SoapRequest, SoapResponse,
    rest_endpoints, soap_endpoints,
};

