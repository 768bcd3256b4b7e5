//! SOAP operations keyed by path and SOAPAction

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::envelope::EnvelopeBuilder;
use crate::writer::FormatConfig;

pub const CONTENT_TYPE: &str = "Content-Type";

/// Incoming SOAP request as seen by a handler
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoapRequest {
    /// Header name to every value received for it
    pub headers: IndexMap<String, Vec<String>>,
    pub soap_action: String,
    pub body: Option<String>,
}

impl SoapRequest {
    pub fn new(soap_action: impl Into<String>, body: Option<String>) -> Self {
        Self {
            headers: IndexMap::new(),
            soap_action: soap_action.into(),
            body,
        }
    }

    /// First value of a header, matched case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .and_then(|(_, values)| values.first())
            .map(String::as_str)
    }
}

/// Response produced by a [`SoapHandler`]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoapResponse {
    pub status: u16,
    pub headers: IndexMap<String, String>,
    pub body: Option<String>,
}

impl Default for SoapResponse {
    fn default() -> Self {
        Self {
            status: 200,
            headers: IndexMap::new(),
            body: None,
        }
    }
}

impl SoapResponse {
    /// 200 response carrying `xml`
    pub fn ok(xml: impl Into<String>) -> Self {
        Self {
            body: Some(xml.into()),
            ..Self::default()
        }
    }

    /// 200 response carrying the rendered envelope, with the content type of
    /// its SOAP version
    pub fn from_envelope(envelope: &EnvelopeBuilder, config: &FormatConfig) -> Self {
        let mut response = Self::ok(envelope.render(config));
        response.headers.insert(
            CONTENT_TYPE.to_string(),
            envelope.soap_version().content_type().to_string(),
        );
        response
    }

    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Turns a [`SoapRequest`] into a [`SoapResponse`].
///
/// Implemented for every `Fn(&SoapRequest) -> SoapResponse` closure.
pub trait SoapHandler: Send + Sync {
    fn handle(&self, request: &SoapRequest) -> SoapResponse;
}

impl<F> SoapHandler for F
where
    F: Fn(&SoapRequest) -> SoapResponse + Send + Sync,
{
    fn handle(&self, request: &SoapRequest) -> SoapResponse {
        self(request)
    }
}

/// A registered SOAP operation
#[derive(Clone)]
pub struct SoapEndpointDefinition {
    pub path: String,
    pub soap_action: String,
    pub handler: Arc<dyn SoapHandler>,
}

impl SoapEndpointDefinition {
    pub fn handle(&self, request: &SoapRequest) -> SoapResponse {
        self.handler.handle(request)
    }
}

impl fmt::Debug for SoapEndpointDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoapEndpointDefinition")
            .field("path", &self.path)
            .field("soap_action", &self.soap_action)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, Default)]
pub struct SoapEndpointRegistry {
    endpoints: Vec<SoapEndpointDefinition>,
}

impl SoapEndpointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an operation served at `path` for the given SOAPAction
    pub fn operation(
        &mut self,
        path: impl Into<String>,
        soap_action: impl Into<String>,
        handler: impl SoapHandler + 'static,
    ) -> &mut Self {
        let definition = SoapEndpointDefinition {
            path: path.into(),
            soap_action: soap_action.into(),
            handler: Arc::new(handler),
        };
        debug!(
            path = %definition.path,
            soap_action = %definition.soap_action,
            "registered SOAP operation"
        );
        self.endpoints.push(definition);
        self
    }

    pub fn endpoints(&self) -> &[SoapEndpointDefinition] {
        &self.endpoints
    }

    /// First operation registered for `path` and `soap_action`.
    ///
    /// Surrounding quotes on the action, as sent in a `SOAPAction` header,
    /// are ignored.
    pub fn find(&self, path: &str, soap_action: &str) -> Option<&SoapEndpointDefinition> {
        let action = soap_action.trim_matches('"');
        self.endpoints
            .iter()
            .find(|endpoint| endpoint.path == path && endpoint.soap_action == action)
    }
}

/// Builds a registry with the configuration closure
pub fn soap_endpoints(block: impl FnOnce(&mut SoapEndpointRegistry)) -> SoapEndpointRegistry {
    let mut registry = SoapEndpointRegistry::new();
    block(&mut registry);
    registry
}
