//! Pluggable groups of endpoints

use super::rest::RestEndpointRegistry;
use super::soap::SoapEndpointRegistry;

/// A reusable group of REST and SOAP endpoints.
///
/// Both hooks default to registering nothing, so a module only overrides the
/// side it serves.
///
/// ```
/// use soapml::endpoint::{
///     EndpointModule, RestEndpointRegistry, SoapEndpointRegistry, SoapRequest, SoapResponse,
/// };
///
/// struct Ghosts;
///
/// impl EndpointModule for Ghosts {
///     fn configure_soap(&self, registry: &mut SoapEndpointRegistry) {
///         registry.operation("/ws/ghost", "getGhost", |_: &SoapRequest| {
///             SoapResponse::ok("<ghost/>")
///         });
///     }
/// }
///
/// let mut rest = RestEndpointRegistry::new();
/// let mut soap = SoapEndpointRegistry::new();
/// Ghosts.install(&mut rest, &mut soap);
/// assert!(rest.endpoints().is_empty());
/// assert_eq!(soap.endpoints().len(), 1);
/// ```
pub trait EndpointModule {
    fn configure_rest(&self, _registry: &mut RestEndpointRegistry) {}

    fn configure_soap(&self, _registry: &mut SoapEndpointRegistry) {}

    /// Applies both hooks
    fn install(&self, rest: &mut RestEndpointRegistry, soap: &mut SoapEndpointRegistry) {
        self.configure_rest(rest);
        self.configure_soap(soap);
    }
}
