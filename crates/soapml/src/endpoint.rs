//! Endpoint registries for hosts that serve mocked SOAP and REST traffic
//!
//! Nothing here performs I/O. Registries collect handler definitions in
//! registration order and a host resolves incoming requests against them.

pub mod module;
pub mod rest;
pub mod soap;

pub use module::EndpointModule;
pub use rest::{
    DynamicHandler, DynamicRequest, DynamicResponse, HttpMethod, ResponseBuilder, ResponseOptions,
    RestEndpointDefinition, RestEndpointRegistry, rest_endpoints,
};
pub use soap::{
    SoapEndpointDefinition, SoapEndpointRegistry, SoapHandler, SoapRequest, SoapResponse,
    soap_endpoints,
};
