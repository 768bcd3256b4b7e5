//! REST endpoints served next to the SOAP operations

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Value, json};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Incoming REST request as seen by a handler
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynamicRequest {
    pub headers: IndexMap<String, Vec<String>>,
    /// Values bound to `{name}` segments of the endpoint path
    pub path_variables: IndexMap<String, String>,
    pub query_params: IndexMap<String, Vec<String>>,
    pub body: Option<String>,
}

impl DynamicRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path_variable(&self, name: &str) -> Option<&str> {
        self.path_variables.get(name).map(String::as_str)
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynamicResponse {
    pub status: u16,
    pub headers: IndexMap<String, String>,
    pub body: Option<Value>,
}

impl Default for DynamicResponse {
    fn default() -> Self {
        Self {
            status: 200,
            headers: IndexMap::new(),
            body: None,
        }
    }
}

impl DynamicResponse {
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }
}

/// Incremental construction of a [`DynamicResponse`]
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseBuilder {
    pub status: u16,
    pub body: Option<Value>,
    headers: IndexMap<String, String>,
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self {
            status: 200,
            body: None,
            headers: IndexMap::new(),
        }
    }
}

impl ResponseBuilder {
    pub fn status(&mut self, status: u16) -> &mut Self {
        self.status = status;
        self
    }

    pub fn body(&mut self, body: Value) -> &mut Self {
        self.body = Some(body);
        self
    }

    pub fn header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn headers<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in pairs {
            self.headers.insert(name.into(), value.into());
        }
        self
    }

    /// Applies conditional outcomes; within one call the first matching
    /// failure wins and later options are ignored
    pub fn options(&mut self, block: impl FnOnce(&mut ResponseOptions<'_>)) -> &mut Self {
        let mut options = ResponseOptions {
            builder: self,
            failed: false,
        };
        block(&mut options);
        self
    }

    pub fn build(&self) -> DynamicResponse {
        DynamicResponse {
            status: self.status,
            headers: self.headers.clone(),
            body: self.body.clone(),
        }
    }
}

/// Conditional outcomes evaluated in order by [`ResponseBuilder::options`]
#[derive(Debug)]
pub struct ResponseOptions<'a> {
    builder: &'a mut ResponseBuilder,
    failed: bool,
}

impl ResponseOptions<'_> {
    /// 400 with `body` when `check` holds
    pub fn bad_request(&mut self, check: bool, body: Option<Value>) {
        self.fail(check, 400, body);
    }

    /// 404 with `body` when `check` holds
    pub fn not_found(&mut self, check: bool, body: Option<Value>) {
        self.fail(check, 404, body);
    }

    /// 200 with `body` when `check` holds and nothing failed before
    pub fn ok(&mut self, body: Option<Value>, check: bool) {
        if !self.failed && check {
            self.builder.status = 200;
            self.builder.body = body;
        }
    }

    pub const fn has_failed(&self) -> bool {
        self.failed
    }

    fn fail(&mut self, check: bool, status: u16, body: Option<Value>) {
        if !self.failed && check {
            self.failed = true;
            self.builder.status = status;
            self.builder.body = body;
        }
    }
}

/// Turns a [`DynamicRequest`] into a [`DynamicResponse`].
///
/// Implemented for every `Fn(&DynamicRequest) -> DynamicResponse` closure.
pub trait DynamicHandler: Send + Sync {
    fn handle(&self, request: &DynamicRequest) -> DynamicResponse;
}

impl<F> DynamicHandler for F
where
    F: Fn(&DynamicRequest) -> DynamicResponse + Send + Sync,
{
    fn handle(&self, request: &DynamicRequest) -> DynamicResponse {
        self(request)
    }
}

/// A registered REST endpoint
#[derive(Clone)]
pub struct RestEndpointDefinition {
    pub method: HttpMethod,
    /// Path pattern; `{name}` segments match any single non-empty segment
    pub path: String,
    pub handler: Arc<dyn DynamicHandler>,
}

impl RestEndpointDefinition {
    /// Variables bound by matching `path` against the pattern, or `None`
    /// when the path does not match
    pub fn match_path(&self, path: &str) -> Option<IndexMap<String, String>> {
        let mut variables = IndexMap::new();
        let mut pattern = segments(&self.path);
        let mut actual = segments(path);
        loop {
            match (pattern.next(), actual.next()) {
                (None, None) => return Some(variables),
                (Some(expected), Some(segment)) => {
                    match expected.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                        Some(name) => {
                            variables.insert(name.to_string(), segment.to_string());
                        }
                        None if expected == segment => {}
                        None => return None,
                    }
                }
                _ => return None,
            }
        }
    }

    pub fn handle(&self, request: &DynamicRequest) -> DynamicResponse {
        self.handler.handle(request)
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

impl fmt::Debug for RestEndpointDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestEndpointDefinition")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, Default)]
pub struct RestEndpointRegistry {
    endpoints: Vec<RestEndpointDefinition>,
}

impl RestEndpointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        method: HttpMethod,
        path: impl Into<String>,
        handler: impl DynamicHandler + 'static,
    ) -> &mut Self {
        let definition = RestEndpointDefinition {
            method,
            path: path.into(),
            handler: Arc::new(handler),
        };
        debug!(method = %definition.method, path = %definition.path, "registered REST endpoint");
        self.endpoints.push(definition);
        self
    }

    pub fn get(
        &mut self,
        path: impl Into<String>,
        handler: impl DynamicHandler + 'static,
    ) -> &mut Self {
        self.register(HttpMethod::Get, path, handler)
    }

    pub fn post(
        &mut self,
        path: impl Into<String>,
        handler: impl DynamicHandler + 'static,
    ) -> &mut Self {
        self.register(HttpMethod::Post, path, handler)
    }

    pub fn put(
        &mut self,
        path: impl Into<String>,
        handler: impl DynamicHandler + 'static,
    ) -> &mut Self {
        self.register(HttpMethod::Put, path, handler)
    }

    pub fn patch(
        &mut self,
        path: impl Into<String>,
        handler: impl DynamicHandler + 'static,
    ) -> &mut Self {
        self.register(HttpMethod::Patch, path, handler)
    }

    pub fn delete(
        &mut self,
        path: impl Into<String>,
        handler: impl DynamicHandler + 'static,
    ) -> &mut Self {
        self.register(HttpMethod::Delete, path, handler)
    }

    pub fn options(
        &mut self,
        path: impl Into<String>,
        handler: impl DynamicHandler + 'static,
    ) -> &mut Self {
        self.register(HttpMethod::Options, path, handler)
    }

    /// Registers an endpoint answering `status` with `body` whenever
    /// `condition` holds for the request, and 200 `{"status":"ok"}` otherwise
    pub fn error_on(
        &mut self,
        method: HttpMethod,
        path: impl Into<String>,
        status: u16,
        body: Option<Value>,
        condition: impl Fn(&DynamicRequest) -> bool + Send + Sync + 'static,
    ) -> &mut Self {
        self.register(method, path, move |request: &DynamicRequest| {
            if condition(request) {
                DynamicResponse {
                    status,
                    body: body.clone(),
                    ..DynamicResponse::default()
                }
            } else {
                Self::return_body(json!({ "status": "ok" }))
            }
        })
    }

    /// 200 response with `body`
    pub fn return_body(body: Value) -> DynamicResponse {
        DynamicResponse {
            body: Some(body),
            ..DynamicResponse::default()
        }
    }

    /// Empty response with `status`
    pub fn return_status(status: u16) -> DynamicResponse {
        DynamicResponse {
            status,
            ..DynamicResponse::default()
        }
    }

    pub fn return_response(block: impl FnOnce(&mut ResponseBuilder)) -> DynamicResponse {
        let mut builder = ResponseBuilder::default();
        block(&mut builder);
        builder.build()
    }

    pub fn endpoints(&self) -> &[RestEndpointDefinition] {
        &self.endpoints
    }

    /// First endpoint registered for `method` whose pattern matches `path`
    pub fn find(&self, method: HttpMethod, path: &str) -> Option<&RestEndpointDefinition> {
        self.endpoints
            .iter()
            .find(|endpoint| endpoint.method == method && endpoint.match_path(path).is_some())
    }
}

/// Builds a registry with the configuration closure
pub fn rest_endpoints(block: impl FnOnce(&mut RestEndpointRegistry)) -> RestEndpointRegistry {
    let mut registry = RestEndpointRegistry::new();
    block(&mut registry);
    registry
}
