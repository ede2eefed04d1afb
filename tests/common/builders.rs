#![allow(dead_code)]

use cors_filter::constants::method;
use cors_filter::{CorsFilter, FilterDecision, RequestContext};

#[derive(Default)]
pub struct FilterBuilder {
    params: Vec<(String, String)>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> CorsFilter {
        CorsFilter::from_params(
            self.params
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        )
    }
}

pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
    connection: Vec<String>,
    upgrade: Vec<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
    target: String,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            origin: None,
            connection: Vec::new(),
            upgrade: Vec::new(),
            request_method: None,
            request_headers: None,
            target: "/resource".into(),
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn connection(mut self, value: impl Into<String>) -> Self {
        self.connection.push(value.into());
        self
    }

    pub fn upgrade(mut self, value: impl Into<String>) -> Self {
        self.upgrade.push(value.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn decide(&self, filter: &CorsFilter) -> FilterDecision {
        let connection: Vec<&str> = self.connection.iter().map(String::as_str).collect();
        let upgrade: Vec<&str> = self.upgrade.iter().map(String::as_str).collect();
        let request = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            connection: &connection,
            upgrade: &upgrade,
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
            target: &self.target,
        };
        filter.decide(&request)
    }
}

pub fn filter() -> FilterBuilder {
    FilterBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}
