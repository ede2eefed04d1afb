use crate::classify::{Classification, classify};
use crate::config::FilterConfig;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::request::RequestContext;
use crate::result::{CorsOutcome, FilterDecision};
use tracing::debug;

/// Core CORS decision engine.
///
/// A filter instance is immutable after construction and safe to share
/// across concurrently handled requests; reconfiguration is building a new
/// instance and swapping it in whole.
pub struct CorsFilter {
    config: FilterConfig,
}

impl CorsFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Convenience constructor from string-keyed options; never fails, see
    /// [`FilterConfig::from_params`].
    pub fn from_params<'a, I>(params: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::new(FilterConfig::from_params(params))
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Runs the full classification-and-header-decision sequence for one
    /// request. Pure with respect to the request: no I/O, no shared state.
    pub fn decide(&self, request: &RequestContext<'_>) -> FilterDecision {
        match classify(request, &self.config) {
            Classification::PassThrough => FilterDecision::PassThrough,
            Classification::Simple { origin } => FilterDecision::Simple(CorsOutcome {
                headers: self.simple_headers(origin).into_headers(),
                forward: true,
            }),
            Classification::Preflight { origin } => FilterDecision::Preflight(CorsOutcome {
                headers: self.preflight_headers(request, origin).into_headers(),
                forward: self.config.chain_preflight,
            }),
        }
    }

    fn simple_headers(&self, origin: &str) -> HeaderCollection {
        let builder = HeaderBuilder::new(&self.config);
        let mut headers = builder.build_origin_header(origin);
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers_header());
        headers
    }

    /// Preflight validation fails closed: a disallowed method or requested
    /// header yields an empty header set, which denies access purely by the
    /// absence of permissive headers.
    fn preflight_headers(
        &self,
        request: &RequestContext<'_>,
        origin: &str,
    ) -> HeaderCollection {
        let requested_method = request.access_control_request_method.unwrap_or("");
        if !self.config.allowed_methods.allows(requested_method) {
            debug!(
                target_uri = request.target,
                method = requested_method,
                "preflight method is not among allowed methods"
            );
            return HeaderCollection::new();
        }

        if let Some(requested_headers) = request.access_control_request_headers
            && !self.config.allowed_headers.allows_all(requested_headers)
        {
            debug!(
                target_uri = request.target,
                headers = requested_headers,
                "preflight headers are not among allowed headers"
            );
            return HeaderCollection::new();
        }

        let builder = HeaderBuilder::new(&self.config);
        let mut headers = builder.build_origin_header(origin);
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_max_age_header());
        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers_header());
        headers
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;
