use crate::config::FilterConfig;
use crate::constants::{SIMPLE_METHODS, method};
use crate::request::RequestContext;
use tracing::debug;

/// Outcome of request classification. `Simple` covers both simple and
/// non-simple actual requests; the distinction only affects logging, never
/// the emitted headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<'a> {
    /// Not a cross-origin request the filter should touch; forward unchanged.
    PassThrough,
    Simple { origin: &'a str },
    Preflight { origin: &'a str },
}

/// Classifies an inbound request against the configuration.
///
/// Order matters: the Origin check and the WebSocket-upgrade exemption run
/// before origin matching, and an origin mismatch degrades to pass-through
/// with no header changes.
pub fn classify<'a>(
    request: &RequestContext<'a>,
    config: &FilterConfig,
) -> Classification<'a> {
    let Some(origin) = request.origin else {
        return Classification::PassThrough;
    };

    if request.is_websocket_upgrade() {
        debug!(
            target_uri = request.target,
            "websocket upgrade handshake, leaving request untouched"
        );
        return Classification::PassThrough;
    }

    if !config.allowed_origins.matches(origin) {
        debug!(
            target_uri = request.target,
            origin, "cross-origin request does not match allowed origins"
        );
        return Classification::PassThrough;
    }

    if is_preflight(request) {
        debug!(
            target_uri = request.target,
            "cross-origin request is a preflight request"
        );
        Classification::Preflight { origin }
    } else if is_simple(request) {
        debug!(
            target_uri = request.target,
            "cross-origin request is a simple cross-origin request"
        );
        Classification::Simple { origin }
    } else {
        debug!(
            target_uri = request.target,
            "cross-origin request is a non-simple cross-origin request"
        );
        Classification::Simple { origin }
    }
}

fn is_preflight(request: &RequestContext<'_>) -> bool {
    request.method.eq_ignore_ascii_case(method::OPTIONS)
        && request.access_control_request_method.is_some()
}

fn is_simple(request: &RequestContext<'_>) -> bool {
    SIMPLE_METHODS.contains(&request.method)
        && request.access_control_request_method.is_none()
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
