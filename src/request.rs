/// Borrowed view of the inbound request, the only request surface the filter
/// consumes. The host adapter fills it from whatever request object it has.
///
/// `connection` and `upgrade` carry every value of their headers because
/// those headers are legitimately multi-valued; the remaining headers are
/// single-valued lookups. `target` is used for diagnostics only.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub connection: &'a [&'a str],
    pub upgrade: &'a [&'a str],
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
    pub target: &'a str,
}

impl RequestContext<'_> {
    /// True for a WebSocket upgrade handshake: a `Connection: Upgrade` value
    /// together with an `Upgrade: WebSocket` value, compared
    /// case-insensitively. Such handshakes are sensitive to extra response
    /// headers and the filter leaves them untouched.
    pub(crate) fn is_websocket_upgrade(&self) -> bool {
        self.connection
            .iter()
            .any(|value| value.eq_ignore_ascii_case("Upgrade"))
            && self
                .upgrade
                .iter()
                .any(|value| value.eq_ignore_ascii_case("WebSocket"))
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
