pub mod header {
    pub const ORIGIN: &str = "Origin";
    pub const CONNECTION: &str = "Connection";
    pub const UPGRADE: &str = "Upgrade";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
}

pub mod method {
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
    pub const DELETE: &str = "DELETE";
    pub const OPTIONS: &str = "OPTIONS";
}

/// String-keyed initialization option names understood by
/// [`FilterConfig::from_params`](crate::FilterConfig::from_params).
pub mod param {
    pub const ALLOWED_ORIGINS: &str = "allowedOrigins";
    pub const ALLOWED_METHODS: &str = "allowedMethods";
    pub const ALLOWED_HEADERS: &str = "allowedHeaders";
    pub const PREFLIGHT_MAX_AGE: &str = "preflightMaxAge";
    pub const ALLOW_CREDENTIALS: &str = "allowCredentials";
    pub const EXPOSED_HEADERS: &str = "exposedHeaders";
    pub const CHAIN_PREFLIGHT: &str = "chainPreflight";
    /// Deprecated alias for [`CHAIN_PREFLIGHT`]; still honored for
    /// compatibility with old deployments.
    pub const OLD_CHAIN_PREFLIGHT: &str = "forwardPreflight";
}

pub mod default {
    pub const ALLOWED_ORIGINS: &str = "*";
    pub const ALLOWED_METHODS: &str = "GET,POST,HEAD";
    pub const ALLOWED_HEADERS: &str = "X-Requested-With,Content-Type,Accept,Origin";
    pub const PREFLIGHT_MAX_AGE: &str = "1800";
    pub const ALLOW_CREDENTIALS: &str = "true";
    pub const EXPOSED_HEADERS: &str = "";
    pub const CHAIN_PREFLIGHT: &str = "true";
}

pub(crate) const ANY_ORIGIN: &str = "*";

/// Methods that qualify a cross-origin request as simple. Membership is
/// case-sensitive, mirroring literal method-token comparison.
pub(crate) const SIMPLE_METHODS: &[&str] = &[method::GET, method::POST, method::HEAD];
