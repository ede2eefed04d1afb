use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{default, param};
use crate::exposed_headers::ExposedHeaders;
use crate::origin::AllowedOrigins;
use crate::util::parse_bool;
use tracing::{debug, warn};

/// Immutable configuration snapshot consumed by [`CorsFilter`](crate::CorsFilter).
///
/// Built once from string-keyed options and never mutated; reconfiguration
/// means building a fresh snapshot and swapping the filter wholesale.
/// Construction never fails: every malformed option degrades to its default
/// and is only logged, so a host pipeline can always come up.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub allowed_origins: AllowedOrigins,
    pub allowed_methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    /// Seconds a client may cache a preflight result; 0 omits the
    /// `Access-Control-Max-Age` header.
    pub preflight_max_age: u32,
    pub allow_credentials: bool,
    /// Whether preflight requests are still forwarded to the protected
    /// resource after headers are written.
    pub chain_preflight: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::from_params(std::iter::empty::<(&str, &str)>())
    }
}

impl FilterConfig {
    /// Builds a configuration from `(option name, value)` pairs. Unknown
    /// option names are logged and ignored; absent options take the
    /// documented defaults.
    pub fn from_params<'a, I>(params: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut origins = None;
        let mut methods = None;
        let mut headers = None;
        let mut max_age = None;
        let mut credentials = None;
        let mut exposed = None;
        let mut chain = None;
        let mut old_chain = None;

        for (name, value) in params {
            match name {
                param::ALLOWED_ORIGINS => origins = Some(value),
                param::ALLOWED_METHODS => methods = Some(value),
                param::ALLOWED_HEADERS => headers = Some(value),
                param::PREFLIGHT_MAX_AGE => max_age = Some(value),
                param::ALLOW_CREDENTIALS => credentials = Some(value),
                param::EXPOSED_HEADERS => exposed = Some(value),
                param::CHAIN_PREFLIGHT => chain = Some(value),
                param::OLD_CHAIN_PREFLIGHT => old_chain = Some(value),
                unknown => warn!(option = unknown, "ignoring unknown filter option"),
            }
        }

        // The deprecated alias wins over the current name when both appear.
        let chain_value = if let Some(value) = old_chain {
            warn!(
                "deprecated option `{}` used; use `{}` instead",
                param::OLD_CHAIN_PREFLIGHT,
                param::CHAIN_PREFLIGHT
            );
            value
        } else {
            chain.unwrap_or(default::CHAIN_PREFLIGHT)
        };

        let max_age_value = max_age.unwrap_or(default::PREFLIGHT_MAX_AGE);
        // Parse failure keeps the field default of 0 rather than the
        // documented option default; the filter must still initialize.
        let preflight_max_age = match Self::parse_max_age(max_age_value) {
            Ok(seconds) => seconds,
            Err(err) => {
                warn!(
                    option = param::PREFLIGHT_MAX_AGE,
                    value = max_age_value,
                    error = %err,
                    "could not parse option as integer, keeping 0"
                );
                0
            }
        };

        let config = Self {
            allowed_origins: AllowedOrigins::parse(origins.unwrap_or(default::ALLOWED_ORIGINS)),
            allowed_methods: AllowedMethods::parse(methods.unwrap_or(default::ALLOWED_METHODS)),
            allowed_headers: AllowedHeaders::parse(headers.unwrap_or(default::ALLOWED_HEADERS)),
            exposed_headers: ExposedHeaders::parse(exposed.unwrap_or(default::EXPOSED_HEADERS)),
            preflight_max_age,
            allow_credentials: parse_bool(credentials.unwrap_or(default::ALLOW_CREDENTIALS)),
            chain_preflight: parse_bool(chain_value),
        };

        debug!(
            any_origin = config.allowed_origins.any_origin_allowed(),
            allowed_methods = %config.allowed_methods.header_value(),
            allowed_headers = %config.allowed_headers.header_value(),
            preflight_max_age = config.preflight_max_age,
            allow_credentials = config.allow_credentials,
            chain_preflight = config.chain_preflight,
            "cross-origin filter configured"
        );

        config
    }

    fn parse_max_age(value: &str) -> Result<u32, std::num::ParseIntError> {
        value.trim().parse::<u32>()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
