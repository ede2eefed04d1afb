use crate::config::FilterConfig;
use crate::constants::header;
use crate::headers::HeaderCollection;

pub(crate) struct HeaderBuilder<'a> {
    config: &'a FilterConfig,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(config: &'a FilterConfig) -> Self {
        Self { config }
    }

    /// Echoes the caller's Origin value. The literal value is always echoed,
    /// never `*`, so credentialed requests stay valid even in any-origin
    /// mode.
    pub(crate) fn build_origin_header(&self, origin: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.to_owned());
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.config.allow_credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_owned());
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        if self.config.preflight_max_age > 0 {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(
                header::ACCESS_CONTROL_MAX_AGE,
                self.config.preflight_max_age.to_string(),
            );
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.config.allowed_methods.header_value(),
        );
        headers
    }

    pub(crate) fn build_allowed_headers_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.config.allowed_headers.header_value(),
        );
        headers
    }

    pub(crate) fn build_exposed_headers_header(&self) -> HeaderCollection {
        if let Some(value) = self.config.exposed_headers.header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
            headers
        } else {
            HeaderCollection::new()
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
