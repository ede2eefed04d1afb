use crate::util::{equals_ignore_case, split_list};

/// Headers permitted in preflight validation and advertised via
/// `Access-Control-Allow-Headers`.
///
/// Unlike methods, header-name comparison is ASCII case-insensitive; the
/// configured spelling is preserved for the response value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedHeaders {
    values: Vec<String>,
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn parse(value: &str) -> Self {
        Self {
            values: split_list(value),
        }
    }

    /// Validates an `Access-Control-Request-Headers` value: every
    /// comma-separated entry must match some configured header. An absent or
    /// empty request list passes vacuously.
    pub fn allows_all(&self, requested: &str) -> bool {
        requested
            .split(',')
            .map(str::trim)
            .filter(|header| !header.is_empty())
            .all(|header| {
                self.values
                    .iter()
                    .any(|allowed| equals_ignore_case(allowed, header))
            })
    }

    /// Comma-joined list in configured order; the full configured set is
    /// always advertised, not just the requested subset.
    pub fn header_value(&self) -> String {
        self.values.join(",")
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        Self::parse(crate::constants::default::ALLOWED_HEADERS)
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
