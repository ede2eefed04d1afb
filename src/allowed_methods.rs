use crate::util::split_list;

/// Methods permitted in preflight validation and advertised via
/// `Access-Control-Allow-Methods`.
///
/// Tokens are case-sensitive: a preflight asking for `get` against a
/// configured `GET` fails, mirroring literal method-token comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedMethods {
    values: Vec<String>,
}

impl AllowedMethods {
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

    pub fn allows(&self, method: &str) -> bool {
        self.values.iter().any(|allowed| allowed == method)
    }

    /// Comma-joined list in configured order, as emitted on preflight
    /// responses. The full configured set is always advertised, not just the
    /// requested method.
    pub fn header_value(&self) -> String {
        self.values.join(",")
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::parse(crate::constants::default::ALLOWED_METHODS)
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
