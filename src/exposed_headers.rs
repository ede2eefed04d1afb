use crate::util::split_list;

/// Headers exposed to client scripts via `Access-Control-Expose-Headers`.
/// The response header is omitted entirely when the list is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExposedHeaders {
    values: Vec<String>,
}

impl ExposedHeaders {
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

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.join(","))
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
