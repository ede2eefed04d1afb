use indexmap::IndexMap;

/// Response header set produced by a decision. Insertion order is preserved
/// so identical inputs always serialize identically.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(4)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: Headers::with_capacity(estimate),
        }
    }

    pub(crate) fn push(&mut self, name: &str, value: String) {
        self.headers.insert(name.to_owned(), value);
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        self.headers.extend(other.headers);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
