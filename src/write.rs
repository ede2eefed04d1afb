use crate::headers::Headers;

/// Seam to the host's response object. Adapters implement this for whatever
/// response type their server exposes; `set_header` replaces any existing
/// value for the name.
pub trait HeaderSink {
    fn set_header(&mut self, name: &str, value: &str);
}

impl HeaderSink for Headers {
    fn set_header(&mut self, name: &str, value: &str) {
        self.insert(name.to_owned(), value.to_owned());
    }
}

/// Applies a decided header set to the response view, in decision order.
pub fn apply_headers<S: HeaderSink>(headers: &Headers, sink: &mut S) {
    for (name, value) in headers {
        sink.set_header(name, value);
    }
}

#[cfg(test)]
#[path = "write_test.rs"]
mod write_test;
