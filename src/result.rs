use crate::headers::Headers;

/// Headers plus the continuation decision for one handled request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsOutcome {
    pub headers: Headers,
    /// Whether the request should proceed to the next processing stage.
    pub forward: bool,
}

/// Overall decision returned by [`CorsFilter::decide`](crate::CorsFilter::decide).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    /// Not a cross-origin request the filter touches; no headers, always
    /// forwarded.
    PassThrough,
    /// Simple or non-simple actual cross-origin request; always forwarded.
    Simple(CorsOutcome),
    /// Preflight request. The header set is empty when validation failed
    /// closed; forwarding follows the `chainPreflight` option either way.
    Preflight(CorsOutcome),
}

impl FilterDecision {
    pub fn forward(&self) -> bool {
        match self {
            Self::PassThrough => true,
            Self::Simple(outcome) | Self::Preflight(outcome) => outcome.forward,
        }
    }

    pub fn headers(&self) -> Option<&Headers> {
        match self {
            Self::PassThrough => None,
            Self::Simple(outcome) | Self::Preflight(outcome) => Some(&outcome.headers),
        }
    }
}
