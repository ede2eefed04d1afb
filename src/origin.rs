use crate::util::split_list;
use regex_automata::meta::{BuildError, Regex};
use thiserror::Error;
use tracing::warn;

/// Error produced when a wildcard origin entry does not compile to a usable
/// regular expression. Configuration building logs and drops such entries
/// rather than failing.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile wildcard origin pattern `{pattern}`")]
    Build {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },
}

/// A single configured allowed-origin entry.
///
/// Entries containing `*` are compiled once, at configuration time, into an
/// anchored regular expression: literal `.` is escaped and `*` becomes a
/// greedy `.*` so that `http://*.example.com` matches any depth of
/// subdomains. Entries without `*` compare by exact, case-sensitive string
/// equality. Origin values are nominally lowercase already; comparison stays
/// case-sensitive to keep literal string semantics.
#[derive(Debug, Clone)]
pub enum OriginPattern {
    Exact(String),
    Wildcard(Regex),
}

impl OriginPattern {
    pub fn compile(entry: &str) -> Result<Self, PatternError> {
        if !entry.contains('*') {
            return Ok(Self::Exact(entry.to_owned()));
        }

        let expression = entry.replace('.', "\\.").replace('*', ".*");
        // Full-string match: a substring hit must not admit the origin.
        let anchored = format!("^(?:{expression})$");
        match Regex::new(&anchored) {
            Ok(regex) => Ok(Self::Wildcard(regex)),
            Err(source) => Err(PatternError::Build {
                pattern: entry.to_owned(),
                source: Box::new(source),
            }),
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Exact(value) => value == candidate,
            Self::Wildcard(regex) => regex.is_match(candidate.as_bytes()),
        }
    }
}

/// The set of origins a configuration permits. `Any` and `List` are mutually
/// exclusive by construction; a literal `*` element in the configured list
/// collapses the whole set to `Any`.
#[derive(Debug, Clone, Default)]
pub enum AllowedOrigins {
    #[default]
    Any,
    List(Vec<OriginPattern>),
}

impl AllowedOrigins {
    /// Parses the comma-separated `allowedOrigins` option value. A `*`
    /// element short-circuits to [`AllowedOrigins::Any`] and discards every
    /// other entry. Wildcard entries that fail to compile are logged and
    /// dropped (they could never match anything).
    pub(crate) fn parse(value: &str) -> Self {
        let mut patterns = Vec::new();
        for entry in split_list(value) {
            if entry == crate::constants::ANY_ORIGIN {
                return Self::Any;
            }
            match OriginPattern::compile(&entry) {
                Ok(pattern) => patterns.push(pattern),
                Err(err) => warn!(error = %err, "ignoring unusable allowed-origin entry"),
            }
        }
        Self::List(patterns)
    }

    pub fn any_origin_allowed(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Decides whether the presented `Origin` header value is permitted.
    ///
    /// The value is tolerated as a space-delimited list of candidate origins
    /// and accepted if any candidate matches any configured pattern. The
    /// protocol only permits a single origin token here; this laxness is a
    /// documented compatibility quirk carried over from the original filter
    /// and must not be extended.
    pub fn matches(&self, origin_header_value: &str) -> bool {
        let patterns = match self {
            Self::Any => return true,
            Self::List(patterns) => patterns,
        };

        if origin_header_value.trim().is_empty() {
            return false;
        }

        origin_header_value
            .split(' ')
            .filter(|candidate| !candidate.trim().is_empty())
            .any(|candidate| patterns.iter().any(|pattern| pattern.matches(candidate)))
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
