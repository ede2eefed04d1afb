#![allow(dead_code)]

use cors_filter::{FilterDecision, Headers};

pub fn assert_simple(decision: FilterDecision) -> Headers {
    match decision {
        FilterDecision::Simple(outcome) => {
            assert!(outcome.forward, "simple requests are always forwarded");
            outcome.headers
        }
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: FilterDecision) -> (Headers, bool) {
    match decision {
        FilterDecision::Preflight(outcome) => (outcome.headers, outcome.forward),
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_pass_through(decision: FilterDecision) {
    match decision {
        FilterDecision::PassThrough => {}
        other => panic!("expected pass-through decision, got {:?}", other),
    }
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    match super::headers::header_value(headers, name) {
        Some(value) => assert_eq!(value, expected, "unexpected value for {}", name),
        None => panic!("header {} not present in {:?}", name, headers),
    }
}
