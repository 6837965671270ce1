use super::headers::{has_any_cors_header, header_value, vary_values};
use cors_rules::constants::header;
use cors_rules::{CorsDecision, HeaderCollection};

pub fn assert_simple(outcome: (CorsDecision, HeaderCollection)) -> HeaderCollection {
    match outcome {
        (CorsDecision::Simple, headers) => headers,
        (other, _) => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(outcome: (CorsDecision, HeaderCollection)) -> HeaderCollection {
    match outcome {
        (CorsDecision::Preflight, headers) => headers,
        (other, _) => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_untouched(outcome: (CorsDecision, HeaderCollection), expected: CorsDecision) {
    let (decision, headers) = outcome;
    assert_eq!(decision, expected);
    assert!(
        !has_any_cors_header(&headers),
        "expected no CORS headers, got {:?}",
        headers
    );
    assert!(headers.is_empty(), "expected no headers, got {:?}", headers);
}

pub fn assert_header_eq(headers: &HeaderCollection, name: &str, expected: &str) {
    assert_eq!(header_value(headers, name), Some(expected), "header {name}");
}

pub fn assert_header_absent(headers: &HeaderCollection, name: &str) {
    assert_eq!(header_value(headers, name), None, "header {name}");
}

pub fn assert_vary_contains(headers: &HeaderCollection, value: &str) {
    assert!(
        vary_values(headers).contains(value),
        "expected Vary to contain {value}, got {:?}",
        header_value(headers, header::VARY)
    );
}

pub fn assert_vary_is_empty(headers: &HeaderCollection) {
    assert!(
        vary_values(headers).is_empty(),
        "expected no Vary, got {:?}",
        header_value(headers, header::VARY)
    );
}
