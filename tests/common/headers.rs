use cors_rules::HeaderCollection;
use cors_rules::constants::header;
use std::collections::HashSet;

pub const CORS_RESPONSE_HEADERS: [&str; 6] = [
    header::ACCESS_CONTROL_ALLOW_ORIGIN,
    header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
    header::ACCESS_CONTROL_ALLOW_HEADERS,
    header::ACCESS_CONTROL_ALLOW_METHODS,
    header::ACCESS_CONTROL_MAX_AGE,
    header::ACCESS_CONTROL_EXPOSE_HEADERS,
];

pub fn header_value<'a>(headers: &'a HeaderCollection, name: &str) -> Option<&'a str> {
    headers.get(name)
}

pub fn has_header(headers: &HeaderCollection, name: &str) -> bool {
    headers.contains(name)
}

pub fn has_any_cors_header(headers: &HeaderCollection) -> bool {
    CORS_RESPONSE_HEADERS
        .iter()
        .any(|name| has_header(headers, name))
}

pub fn vary_values(headers: &HeaderCollection) -> HashSet<String> {
    headers
        .vary()
        .into_iter()
        .map(str::to_string)
        .collect::<HashSet<_>>()
}
