//! Glue between `http` types and the framework-agnostic engine.

use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::router::{Flow, RuleSet};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Request, Response};

/// Borrows the CORS-relevant parts of `request`.
///
/// Header values that are not visible ASCII are treated as absent.
pub fn request_context<B>(request: &Request<B>) -> RequestContext<'_> {
    let headers = request.headers();

    RequestContext {
        method: request.method().as_str(),
        origin: header_str(headers, header::ORIGIN),
        access_control_request_method: header_str(headers, header::ACCESS_CONTROL_REQUEST_METHOD),
        access_control_request_headers: header_str(
            headers,
            header::ACCESS_CONTROL_REQUEST_HEADERS,
        ),
    }
}

/// Copies `headers` into `map`.
///
/// `Vary` values are appended next to whatever the host already set; every
/// other header replaces an existing value.
pub fn apply_headers(headers: HeaderCollection, map: &mut HeaderMap) {
    for (name, value) in headers {
        let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(&value),
        ) else {
            tracing::warn!(name = %name, value = %value, "skipping invalid cors header");
            continue;
        };

        if header_name == http::header::VARY {
            for entry in header_value
                .to_str()
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
            {
                if let Ok(entry) = HeaderValue::from_str(entry) {
                    map.append(http::header::VARY, entry);
                }
            }
        } else {
            map.insert(header_name, header_value);
        }
    }
}

impl RuleSet {
    /// Runs the rule matching the request path and writes the resulting
    /// headers into `response_headers`.
    pub fn handle<B>(&self, request: &Request<B>, response_headers: &mut HeaderMap) -> Flow {
        let context = request_context(request);
        let mut headers = HeaderCollection::new();
        let flow = self.route(request.uri().path(), &context, &mut headers);
        apply_headers(headers, response_headers);
        flow
    }
}

impl Flow {
    /// Builds the empty-bodied response for a halted request.
    ///
    /// Returns `None` when the request should continue down the chain.
    pub fn into_response<B: Default>(self, headers: HeaderMap) -> Option<Response<B>> {
        let Flow::Halt(status) = self else {
            return None;
        };

        let mut response = Response::new(B::default());
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Some(response)
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
