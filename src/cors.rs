use crate::constants::method;
use crate::context::RequestContext;
use crate::header_builder::{HeaderBuilder, OriginOutcome};
use crate::headers::HeaderCollection;
use crate::result::CorsDecision;
use crate::rule::Rule;

/// Returns `true` for an `OPTIONS` request carrying a non-empty
/// `Access-Control-Request-Method` header.
pub fn is_preflight(request: &RequestContext<'_>) -> bool {
    request.method == method::OPTIONS
        && request
            .access_control_request_method
            .is_some_and(|value| !value.is_empty())
}

impl Rule {
    /// Writes the CORS response headers this rule grants `request` into
    /// `headers`.
    ///
    /// Only headers are touched; the caller owns status and body. Nothing is
    /// written unless the request origin is allowed.
    pub fn handle_request(
        &self,
        request: &RequestContext<'_>,
        headers: &mut HeaderCollection,
    ) -> CorsDecision {
        let builder = HeaderBuilder::new(self);

        let origin_headers = match builder.build_origin_headers(request) {
            OriginOutcome::Skip => return CorsDecision::NotApplicable,
            OriginOutcome::Disallow => {
                tracing::trace!(origin = ?request.origin, "origin not allowed");
                return CorsDecision::OriginRejected;
            }
            OriginOutcome::Allow(origin_headers) => origin_headers,
        };

        headers.extend(origin_headers);

        let decision = if is_preflight(request) {
            headers.extend(builder.build_methods_header());
            headers.extend(builder.build_allowed_headers(request));
            headers.extend(builder.build_max_age_header());
            CorsDecision::Preflight
        } else {
            headers.extend(builder.build_exposed_headers());
            CorsDecision::Simple
        };

        headers.extend(builder.build_credentials_header());

        decision
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
