use crate::constants::{WILDCARD, header};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::origin::{OriginMatch, match_origin};
use crate::rule::Rule;

pub(crate) enum OriginOutcome {
    Skip,
    Disallow,
    Allow(HeaderCollection),
}

pub(crate) struct HeaderBuilder<'a> {
    rule: &'a Rule,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(rule: &'a Rule) -> Self {
        Self { rule }
    }

    pub(crate) fn build_origin_headers(&self, request: &RequestContext<'_>) -> OriginOutcome {
        let Some(origin) = request.origin() else {
            return OriginOutcome::Skip;
        };

        match match_origin(
            &self.rule.allowed_origins,
            &self.rule.allowed_origin_patterns,
            origin,
        ) {
            Some(OriginMatch::Any) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, WILDCARD);
                OriginOutcome::Allow(headers)
            }
            Some(OriginMatch::Mirror) => {
                let mut headers = HeaderCollection::with_estimate(2);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
                headers.add_vary(header::ORIGIN);
                OriginOutcome::Allow(headers)
            }
            None => OriginOutcome::Disallow,
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.rule.allowed_methods.as_str(),
        );
        headers
    }

    pub(crate) fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let value = match self.rule.allowed_headers.as_str() {
            "" => None,
            WILDCARD => request.request_headers(),
            configured => Some(configured),
        };

        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(value) = value {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if self.rule.max_age > 0 {
            headers.push(
                header::ACCESS_CONTROL_MAX_AGE,
                self.rule.max_age.to_string(),
            );
        }
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if !self.rule.exposed_headers.is_empty() {
            headers.push(
                header::ACCESS_CONTROL_EXPOSE_HEADERS,
                self.rule.exposed_headers.as_str(),
            );
        }
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(allow) = self.rule.allow_credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, allow.to_string());
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
