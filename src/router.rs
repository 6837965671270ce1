use crate::context::RequestContext;
use crate::cors::is_preflight;
use crate::headers::HeaderCollection;
use crate::rule::PathRule;
use http::StatusCode;

/// What the host should do with the request after CORS handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Hand the request to the next handler.
    Continue,
    /// Answer immediately with this status and no body.
    Halt(StatusCode),
}

impl Flow {
    pub fn is_halt(&self) -> bool {
        matches!(self, Flow::Halt(_))
    }
}

/// Path-scoped CORS rules, tried in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<PathRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<PathRule>) -> Self {
        Self { rules }
    }

    pub fn push(&mut self, rule: PathRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[PathRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule whose path is a prefix of `path`.
    pub fn find(&self, path: &str) -> Option<&PathRule> {
        self.rules.iter().find(|rule| rule.matches_path(path))
    }

    /// Runs the first rule matching `path` and reports whether the chain
    /// should stop.
    ///
    /// Preflight requests halt with `200 OK` once a rule matched, whether or
    /// not the origin was allowed.
    pub fn route(
        &self,
        path: &str,
        request: &RequestContext<'_>,
        headers: &mut HeaderCollection,
    ) -> Flow {
        let Some(matched) = self.find(path) else {
            tracing::trace!(path, "no cors rule for path");
            return Flow::Continue;
        };

        let decision = matched.rule.handle_request(request, headers);
        tracing::debug!(path, rule = %matched.path, ?decision, "cors rule matched");

        if is_preflight(request) {
            tracing::debug!(path, "preflight answered");
            Flow::Halt(StatusCode::OK)
        } else {
            Flow::Continue
        }
    }
}

impl From<Vec<PathRule>> for RuleSet {
    fn from(rules: Vec<PathRule>) -> Self {
        Self::new(rules)
    }
}

impl FromIterator<PathRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = PathRule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a PathRule;
    type IntoIter = std::slice::Iter<'a, PathRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;
