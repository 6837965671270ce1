use crate::constants::{DEFAULT_ALLOWED_METHODS, DEFAULT_PATH, WILDCARD};
use crate::origin::OriginPattern;

/// CORS settings applied to requests that reach a rule.
///
/// Built once while loading configuration and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Exact origins, compared case-sensitively. `*` allows every origin.
    pub allowed_origins: Vec<String>,
    /// Tried in order after no exact origin matched.
    pub allowed_origin_patterns: Vec<OriginPattern>,
    /// Emitted verbatim as `Access-Control-Allow-Methods`.
    pub allowed_methods: String,
    /// `*` echoes `Access-Control-Request-Headers`; empty omits the header.
    pub allowed_headers: String,
    /// Empty omits `Access-Control-Expose-Headers`.
    pub exposed_headers: String,
    /// `None` omits `Access-Control-Allow-Credentials`; `Some(false)` emits `false`.
    pub allow_credentials: Option<bool>,
    /// Seconds; zero or negative omits `Access-Control-Max-Age`.
    pub max_age: i64,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            allowed_origins: vec![WILDCARD.to_string()],
            allowed_origin_patterns: Vec::new(),
            allowed_methods: DEFAULT_ALLOWED_METHODS.to_string(),
            allowed_headers: String::new(),
            exposed_headers: String::new(),
            allow_credentials: None,
            max_age: 0,
        }
    }
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_origin_pattern(mut self, pattern: OriginPattern) -> Self {
        self.allowed_origin_patterns.push(pattern);
        self
    }

    pub fn with_methods<S: Into<String>>(mut self, methods: S) -> Self {
        self.allowed_methods = methods.into();
        self
    }

    pub fn with_allowed_headers<S: Into<String>>(mut self, headers: S) -> Self {
        self.allowed_headers = headers.into();
        self
    }

    pub fn with_exposed_headers<S: Into<String>>(mut self, headers: S) -> Self {
        self.exposed_headers = headers.into();
        self
    }

    pub fn with_credentials(mut self, allow: bool) -> Self {
        self.allow_credentials = Some(allow);
        self
    }

    pub fn with_max_age(mut self, seconds: i64) -> Self {
        self.max_age = seconds;
        self
    }
}

/// A [`Rule`] scoped to requests whose path starts with `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRule {
    pub path: String,
    pub rule: Rule,
}

impl PathRule {
    pub fn new<S: Into<String>>(path: S, rule: Rule) -> Self {
        Self {
            path: path.into(),
            rule,
        }
    }

    pub fn matches_path(&self, path: &str) -> bool {
        path.starts_with(self.path.as_str())
    }
}

impl Default for PathRule {
    fn default() -> Self {
        Self::new(DEFAULT_PATH, Rule::default())
    }
}

#[cfg(test)]
#[path = "rule_test.rs"]
mod rule_test;
