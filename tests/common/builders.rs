use cors_rules::constants::method;
use cors_rules::{CorsDecision, HeaderCollection, OriginPattern, RequestContext, Rule};

#[derive(Default)]
pub struct RuleBuilder {
    origins: Option<Vec<String>>,
    patterns: Vec<String>,
    methods: Option<String>,
    allowed_headers: Option<String>,
    exposed_headers: Option<String>,
    credentials: Option<bool>,
    max_age: Option<i64>,
}

impl RuleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = Some(origins.into_iter().map(Into::into).collect());
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    pub fn methods(mut self, methods: impl Into<String>) -> Self {
        self.methods = Some(methods.into());
        self
    }

    pub fn allowed_headers(mut self, headers: impl Into<String>) -> Self {
        self.allowed_headers = Some(headers.into());
        self
    }

    pub fn exposed_headers(mut self, headers: impl Into<String>) -> Self {
        self.exposed_headers = Some(headers.into());
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, seconds: i64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn build(self) -> Rule {
        let Rule {
            allowed_origins: default_origins,
            allowed_methods: default_methods,
            allowed_headers: default_allowed_headers,
            exposed_headers: default_exposed_headers,
            allow_credentials: default_credentials,
            max_age: default_max_age,
            ..
        } = Rule::default();

        Rule {
            allowed_origins: self.origins.unwrap_or(default_origins),
            allowed_origin_patterns: self
                .patterns
                .iter()
                .map(|pattern| OriginPattern::new(pattern).expect("valid origin pattern"))
                .collect(),
            allowed_methods: self.methods.unwrap_or(default_methods),
            allowed_headers: self.allowed_headers.unwrap_or(default_allowed_headers),
            exposed_headers: self.exposed_headers.unwrap_or(default_exposed_headers),
            allow_credentials: self.credentials.or(default_credentials),
            max_age: self.max_age.unwrap_or(default_max_age),
        }
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn handle(self, rule: &Rule) -> (CorsDecision, HeaderCollection) {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        let mut headers = HeaderCollection::new();
        let decision = rule.handle_request(&ctx, &mut headers);
        (decision, headers)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self {
            request_method: Some(method::POST.into()),
            ..Self::default()
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn context(&self) -> RequestContext<'_> {
        RequestContext {
            method: method::OPTIONS,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        }
    }

    pub fn handle(self, rule: &Rule) -> (CorsDecision, HeaderCollection) {
        let mut headers = HeaderCollection::new();
        let decision = rule.handle_request(&self.context(), &mut headers);
        (decision, headers)
    }
}

pub fn rule() -> RuleBuilder {
    RuleBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
