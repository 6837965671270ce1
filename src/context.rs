/// Borrowed view of the request fields the CORS engine reads.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    /// The `Origin` header, with an empty value treated as absent.
    pub fn origin(&self) -> Option<&'a str> {
        self.origin.filter(|value| !value.is_empty())
    }

    pub fn request_headers(&self) -> Option<&'a str> {
        self.access_control_request_headers
            .filter(|value| !value.is_empty())
    }
}
