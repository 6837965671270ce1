/// What the engine decided for a single request.
///
/// The decision is informational; the headers themselves are written to the
/// caller's [`HeaderCollection`](crate::HeaderCollection).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorsDecision {
    /// No `Origin` header, nothing was written.
    NotApplicable,
    /// The origin matched no allowed entry, nothing was written.
    OriginRejected,
    /// Preflight headers were written.
    Preflight,
    /// Headers for an actual cross-origin request were written.
    Simple,
}

impl CorsDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, CorsDecision::Preflight | CorsDecision::Simple)
    }
}
