use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("compiling origin pattern took {elapsed:?}, over the {budget:?} budget")]
    Timeout { elapsed: Duration, budget: Duration },
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// Compiled regular expression tested against the request `Origin`.
///
/// Matching is case-sensitive and unanchored; anchor the pattern with `^`
/// and `$` to match whole origins.
#[derive(Clone)]
pub struct OriginPattern {
    source: String,
    regex: Regex,
}

impl OriginPattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::compile(pattern, PATTERN_COMPILE_BUDGET)
    }

    fn compile(pattern: &str, budget: Duration) -> Result<Self, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let started = Instant::now();
        let regex = Regex::new(pattern).map_err(|err| PatternError::Build(Box::new(err)))?;
        let elapsed = started.elapsed();
        if elapsed > budget {
            return Err(PatternError::Timeout { elapsed, budget });
        }

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_budget(pattern: &str, budget: Duration) -> Result<Self, PatternError> {
        Self::compile(pattern, budget)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, origin: &str) -> bool {
        self.regex.is_match(origin.as_bytes())
    }
}

impl fmt::Debug for OriginPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OriginPattern").field(&self.source).finish()
    }
}

impl PartialEq for OriginPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for OriginPattern {}

/// How an allowed-origin scan matched the request origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OriginMatch {
    /// The `*` entry matched; responses are shared by every origin.
    Any,
    /// A specific entry or pattern matched; the origin is echoed back.
    Mirror,
}

/// Scans exact entries first, then patterns, stopping at the first hit.
pub(crate) fn match_origin(
    allowed_origins: &[String],
    patterns: &[OriginPattern],
    origin: &str,
) -> Option<OriginMatch> {
    for allowed in allowed_origins {
        if allowed == crate::constants::WILDCARD {
            return Some(OriginMatch::Any);
        }
        if allowed == origin {
            return Some(OriginMatch::Mirror);
        }
    }

    patterns
        .iter()
        .any(|pattern| pattern.matches(origin))
        .then_some(OriginMatch::Mirror)
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
