use crate::origin::PatternError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading `cors` configuration blocks.
///
/// Every variant produced from source text carries the 1-based line it was
/// found on.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("line {line}: expected `cors` directive, found `{found}`")]
    UnexpectedDirective { line: usize, found: String },
    #[error("line {line}: too many arguments to `cors`")]
    TooManyArguments { line: usize },
    #[error("line {line}: {directive} expects exactly one argument")]
    ExpectedOneArgument { line: usize, directive: String },
    #[error("line {line}: {directive} expects at least one argument")]
    MissingArgument { line: usize, directive: String },
    #[error("line {line}: allowCredentials must be true or false, found `{value}`")]
    InvalidCredentials { line: usize, value: String },
    #[error("line {line}: maxAge must be a valid integer, found `{value}`")]
    InvalidMaxAge { line: usize, value: String },
    #[error("line {line}: unknown cors config item: {item}")]
    UnknownItem { line: usize, item: String },
    #[error("line {line}: invalid origin pattern `{pattern}`")]
    InvalidPattern {
        line: usize,
        pattern: String,
        #[source]
        source: PatternError,
    },
    #[error("line {line}: unexpected `{brace}`")]
    UnexpectedBrace { line: usize, brace: char },
    #[error("line {line}: block opened here is never closed")]
    UnclosedBlock { line: usize },
    #[error("line {line}: unterminated quoted string")]
    UnterminatedQuote { line: usize },
    #[error("line {line}: quoted string may not span lines")]
    NewlineInQuote { line: usize },
    #[error("line {line}: {directive} value `{value}` is not a valid header value")]
    InvalidHeaderValue {
        line: usize,
        directive: String,
        value: String,
    },
    #[error("failed to read cors configuration from {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Source line the error points at, if it came from configuration text.
    pub fn line(&self) -> Option<usize> {
        match self {
            ConfigError::UnexpectedDirective { line, .. }
            | ConfigError::TooManyArguments { line }
            | ConfigError::ExpectedOneArgument { line, .. }
            | ConfigError::MissingArgument { line, .. }
            | ConfigError::InvalidCredentials { line, .. }
            | ConfigError::InvalidMaxAge { line, .. }
            | ConfigError::UnknownItem { line, .. }
            | ConfigError::InvalidPattern { line, .. }
            | ConfigError::UnexpectedBrace { line, .. }
            | ConfigError::UnclosedBlock { line }
            | ConfigError::UnterminatedQuote { line }
            | ConfigError::NewlineInQuote { line }
            | ConfigError::InvalidHeaderValue { line, .. } => Some(*line),
            ConfigError::Io { .. } => None,
        }
    }
}
