pub mod constants;
mod context;
mod cors;
mod error;
mod header_builder;
mod headers;
mod lexer;
pub mod middleware;
mod origin;
mod parser;
mod result;
mod router;
mod rule;

pub use context::RequestContext;
pub use cors::is_preflight;
pub use error::ConfigError;
pub use headers::{HeaderCollection, Headers};
pub use origin::{OriginPattern, PatternError};
pub use parser::parse_rules;
pub use result::CorsDecision;
pub use router::{Flow, RuleSet};
pub use rule::{PathRule, Rule};
