use crate::constants::DEFAULT_PATH;
use crate::error::ConfigError;
use crate::lexer::{Token, tokenize};
use crate::origin::OriginPattern;
use crate::router::RuleSet;
use crate::rule::{PathRule, Rule};
use http::HeaderValue;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const DIRECTIVE: &str = "cors";
const PATTERN_PREFIX: char = '~';

/// Parses a sequence of `cors` blocks into a [`RuleSet`].
///
/// ```text
/// cors /api http://a.test,http://b.test {
///     origin ~^https://.*\.c\.test$
///     methods "GET, POST"
///     allowCredentials true
///     maxAge 3600
///     allowedHeaders *
///     exposedHeaders X-Total-Count
/// }
/// ```
pub fn parse_rules(source: &str) -> Result<RuleSet, ConfigError> {
    let mut parser = Parser::new(tokenize(source)?);
    let mut rules = RuleSet::default();

    while let Some(token) = parser.next() {
        rules.push(parser.parse_block(token)?);
    }

    tracing::debug!(rules = rules.len(), "parsed cors configuration");
    Ok(rules)
}

impl RuleSet {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_rules(&source)
    }
}

impl FromStr for RuleSet {
    type Err = ConfigError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        parse_rules(source)
    }
}

struct Parser {
    tokens: std::vec::IntoIter<Token>,
    peeked: Option<Token>,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            peeked: None,
        }
    }

    fn next(&mut self) -> Option<Token> {
        self.peeked.take().or_else(|| self.tokens.next())
    }

    fn peek(&mut self) -> Option<&Token> {
        if self.peeked.is_none() {
            self.peeked = self.tokens.next();
        }
        self.peeked.as_ref()
    }

    /// Remaining tokens on `line`.
    fn line_args(&mut self, line: usize) -> Vec<Token> {
        let mut args = Vec::new();
        while self.peek().is_some_and(|token| token.line == line) {
            if let Some(token) = self.next() {
                args.push(token);
            }
        }
        args
    }

    fn parse_block(&mut self, head: Token) -> Result<PathRule, ConfigError> {
        if let Some(brace) = head.brace() {
            return Err(ConfigError::UnexpectedBrace {
                line: head.line,
                brace,
            });
        }
        if head.quoted || head.text != DIRECTIVE {
            return Err(ConfigError::UnexpectedDirective {
                line: head.line,
                found: head.text,
            });
        }

        let mut args = self.line_args(head.line);
        let mut opens_block = false;
        match args.as_slice() {
            [.., open, close] if open.brace() == Some('{') && close.brace() == Some('}') => {
                args.truncate(args.len() - 2);
            }
            [.., open] if open.brace() == Some('{') => {
                args.pop();
                opens_block = true;
            }
            _ => {}
        }
        reject_braces(&args)?;

        let mut path_rule = PathRule::default();
        let mut origins_set = false;

        match args.as_slice() {
            [] => {}
            [path] => path_rule.path = path.text.clone(),
            [path, origins] => {
                path_rule.path = path.text.clone();
                path_rule.rule.allowed_origins.clear();
                add_origins(&mut path_rule.rule, origins)?;
                origins_set = true;
            }
            _ => return Err(ConfigError::TooManyArguments { line: head.line }),
        }

        if opens_block {
            self.parse_items(head.line, &mut path_rule.rule, origins_set)?;
        }

        if path_rule.path.is_empty() {
            path_rule.path = DEFAULT_PATH.to_string();
        }

        Ok(path_rule)
    }

    fn parse_items(
        &mut self,
        opened_at: usize,
        rule: &mut Rule,
        mut origins_set: bool,
    ) -> Result<(), ConfigError> {
        loop {
            let Some(key) = self.next() else {
                return Err(ConfigError::UnclosedBlock { line: opened_at });
            };
            match key.brace() {
                Some('}') => return Ok(()),
                Some(brace) => {
                    return Err(ConfigError::UnexpectedBrace {
                        line: key.line,
                        brace,
                    });
                }
                None => {}
            }

            let args = self.line_args(key.line);
            reject_braces(&args)?;

            match key.text.as_str() {
                "origin" => {
                    if args.is_empty() {
                        return Err(ConfigError::MissingArgument {
                            line: key.line,
                            directive: key.text.clone(),
                        });
                    }
                    if !origins_set {
                        rule.allowed_origins.clear();
                        origins_set = true;
                    }
                    for arg in &args {
                        add_origins(rule, arg)?;
                    }
                }
                "methods" => rule.allowed_methods = header_arg(&key, args)?,
                "allowedHeaders" => rule.allowed_headers = header_arg(&key, args)?,
                "exposedHeaders" => rule.exposed_headers = header_arg(&key, args)?,
                "allowCredentials" => {
                    let value = single_arg(&key, args)?;
                    rule.allow_credentials = match value.as_str() {
                        "true" => Some(true),
                        "false" => Some(false),
                        _ => {
                            return Err(ConfigError::InvalidCredentials {
                                line: key.line,
                                value: value.clone(),
                            });
                        }
                    };
                }
                "maxAge" => {
                    let value = single_arg(&key, args)?;
                    rule.max_age = value
                        .parse::<i64>()
                        .map_err(|_| ConfigError::InvalidMaxAge {
                            line: key.line,
                            value: value.clone(),
                        })?;
                }
                _ => {
                    return Err(ConfigError::UnknownItem {
                        line: key.line,
                        item: key.text.clone(),
                    });
                }
            }
        }
    }
}

fn single_arg(key: &Token, mut args: Vec<Token>) -> Result<String, ConfigError> {
    match args.pop() {
        Some(arg) if args.is_empty() => Ok(arg.text),
        _ => Err(ConfigError::ExpectedOneArgument {
            line: key.line,
            directive: key.text.clone(),
        }),
    }
}

/// Like [`single_arg`], for values written verbatim into a response header.
fn header_arg(key: &Token, args: Vec<Token>) -> Result<String, ConfigError> {
    let value = single_arg(key, args)?;
    if HeaderValue::from_str(&value).is_err() {
        return Err(ConfigError::InvalidHeaderValue {
            line: key.line,
            directive: key.text.clone(),
            value,
        });
    }
    Ok(value)
}

fn reject_braces(args: &[Token]) -> Result<(), ConfigError> {
    match args.iter().find_map(|token| Some((token.line, token.brace()?))) {
        Some((line, brace)) => Err(ConfigError::UnexpectedBrace { line, brace }),
        None => Ok(()),
    }
}

/// Adds one origin argument to `rule`.
///
/// `~pattern` compiles a regular expression; anything else is a
/// comma-separated list of exact origins.
fn add_origins(rule: &mut Rule, token: &Token) -> Result<(), ConfigError> {
    if let Some(pattern) = token.text.strip_prefix(PATTERN_PREFIX) {
        let compiled =
            OriginPattern::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                line: token.line,
                pattern: pattern.to_string(),
                source,
            })?;
        rule.allowed_origin_patterns.push(compiled);
        return Ok(());
    }

    rule.allowed_origins.extend(
        token
            .text
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string),
    );
    Ok(())
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod parser_test;
