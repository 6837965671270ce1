use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) text: String,
    pub(crate) line: usize,
    pub(crate) quoted: bool,
}

impl Token {
    /// An unquoted `{` or `}`.
    pub(crate) fn brace(&self) -> Option<char> {
        match (self.quoted, self.text.as_str()) {
            (false, "{") => Some('{'),
            (false, "}") => Some('}'),
            _ => None,
        }
    }
}

/// Splits configuration text into whitespace-separated tokens.
///
/// `#` starts a comment when it begins a token. Double quotes group text,
/// including whitespace, into one token but may not span lines; inside quotes
/// `\"` and `\\` are the only escapes.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Token>, ConfigError> {
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();
    let mut line = 1;

    while let Some(&ch) = chars.peek() {
        match ch {
            '\n' => {
                line += 1;
                chars.next();
            }
            ch if ch.is_whitespace() => {
                chars.next();
            }
            '#' => {
                while let Some(&ch) = chars.peek() {
                    if ch == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '"' => {
                chars.next();
                let start = line;
                let mut text = String::new();
                let mut closed = false;
                while let Some(ch) = chars.next() {
                    match ch {
                        '"' => {
                            closed = true;
                            break;
                        }
                        '\\' if matches!(chars.peek(), Some('"') | Some('\\')) => {
                            if let Some(escaped) = chars.next() {
                                text.push(escaped);
                            }
                        }
                        '\n' => return Err(ConfigError::NewlineInQuote { line: start }),
                        _ => text.push(ch),
                    }
                }
                if !closed {
                    return Err(ConfigError::UnterminatedQuote { line: start });
                }
                tokens.push(Token {
                    text,
                    line: start,
                    quoted: true,
                });
            }
            _ => {
                let mut text = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_whitespace() {
                        break;
                    }
                    text.push(ch);
                    chars.next();
                }
                tokens.push(Token {
                    text,
                    line,
                    quoted: false,
                });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
#[path = "lexer_test.rs"]
mod lexer_test;
