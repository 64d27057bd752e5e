//! Tokenizer for formula strings.

use super::errors::ParseError;

/// A lexical token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Number literal; a trailing `%` in the source is consumed and ignored.
    Number(f64),
    /// Reference or function name. May contain internal spaces
    /// ("Actual KPI"); surrounding whitespace is trimmed.
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    Comma,
}

/// Splits a formula string into tokens.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let ch = chars[pos];

        if ch.is_whitespace() {
            pos += 1;
            continue;
        }

        match ch {
            '+' => {
                tokens.push(Token::Plus);
                pos += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                pos += 1;
            }
            '*' => {
                tokens.push(Token::Star);
                pos += 1;
            }
            '/' => {
                tokens.push(Token::Slash);
                pos += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                pos += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                pos += 1;
            }
            ',' => {
                tokens.push(Token::Comma);
                pos += 1;
            }
            c if c.is_ascii_digit() => {
                let start = pos;
                while pos < chars.len() && (chars[pos].is_ascii_digit() || chars[pos] == '.') {
                    pos += 1;
                }
                let literal: String = chars[start..pos].iter().collect();
                // Percentage suffix is decoration: "50%" reads as 50.
                if pos < chars.len() && chars[pos] == '%' {
                    pos += 1;
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumber {
                        literal: literal.clone(),
                    })?;
                tokens.push(Token::Number(value));
            }
            c if c.is_alphabetic() || c == '_' => {
                // Reference names may contain internal spaces, so the run
                // keeps consuming through whitespace and stops at an
                // operator, paren, comma, or end of input.
                let start = pos;
                while pos < chars.len()
                    && (chars[pos].is_alphanumeric()
                        || chars[pos] == '_'
                        || chars[pos] == ' '
                        || chars[pos] == '\t')
                {
                    pos += 1;
                }
                let ident: String = chars[start..pos].iter().collect::<String>().trim_end().to_string();
                tokens.push(Token::Ident(ident));
            }
            other => {
                return Err(ParseError::UnexpectedCharacter {
                    ch: other,
                    position: pos,
                })
            }
        }
    }

    Ok(tokens)
}
