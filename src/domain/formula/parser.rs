//! Recursive-descent parser for formula strings.
//!
//! Grammar (standard BODMAS precedence, left-associative):
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := '-' factor | primary
//! primary    := NUMBER | IDENT | 'MIN' '(' expression (',' expression)* ')'
//!             | '(' expression ')'
//! ```

use super::ast::{BinaryOperator, Expr};
use super::errors::ParseError;
use super::evaluator::normalize_reference;
use super::lexer::{tokenize, Token};

/// Parses a formula string into an expression tree.
///
/// An empty or whitespace-only string is a [`ParseError::EmptyFormula`];
/// callers treat that case as "no formula" before reaching the parser.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyFormula);
    }
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expression()?;
    match parser.peek() {
        None => Ok(expr),
        Some(token) => Err(ParseError::UnexpectedToken {
            found: describe(token),
        }),
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: &Token) -> Result<(), ParseError> {
        match self.advance() {
            Some(ref token) if token == expected => Ok(()),
            Some(token) => Err(ParseError::UnexpectedToken {
                found: describe(&token),
            }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn expression(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.term()?;
        while let Some(op) = match self.peek() {
            Some(Token::Plus) => Some(BinaryOperator::Add),
            Some(Token::Minus) => Some(BinaryOperator::Subtract),
            _ => None,
        } {
            self.advance();
            let rhs = self.term()?;
            node = Expr::binary(op, node, rhs);
        }
        Ok(node)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.factor()?;
        while let Some(op) = match self.peek() {
            Some(Token::Star) => Some(BinaryOperator::Multiply),
            Some(Token::Slash) => Some(BinaryOperator::Divide),
            _ => None,
        } {
            self.advance();
            let rhs = self.factor()?;
            node = Expr::binary(op, node, rhs);
        }
        Ok(node)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        if matches!(self.peek(), Some(Token::Minus)) {
            self.advance();
            let inner = self.factor()?;
            // Unary minus desugars to (0 - x).
            return Ok(Expr::binary(BinaryOperator::Subtract, Expr::Literal(0.0), inner));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(Expr::Literal(value)),
            Some(Token::Ident(name)) => {
                if matches!(self.peek(), Some(Token::LParen)) {
                    self.function_call(name)
                } else {
                    Ok(Expr::Reference(name))
                }
            }
            Some(Token::LParen) => {
                let inner = self.expression()?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }
            Some(token) => Err(ParseError::UnexpectedToken {
                found: describe(&token),
            }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn function_call(&mut self, name: String) -> Result<Expr, ParseError> {
        if normalize_reference(&name) != "min" {
            return Err(ParseError::UnknownFunction { name });
        }
        self.expect(&Token::LParen)?;
        if matches!(self.peek(), Some(Token::RParen)) {
            return Err(ParseError::EmptyArgumentList { name });
        }
        let mut args = vec![self.expression()?];
        while matches!(self.peek(), Some(Token::Comma)) {
            self.advance();
            args.push(self.expression()?);
        }
        self.expect(&Token::RParen)?;
        Ok(Expr::MinCall(args))
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(value) => value.to_string(),
        Token::Ident(name) => name.clone(),
        Token::Plus => "+".to_string(),
        Token::Minus => "-".to_string(),
        Token::Star => "*".to_string(),
        Token::Slash => "/".to_string(),
        Token::LParen => "(".to_string(),
        Token::RParen => ")".to_string(),
        Token::Comma => ",".to_string(),
    }
}
