//! Error types for formula parsing and evaluation.

use thiserror::Error;

/// Errors that occur while tokenizing or parsing a formula string.
///
/// Cloneable so outcomes can live in the parse cache.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("Invalid number literal '{literal}'")]
    InvalidNumber { literal: String },

    #[error("Unexpected token '{found}'")]
    UnexpectedToken { found: String },

    #[error("Unexpected end of formula")]
    UnexpectedEnd,

    #[error("Unknown function '{name}'")]
    UnknownFunction { name: String },

    #[error("Function '{name}' requires at least one argument")]
    EmptyArgumentList { name: String },

    #[error("Formula is empty")]
    EmptyFormula,
}

/// Errors that occur while evaluating a parsed expression.
///
/// These never escape the aggregator: a failed evaluation degrades to
/// the plain-average fallback so a malformed admin-entered formula can
/// never take down a page render or report export.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Unknown reference '{0}'")]
    UnknownReference(String),

    #[error("Division by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_displays_position() {
        let err = ParseError::UnexpectedCharacter { ch: '$', position: 3 };
        assert_eq!(format!("{}", err), "Unexpected character '$' at position 3");
    }

    #[test]
    fn eval_error_wraps_parse_error_transparently() {
        let err: EvalError = ParseError::UnexpectedEnd.into();
        assert_eq!(format!("{}", err), "Unexpected end of formula");
    }

    #[test]
    fn unknown_reference_names_the_reference() {
        let err = EvalError::UnknownReference("KR9".to_string());
        assert_eq!(format!("{}", err), "Unknown reference 'KR9'");
    }
}
