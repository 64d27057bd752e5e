//! Tree-walk evaluator for parsed formula expressions.

use std::collections::HashMap;

use super::ast::{BinaryOperator, Expr};
use super::cache::parse_cached;
use super::errors::EvalError;

/// Normalizes a reference name for lookup.
///
/// Matching is case- and whitespace-insensitive, so `"Actual KPI"`,
/// `"actual kpi"`, and `"ActualKPI"` all resolve to the same binding.
pub fn normalize_reference(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Mapping from reference names to child progress values.
#[derive(Debug, Clone, Default)]
pub struct Bindings(HashMap<String, f64>);

impl Bindings {
    /// Creates an empty binding set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binding; the name is normalized on insert.
    pub fn insert(&mut self, name: &str, value: f64) {
        self.0.insert(normalize_reference(name), value);
    }

    /// Looks up a binding; the name is normalized before lookup.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(&normalize_reference(name)).copied()
    }

    /// Returns the number of bindings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no bindings are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, f64)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        let mut bindings = Bindings::new();
        for (name, value) in iter {
            bindings.insert(name, value);
        }
        bindings
    }
}

/// Evaluates a parsed expression against a binding set.
///
/// Pure function of (expression, bindings): no side effects, no
/// ambient state, deterministic output.
pub fn evaluate(expr: &Expr, bindings: &Bindings) -> Result<f64, EvalError> {
    match expr {
        Expr::Literal(value) => Ok(*value),
        Expr::Reference(name) => bindings
            .get(name)
            .ok_or_else(|| EvalError::UnknownReference(name.clone())),
        Expr::Binary { op, left, right } => {
            let lhs = evaluate(left, bindings)?;
            let rhs = evaluate(right, bindings)?;
            match op {
                BinaryOperator::Add => Ok(lhs + rhs),
                BinaryOperator::Subtract => Ok(lhs - rhs),
                BinaryOperator::Multiply => Ok(lhs * rhs),
                BinaryOperator::Divide => {
                    if rhs == 0.0 {
                        Err(EvalError::DivisionByZero)
                    } else {
                        Ok(lhs / rhs)
                    }
                }
            }
        }
        Expr::MinCall(args) => {
            let mut min = f64::INFINITY;
            for arg in args {
                min = min.min(evaluate(arg, bindings)?);
            }
            Ok(min)
        }
    }
}

/// Parses (through the cache) and evaluates a formula string.
pub fn evaluate_formula(source: &str, bindings: &Bindings) -> Result<f64, EvalError> {
    let expr = parse_cached(source)?;
    evaluate(&expr, bindings)
}
