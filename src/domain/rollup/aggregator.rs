//! Aggregation strategies over child progress values.

use tracing::warn;

use crate::domain::formula::{evaluate_formula, Bindings, FormulaKind};

/// Aggregates child progress values with the selected strategy.
///
/// Returns `None` for an empty child list: a parent with no measured
/// children is "not set", never 0%. Expression formulas evaluated here
/// have no child names to bind, so only self-contained expressions can
/// succeed; anything else degrades to the average fallback. Callers
/// with named children should prefer [`aggregate_named`].
pub fn aggregate_progress(values: &[f64], formula: &FormulaKind) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    match formula {
        FormulaKind::Expression { source } => {
            evaluate_or_fall_back(source, &Bindings::new(), values)
        }
        _ => aggregate_plain(values, formula),
    }
}

/// Aggregates named child progress values with the selected strategy.
///
/// Expression formulas bind each child's name to its progress before
/// evaluating. Any evaluation failure (malformed source, unknown
/// reference, division by zero, non-finite result) degrades to the
/// plain average of the children and is never raised to the caller.
pub fn aggregate_named(children: &[(&str, f64)], formula: &FormulaKind) -> Option<f64> {
    if children.is_empty() {
        return None;
    }
    let values: Vec<f64> = children.iter().map(|(_, value)| *value).collect();
    match formula {
        FormulaKind::Expression { source } => {
            let bindings: Bindings = children.iter().copied().collect();
            evaluate_or_fall_back(source, &bindings, &values)
        }
        _ => aggregate_plain(&values, formula),
    }
}

fn aggregate_plain(values: &[f64], formula: &FormulaKind) -> Option<f64> {
    match formula {
        FormulaKind::Default | FormulaKind::Average => average(values),
        FormulaKind::Min => values.iter().copied().reduce(f64::min),
        FormulaKind::Weighted { weights } => weighted_average(values, weights),
        // Expression is handled by the callers above.
        FormulaKind::Expression { .. } => average(values),
    }
}

fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Weighted mean, falling back to the plain average when the weight
/// list is unusable (wrong length, negative or non-finite entries, or
/// a zero total).
fn weighted_average(values: &[f64], weights: &[f64]) -> Option<f64> {
    if weights.len() != values.len()
        || weights.iter().any(|w| !w.is_finite() || *w < 0.0)
    {
        return average(values);
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return average(values);
    }
    let blended = values
        .iter()
        .zip(weights)
        .map(|(value, weight)| value * weight)
        .sum::<f64>()
        / total;
    Some(blended)
}

fn evaluate_or_fall_back(source: &str, bindings: &Bindings, values: &[f64]) -> Option<f64> {
    match evaluate_formula(source, bindings) {
        Ok(result) if result.is_finite() => Some(result),
        Ok(result) => {
            warn!(
                formula = %source,
                result,
                "formula produced a non-finite value; falling back to average"
            );
            average(values)
        }
        Err(error) => {
            warn!(
                formula = %source,
                %error,
                "formula evaluation failed; falling back to average"
            );
            average(values)
        }
    }
}
