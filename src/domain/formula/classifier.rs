//! Classification of stored formula strings into aggregation strategies.

use serde::{Deserialize, Serialize};

/// The aggregation strategy selected by a stored formula string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "UPPERCASE")]
pub enum FormulaKind {
    /// No formula stored; aggregates identically to [`FormulaKind::Average`].
    Default,
    /// Arithmetic mean of the measured children.
    Average,
    /// Minimum of the measured children.
    Min,
    /// Weighted mean. Weights come from the formula tail
    /// (`WEIGHTED(30, 70)`); an empty list defers to per-child weights
    /// and ultimately to the average fallback.
    Weighted { weights: Vec<f64> },
    /// Free-form arithmetic expression, evaluated against child names.
    Expression { source: String },
}

/// Classifies the raw formula string stored on an entity.
///
/// Keyword matching is case-insensitive: `AVG`/`AVERAGE` (exact or word
/// prefix), `MIN` (exact - `MIN(...)` with arguments is an expression),
/// and `WEIGHTED` (prefix, optional weight list in the tail). Any other
/// non-blank string is deferred to the expression evaluator at
/// aggregation time. Null or blank input is `Default`.
pub fn parse_formula_type(formula: Option<&str>) -> FormulaKind {
    let raw = match formula {
        Some(raw) => raw.trim(),
        None => return FormulaKind::Default,
    };
    if raw.is_empty() {
        return FormulaKind::Default;
    }

    let upper = raw.to_uppercase();
    if upper == "AVG"
        || upper == "AVERAGE"
        || upper.starts_with("AVG ")
        || upper.starts_with("AVERAGE ")
    {
        return FormulaKind::Average;
    }
    if upper == "MIN" {
        return FormulaKind::Min;
    }
    if let Some(tail) = upper.strip_prefix("WEIGHTED") {
        return FormulaKind::Weighted {
            weights: parse_weight_tail(tail),
        };
    }

    FormulaKind::Expression {
        source: raw.to_string(),
    }
}

/// Parses the weight list following the `WEIGHTED` keyword.
///
/// Accepts `WEIGHTED(30, 70)`, `WEIGHTED: 30, 70`, and `WEIGHTED 30 70`.
/// A missing or malformed tail yields an empty list; the aggregator
/// treats that as "no usable weights" and falls back to the average.
fn parse_weight_tail(tail: &str) -> Vec<f64> {
    let trimmed = tail
        .trim()
        .trim_start_matches([':', '('])
        .trim_end_matches(')')
        .trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut weights = Vec::new();
    for part in trimmed.split([',', ';', ' ']).filter(|p| !p.is_empty()) {
        match part.parse::<f64>() {
            Ok(weight) => weights.push(weight),
            // One bad entry invalidates the whole list.
            Err(_) => return Vec::new(),
        }
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_formula_is_default() {
        assert_eq!(parse_formula_type(None), FormulaKind::Default);
    }

    #[test]
    fn blank_formula_is_default() {
        assert_eq!(parse_formula_type(Some("")), FormulaKind::Default);
        assert_eq!(parse_formula_type(Some("   ")), FormulaKind::Default);
    }

    #[test]
    fn avg_keyword_is_average() {
        assert_eq!(parse_formula_type(Some("AVG")), FormulaKind::Average);
        assert_eq!(parse_formula_type(Some("avg")), FormulaKind::Average);
        assert_eq!(parse_formula_type(Some("Average")), FormulaKind::Average);
        assert_eq!(parse_formula_type(Some(" AVERAGE ")), FormulaKind::Average);
    }

    #[test]
    fn avg_word_prefix_is_average() {
        assert_eq!(
            parse_formula_type(Some("avg of all key results")),
            FormulaKind::Average
        );
    }

    #[test]
    fn min_keyword_is_min() {
        assert_eq!(parse_formula_type(Some("MIN")), FormulaKind::Min);
        assert_eq!(parse_formula_type(Some("min")), FormulaKind::Min);
    }

    #[test]
    fn min_call_is_an_expression() {
        // MIN with arguments is the function form, not the keyword.
        assert_eq!(
            parse_formula_type(Some("MIN(KR1, KR2)")),
            FormulaKind::Expression {
                source: "MIN(KR1, KR2)".to_string()
            }
        );
    }

    #[test]
    fn weighted_with_paren_list() {
        assert_eq!(
            parse_formula_type(Some("WEIGHTED(30, 70)")),
            FormulaKind::Weighted {
                weights: vec![30.0, 70.0]
            }
        );
    }

    #[test]
    fn weighted_with_colon_list() {
        assert_eq!(
            parse_formula_type(Some("weighted: 1, 2, 3")),
            FormulaKind::Weighted {
                weights: vec![1.0, 2.0, 3.0]
            }
        );
    }

    #[test]
    fn weighted_with_space_separated_list() {
        assert_eq!(
            parse_formula_type(Some("WEIGHTED 25 75")),
            FormulaKind::Weighted {
                weights: vec![25.0, 75.0]
            }
        );
    }

    #[test]
    fn weighted_without_list_has_empty_weights() {
        assert_eq!(
            parse_formula_type(Some("WEIGHTED")),
            FormulaKind::Weighted { weights: vec![] }
        );
    }

    #[test]
    fn weighted_with_malformed_list_has_empty_weights() {
        assert_eq!(
            parse_formula_type(Some("WEIGHTED(30, seventy)")),
            FormulaKind::Weighted { weights: vec![] }
        );
    }

    #[test]
    fn arbitrary_string_is_expression() {
        assert_eq!(
            parse_formula_type(Some("(KR1 + KR2) / 2")),
            FormulaKind::Expression {
                source: "(KR1 + KR2) / 2".to_string()
            }
        );
    }

    #[test]
    fn expression_source_keeps_original_casing() {
        assert_eq!(
            parse_formula_type(Some("Actual KPI / Target KPI")),
            FormulaKind::Expression {
                source: "Actual KPI / Target KPI".to_string()
            }
        );
    }
}
