//! Variant orchestration
//!
//! A variant fixes the order of reduction passes. Both start by resolving
//! parentheses; Sequential then folds all four operators in a single
//! left-to-right pass, while Precedence folds multiply/divide before
//! plus/minus.

use crate::error::{EvalError, EvalResult};
use crate::reduce::{self, ReductionMode};
use tally_core::{FormulaText, ParserVariant, ResultValue};

/// Evaluate raw formula text with the given variant.
///
/// This is the operation front ends call: they hand the raw string in and
/// render the result, or surface the error's message.
///
/// # Example
/// ```rust
/// use tally_core::ParserVariant;
/// use tally_eval::evaluate;
///
/// let result = evaluate("2+3*4", ParserVariant::Sequential).unwrap();
/// assert_eq!(result.get(), 20.0);
///
/// let result = evaluate("2+3*4", ParserVariant::Precedence).unwrap();
/// assert_eq!(result.get(), 14.0);
/// ```
pub fn evaluate(formula: &str, variant: ParserVariant) -> EvalResult<ResultValue> {
    let item = FormulaText::new(formula)?;
    evaluate_item(&item, variant)
}

/// Evaluate an already-constructed formula.
pub fn evaluate_item(item: &FormulaText, variant: ParserVariant) -> EvalResult<ResultValue> {
    evaluate_at_depth(item, variant, 0)
}

pub(crate) fn evaluate_at_depth(
    item: &FormulaText,
    variant: ParserVariant,
    depth: usize,
) -> EvalResult<ResultValue> {
    log::debug!("evaluating {item} with the {variant} variant");
    let item = reduce::reduce_at_depth(item, &[ReductionMode::Parentheses], variant, depth)?;
    let reduced = match variant {
        ParserVariant::Sequential => reduce::reduce_at_depth(
            &item,
            &[
                ReductionMode::Plus,
                ReductionMode::Minus,
                ReductionMode::Multiply,
                ReductionMode::Divide,
            ],
            variant,
            depth,
        )?,
        ParserVariant::Precedence => {
            let item = reduce::reduce_at_depth(
                &item,
                &[ReductionMode::Multiply, ReductionMode::Divide],
                variant,
                depth,
            )?;
            reduce::reduce_at_depth(
                &item,
                &[ReductionMode::Plus, ReductionMode::Minus],
                variant,
                depth,
            )?
        }
    };
    finish(&reduced)
}

// A fully reduced formula is one number and the terminator. Anything else
// here is an evaluator bug, not a user input error.
fn finish(reduced: &FormulaText) -> EvalResult<ResultValue> {
    match reduced.body().parse::<f64>() {
        Ok(value) => Ok(ResultValue::new(value)),
        Err(source) => Err(EvalError::InvariantViolation {
            reduced: reduced.get().to_owned(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sequential(text: &str) -> f64 {
        evaluate(text, ParserVariant::Sequential).unwrap().get()
    }

    fn precedence(text: &str) -> f64 {
        evaluate(text, ParserVariant::Precedence).unwrap().get()
    }

    #[test]
    fn sequential_ignores_operator_precedence() {
        assert_eq!(sequential("2+3*4"), 20.0);
        assert_eq!(sequential("30+11-22*4/2"), 38.0);
    }

    #[test]
    fn precedence_folds_multiply_divide_first() {
        assert_eq!(precedence("2+3*4"), 14.0);
        assert_eq!(precedence("30+11-22*4/2"), -3.0);
    }

    #[test]
    fn leading_negative_and_negative_divisor() {
        assert_eq!(sequential("-21*15/-3"), 105.0);
        assert_eq!(precedence("-21*15/-3"), 105.0);
    }

    #[test]
    fn decimal_addition_is_exact_end_to_end() {
        assert_eq!(sequential("0.1+0.2"), 0.3);
    }

    #[test]
    fn groups_and_implicit_multiplication() {
        assert_eq!(sequential("1+2+(3*4)+5"), 20.0);
        assert_eq!(precedence("1+2+(3*4)+5"), 20.0);
        assert_eq!(sequential("6+3+9(3*9)+2"), 254.0);
        assert_eq!(precedence("6+3+9(3*9)+2"), 254.0);
    }

    #[test]
    fn nested_groups_follow_the_owning_variant() {
        assert_eq!(sequential("6+9+(7+9(65-90)-9)-21"), -233.0);
        assert_eq!(precedence("6+9+(7+9(65-90)-9)-21"), -233.0);
        assert_eq!(sequential("9+(4+9*(8*5(+3-8)/5)*9)-99"), -4770.0);
        assert_eq!(precedence("9+(4+9*(8*5(+3-8)/5)*9)-99"), -3326.0);
    }

    #[test]
    fn long_operands_survive_the_round_trip() {
        let expected = 19363472856348.0 + 3274687654386.0;
        assert_eq!(sequential("19363472856348+3274687654386"), expected);
        assert_eq!(precedence("19363472856348+3274687654386"), expected);
    }

    #[test]
    fn malformed_input_fails_for_both_variants() {
        for variant in [ParserVariant::Sequential, ParserVariant::Precedence] {
            let err = evaluate("30+11-22a*4/2", variant).unwrap_err();
            assert!(matches!(err, EvalError::MalformedFormula(_)), "{err}");
        }
    }

    #[test]
    fn unterminated_parenthesis_is_malformed() {
        let err = evaluate("1+(2+3", ParserVariant::Precedence).unwrap_err();
        assert!(matches!(err, EvalError::MalformedFormula(_)), "{err}");
    }

    #[test]
    fn division_by_zero_is_reported_as_such() {
        let err = evaluate("5/0", ParserVariant::Sequential).unwrap_err();
        assert!(matches!(err, EvalError::DivisionByZero), "{err}");
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = evaluate("", ParserVariant::Sequential).unwrap_err();
        assert!(matches!(
            err,
            EvalError::Formula(tally_core::Error::EmptyFormula)
        ));
    }

    #[test]
    fn nesting_is_accepted_up_to_the_depth_bound() {
        let nested = format!(
            "{}1{}",
            "(".repeat(reduce::MAX_PARENTHESES_DEPTH),
            ")".repeat(reduce::MAX_PARENTHESES_DEPTH)
        );
        assert_eq!(sequential(&nested), 1.0);
    }

    #[test]
    fn nesting_beyond_the_depth_bound_is_malformed() {
        let too_deep = format!(
            "{}1{}",
            "(".repeat(reduce::MAX_PARENTHESES_DEPTH + 1),
            ")".repeat(reduce::MAX_PARENTHESES_DEPTH + 1)
        );
        let err = evaluate(&too_deep, ParserVariant::Sequential).unwrap_err();
        assert!(matches!(err, EvalError::MalformedFormula(_)), "{err}");
    }
}
