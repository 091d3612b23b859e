//! Reduction passes over formula text
//!
//! Evaluation works by scanning the formula left to right, one pass at a
//! time. Each pass folds the operators whose [`ReductionMode`] is active
//! into computed numbers and copies everything else through verbatim, so a
//! later pass sees a shorter formula with the same meaning. A parentheses
//! pass resolves each group by evaluating it as a complete sub-formula; a
//! number directly in front of a group multiplies its result (`9(3*9)`
//! means `9*(3*9)`).

use crate::arith;
use crate::error::{EvalError, EvalResult};
use crate::variant;
use tally_core::{FormulaBuilder, FormulaText, ParserVariant, TERMINATOR};

/// What a reduction pass folds. Operators whose mode is inactive pass
/// through as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReductionMode {
    Multiply,
    Divide,
    Plus,
    Minus,
    /// Resolve parenthesized groups. Cannot be combined with the other
    /// modes in a single pass.
    Parentheses,
}

/// Deepest parenthesis nesting accepted before evaluation is refused.
pub const MAX_PARENTHESES_DEPTH: usize = 64;

/// Run a single reduction pass over `formula`.
///
/// Operators matching an active mode fold into their computed result;
/// everything else is reformatted and passed through for a later pass. The
/// input is untouched: a pass either completes fully or fails without
/// observable output.
///
/// # Panics
/// When `modes` combines [`ReductionMode::Parentheses`] with any other
/// mode.
pub fn reduce(
    formula: &FormulaText,
    modes: &[ReductionMode],
    variant: ParserVariant,
) -> EvalResult<FormulaText> {
    reduce_at_depth(formula, modes, variant, 0)
}

pub(crate) fn reduce_at_depth(
    formula: &FormulaText,
    modes: &[ReductionMode],
    variant: ParserVariant,
    depth: usize,
) -> EvalResult<FormulaText> {
    let parentheses = modes.contains(&ReductionMode::Parentheses);
    assert!(
        !parentheses || modes.len() == 1,
        "ReductionMode::Parentheses cannot be combined with other modes"
    );

    let mut scanner = Scanner::new(formula.get());
    let mut out = FormulaBuilder::new();
    // Digits of the number token currently being read.
    let mut number = String::new();
    // Operator waiting for its right operand, with the left operand folded
    // so far.
    let mut pending: Option<(PendingOp, f64)> = None;
    // Whether the next character may open a number token with a sign.
    let mut token_start = true;
    // Whether the current number token came from a resolved group.
    let mut after_group = false;

    while let Some(c) = scanner.next_char() {
        if is_number_part(c, token_start) {
            if after_group {
                return Err(EvalError::malformed(
                    "number continues directly after a closed parenthesis",
                ));
            }
            number.push(c);
            token_start = false;
            continue;
        }
        after_group = false;
        token_start = true;

        let mut value = match number.parse::<f64>() {
            Ok(value) => value,
            // A group with nothing in front of it multiplies 1.
            Err(_) if parentheses && c == '(' => 1.0,
            Err(_) => {
                return Err(EvalError::malformed(format!(
                    "expected a number before '{c}'"
                )))
            }
        };
        number.clear();
        if let Some((op, left)) = pending.take() {
            value = op.apply(left, value)?;
        }

        match c {
            '+' => {
                if modes.contains(&ReductionMode::Plus) {
                    pending = Some((PendingOp::Plus, value));
                } else {
                    out.append(&arith::format_plain(value));
                    out.append("+");
                }
            }
            '-' => {
                if modes.contains(&ReductionMode::Minus) {
                    pending = Some((PendingOp::Minus, value));
                } else {
                    out.append(&arith::format_plain(value));
                    out.append("-");
                }
            }
            '*' => {
                if modes.contains(&ReductionMode::Multiply) {
                    pending = Some((PendingOp::Multiply, value));
                } else {
                    out.append(&arith::format_plain(value));
                    out.append("*");
                }
            }
            '/' => {
                if modes.contains(&ReductionMode::Divide) {
                    pending = Some((PendingOp::Divide, value));
                } else {
                    out.append(&arith::format_plain(value));
                    out.append("/");
                }
            }
            '(' => {
                if !parentheses {
                    return Err(EvalError::malformed(
                        "'(' cannot appear once parentheses are resolved",
                    ));
                }
                let group = evaluate_group(&mut scanner, variant, depth)?;
                // The group result becomes the current number token.
                number = arith::format_plain(arith::multiply(value, group));
                token_start = false;
                after_group = true;
            }
            ')' => return Err(EvalError::malformed("')' without a matching '('")),
            TERMINATOR => {
                out.append(&arith::format_plain(value));
                out.append("=");
                break;
            }
            other => {
                return Err(EvalError::malformed(format!(
                    "unexpected character '{other}'"
                )))
            }
        }
    }

    let reduced = out.build()?;
    log::trace!("{variant} pass {modes:?}: {formula} -> {reduced}");
    Ok(reduced)
}

// A character continues the current number token if it is a digit, a
// decimal point, or a sign at the very start of the token.
fn is_number_part(c: char, token_start: bool) -> bool {
    c.is_ascii_digit() || c == '.' || (token_start && (c == '+' || c == '-'))
}

/// Capture the group opened by the `(` the caller just consumed and
/// evaluate it as a complete sub-formula with the owning variant.
///
/// The scanner is left positioned just past the matching `)`.
fn evaluate_group(
    scanner: &mut Scanner<'_>,
    variant: ParserVariant,
    depth: usize,
) -> EvalResult<f64> {
    if depth >= MAX_PARENTHESES_DEPTH {
        return Err(EvalError::malformed(format!(
            "parentheses nested deeper than {MAX_PARENTHESES_DEPTH} levels"
        )));
    }
    let mut inner = String::new();
    let mut open = 1usize;
    while let Some(c) = scanner.next_char() {
        match c {
            '(' => open += 1,
            ')' => {
                open -= 1;
                if open == 0 {
                    if inner.is_empty() {
                        return Err(EvalError::malformed("empty parentheses"));
                    }
                    let item = FormulaText::new(inner)?;
                    let result = variant::evaluate_at_depth(&item, variant, depth + 1)?;
                    return Ok(result.get());
                }
            }
            _ => {}
        }
        inner.push(c);
    }
    Err(EvalError::malformed(
        "formula ended before the parenthesis closed",
    ))
}

#[derive(Debug, Clone, Copy)]
enum PendingOp {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl PendingOp {
    fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        match self {
            PendingOp::Plus => Ok(arith::add(left, right)),
            PendingOp::Minus => Ok(arith::subtract(left, right)),
            PendingOp::Multiply => Ok(arith::multiply(left, right)),
            PendingOp::Divide => arith::divide(left, right),
        }
    }
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner { input, pos: 0 }
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.input[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }
}
