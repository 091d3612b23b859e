//! Exact decimal arithmetic
//!
//! The four binary operations route through [`rust_decimal`] so results
//! match manual decimal arithmetic instead of binary floating point:
//! `add(0.1, 0.2)` is exactly `0.3`. Operands or results outside `Decimal`'s
//! range fall back to plain `f64` arithmetic.

use crate::error::{EvalError, EvalResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits kept when a quotient does not terminate.
pub const DIVISION_SCALE: u32 = 15;

fn exact<F>(x: f64, y: f64, op: F) -> Option<f64>
where
    F: FnOnce(Decimal, Decimal) -> Option<Decimal>,
{
    let dx = Decimal::from_f64(x)?;
    let dy = Decimal::from_f64(y)?;
    op(dx, dy)?.to_f64()
}

/// `x + y` with decimal semantics.
pub fn add(x: f64, y: f64) -> f64 {
    exact(x, y, |dx, dy| dx.checked_add(dy)).unwrap_or(x + y)
}

/// `x - y` with decimal semantics.
pub fn subtract(x: f64, y: f64) -> f64 {
    exact(x, y, |dx, dy| dx.checked_sub(dy)).unwrap_or(x - y)
}

/// `x * y` with decimal semantics.
pub fn multiply(x: f64, y: f64) -> f64 {
    exact(x, y, |dx, dy| dx.checked_mul(dy)).unwrap_or(x * y)
}

/// `x / y` with decimal semantics, rounded to [`DIVISION_SCALE`] fractional
/// digits (half up) when the quotient does not terminate.
///
/// Fails with [`EvalError::DivisionByZero`] when `y` is zero; the check runs
/// before any arithmetic.
pub fn divide(x: f64, y: f64) -> EvalResult<f64> {
    if y == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    let quotient = exact(x, y, |dx, dy| {
        dx.checked_div(dy)
            .map(|q| q.round_dp_with_strategy(DIVISION_SCALE, RoundingStrategy::MidpointAwayFromZero))
    });
    Ok(quotient.unwrap_or(x / y))
}

/// Canonical plain-decimal rendering: no exponent notation, no trailing
/// fractional zeros. Every number a reduction pass emits goes through this,
/// so the next pass reads back exactly what the arithmetic produced.
pub fn format_plain(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(d) => d.normalize().to_string(),
        None => value.to_string(),
    }
}
