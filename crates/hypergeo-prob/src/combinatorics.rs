//! Binomial coefficients as closest-double values.

use crate::error::ProbabilityError;

/// Number of ways to choose `b` items from `a`, evaluated as an `f64`.
///
/// Returns 0 when `b < 0` or `b > a`. Uses the symmetric multiplicative
/// form `C(a, b) = C(a, a-b)` over the smaller side, multiplying one
/// factor at a time so the running value never strays far above the final
/// result. Populations in the low thousands with realistic sample sizes
/// stay comfortably finite; a value that escapes `f64` range reports
/// [`ProbabilityError::NumericOverflow`] instead of returning garbage.
pub fn binomial(a: i64, b: i64) -> Result<f64, ProbabilityError> {
    if b < 0 || b > a {
        return Ok(0.0);
    }
    let side = b.min(a - b);
    let mut result = 1.0f64;
    for i in 1..=side {
        // Every factor (a - side + i) / i is >= 1, so the product grows
        // monotonically and the finiteness check catches the first escape.
        result = result * (a - side + i) as f64 / i as f64;
        if !result.is_finite() {
            return Err(ProbabilityError::NumericOverflow { a, b });
        }
    }
    Ok(result)
}
