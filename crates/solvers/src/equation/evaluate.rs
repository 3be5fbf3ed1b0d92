use numkit_core::ScalarFunction;

use super::Error;

/// Evaluates `f` at `x` and rejects non-finite residuals.
///
/// # Errors
///
/// Returns `Error::NonFiniteResidual` if `f(x)` is NaN or infinite.
pub(super) fn residual<F>(f: &F, x: f64) -> Result<f64, Error>
where
    F: ScalarFunction + ?Sized,
{
    let residual = f.eval(x);
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(Error::NonFiniteResidual { x, residual })
    }
}
