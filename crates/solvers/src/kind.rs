/// Broad classification shared by every solver error.
///
/// Each module defines its own `Error` enum with precise variants; `kind()`
/// on those errors maps them onto this common vocabulary so a presentation
/// layer can react uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Invalid input: bad bracket, step size, interval count, or config.
    Precondition,

    /// The iteration budget ran out, or iteration produced a non-finite value.
    Convergence,

    /// Newton-Raphson hit a zero derivative.
    ZeroDerivative,

    /// Secant hit two equal residuals, so the next step is undefined.
    DegenerateStep,
}
