/// A callable that maps one real number to one real number.
///
/// Root finders and quadrature rules borrow a `ScalarFunction` for the
/// duration of a single call and never store it.
///
/// Closures and function pointers of type `Fn(f64) -> f64` implement this
/// trait automatically. Implement it directly on a type when the function
/// carries parameters worth naming.
pub trait ScalarFunction {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

impl<F> ScalarFunction for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// A callable that maps a pair `(x, y)` to one real number.
///
/// This is the right-hand side of a first-order scalar ODE `dy/dx = f(x, y)`.
/// It is a distinct trait from [`ScalarFunction`] so unary and binary
/// callables can never be confused at a call site.
pub trait BivariateFunction {
    /// Evaluates the function at `(x, y)`.
    fn eval(&self, x: f64, y: f64) -> f64;
}

impl<F> BivariateFunction for F
where
    F: Fn(f64, f64) -> f64,
{
    fn eval(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}
