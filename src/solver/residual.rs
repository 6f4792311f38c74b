use crate::base::RockPhysError;

/// Defines a vector function F(x) whose root is sought
///
/// Implementors hold the fixed parameters of the problem (the context) and evaluate the
/// residuals at trial values of the unknowns. Evaluations must not mutate the context.
pub trait ResidualFunction {
    /// Returns the number of unknowns (and equations)
    fn ndim(&self) -> usize;

    /// Calculates the residual vector r = F(x)
    ///
    /// # Input
    ///
    /// * `x` -- trial values of the unknowns (len = ndim)
    ///
    /// # Output
    ///
    /// * `r` -- residuals (len = ndim)
    fn residual(&self, x: &[f64], r: &mut [f64]) -> Result<(), RockPhysError>;
}
