use super::{ConvergenceTracker, ResidualFunction, SolverControl};
use crate::base::RockPhysError;
use crate::StrError;
use nalgebra::{DMatrix, DVector};

/// Defines the Armijo coefficient for the sufficient decrease condition
const ARMIJO_COEFFICIENT: f64 = 1e-4;

/// Holds the results of a successful root finding
#[derive(Clone, Debug)]
pub struct Solution {
    /// The root x such that ‖F(x)‖∞ ≤ tol_abs_residual
    pub x: Vec<f64>,

    /// Max-norm of the residual vector at x
    pub residual_norm: f64,

    /// Number of Newton iterations performed
    pub iterations: usize,
}

/// Finds a root of F(x) = 0 using the damped Newton method
///
/// The Jacobian matrix is approximated by forward differences with the perturbation
///
/// ```text
/// hⱼ = √ε · max(|xⱼ|, 1)
/// ```
///
/// and the Newton direction δx (solution of J·δx = -R) is damped by a backtracking line
/// search on φ(x) = ½ R·R, accepting the step λ·δx when
///
/// ```text
/// φ(x + λ δx) ≤ φ(x) - 2 c λ φ(x),   c = 1e-4
/// ```
///
/// with λ = 1, ½, ¼, …
///
/// The residual is checked before the first step; thus an exact initial guess is returned
/// unchanged with `iterations = 0`.
///
/// # Input
///
/// * `x0` -- initial guess (len = ndim)
/// * `fun` -- the residual function
/// * `control` -- tolerances and iteration limits
///
/// # Errors
///
/// * `InvalidParameter` if the control is inconsistent or `x0` has the wrong length
/// * `ConvergenceFailure` with the last iterate if the residual became NaN or Inf, the
///   Jacobian matrix is singular, the line search failed, the iterations stagnated, or the
///   maximum number of iterations was reached
pub fn solve<F>(x0: &[f64], fun: &F, control: &SolverControl) -> Result<Solution, RockPhysError>
where
    F: ResidualFunction + ?Sized,
{
    // check
    if let Some(msg) = control.validate() {
        return Err(RockPhysError::InvalidParameter(msg));
    }
    let ndim = fun.ndim();
    if ndim == 0 || x0.len() != ndim {
        return Err(RockPhysError::InvalidParameter(format!(
            "x0.len() = {} is incorrect; it must be equal to ndim = {} > 0",
            x0.len(),
            ndim
        )));
    }

    // allocate
    let mut x = DVector::from_column_slice(x0);
    let mut rr = DVector::<f64>::zeros(ndim);
    let mut x_trial = DVector::<f64>::zeros(ndim);
    let mut rr_trial = DVector::<f64>::zeros(ndim);
    let mut jj = DMatrix::<f64>::zeros(ndim, ndim);
    let mut tracker = ConvergenceTracker::new(control);

    // first residual
    fun.residual(x.as_slice(), rr.as_mut_slice())?;
    tracker.print_header();
    let res = tracker.analyze_rr(0, rr.as_slice());
    tracker.print_iteration();
    if let Err(reason) = res {
        return Err(failure(&x, &tracker, reason));
    }

    // iterations
    for iteration in 1..=control.n_max_iterations {
        if tracker.converged() {
            break;
        }

        // Jacobian matrix
        jacobian(fun, &x, &rr, &mut x_trial, &mut rr_trial, &mut jj)?;

        // Newton direction: J·δx = -R
        let mdx = match jj.clone().lu().solve(&rr) {
            Some(v) if v.iter().all(|v| v.is_finite()) => v,
            _ => return Err(failure(&x, &tracker, "singular Jacobian")),
        };
        let dx = -mdx;

        // backtracking line search
        let phi = 0.5 * rr.dot(&rr);
        let mut lambda = 1.0;
        let mut accepted = false;
        for _ in 0..=control.n_max_backtracking {
            x_trial.copy_from(&x);
            x_trial.axpy(lambda, &dx, 1.0);
            fun.residual(x_trial.as_slice(), rr_trial.as_mut_slice())?;
            let phi_trial = 0.5 * rr_trial.dot(&rr_trial);
            if phi_trial.is_finite() && phi_trial <= phi - 2.0 * ARMIJO_COEFFICIENT * lambda * phi {
                accepted = true;
                break;
            }
            lambda *= 0.5;
        }
        if !accepted {
            return Err(failure(&x, &tracker, "line search failed"));
        }

        // update
        let step = &dx * lambda;
        tracker.analyze_step(x.as_slice(), step.as_slice(), lambda);
        x.copy_from(&x_trial);
        rr.copy_from(&rr_trial);
        let res = tracker.analyze_rr(iteration, rr.as_slice());
        tracker.print_iteration();
        if let Err(reason) = res {
            return Err(failure(&x, &tracker, reason));
        }
        if !tracker.converged() && tracker.stagnated() {
            tracker.print_footer();
            return Err(failure(&x, &tracker, "iterations stagnated"));
        }
    }
    tracker.print_footer();

    // done
    if tracker.converged() {
        Ok(Solution {
            x: x.as_slice().to_vec(),
            residual_norm: tracker.norm_rr(),
            iterations: tracker.iteration(),
        })
    } else {
        Err(failure(&x, &tracker, "maximum number of iterations reached"))
    }
}

/// Approximates the Jacobian matrix by forward differences
fn jacobian<F>(
    fun: &F,
    x: &DVector<f64>,
    rr: &DVector<f64>,
    x_trial: &mut DVector<f64>,
    rr_trial: &mut DVector<f64>,
    jj: &mut DMatrix<f64>,
) -> Result<(), RockPhysError>
where
    F: ResidualFunction + ?Sized,
{
    let sqrt_eps = f64::sqrt(f64::EPSILON);
    for j in 0..x.len() {
        let h = sqrt_eps * f64::max(f64::abs(x[j]), 1.0);
        x_trial.copy_from(x);
        x_trial[j] += h;
        fun.residual(x_trial.as_slice(), rr_trial.as_mut_slice())?;
        for i in 0..x.len() {
            jj[(i, j)] = (rr_trial[i] - rr[i]) / h;
        }
    }
    Ok(())
}

/// Packs the current state into a convergence failure
fn failure(x: &DVector<f64>, tracker: &ConvergenceTracker, reason: StrError) -> RockPhysError {
    RockPhysError::ConvergenceFailure {
        last_iterate: x.as_slice().to_vec(),
        residual_norm: tracker.norm_rr(),
        iterations: tracker.iteration(),
        reason,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::solve;
    use crate::base::RockPhysError;
    use crate::solver::{ResidualFunction, SolverControl};
    use approx::assert_abs_diff_eq;

    /// F(x) = (x₀² + x₁² - 4, x₀ - x₁)
    struct Circle {}

    impl ResidualFunction for Circle {
        fn ndim(&self) -> usize {
            2
        }
        fn residual(&self, x: &[f64], r: &mut [f64]) -> Result<(), RockPhysError> {
            r[0] = x[0] * x[0] + x[1] * x[1] - 4.0;
            r[1] = x[0] - x[1];
            Ok(())
        }
    }

    /// F(x) = x² + a (no real root if a > 0)
    struct Parabola {
        a: f64,
    }

    impl ResidualFunction for Parabola {
        fn ndim(&self) -> usize {
            1
        }
        fn residual(&self, x: &[f64], r: &mut [f64]) -> Result<(), RockPhysError> {
            r[0] = x[0] * x[0] + self.a;
            Ok(())
        }
    }

    /// F(x) = √x - 2 (NaN for x < 0)
    struct SquareRoot {}

    impl ResidualFunction for SquareRoot {
        fn ndim(&self) -> usize {
            1
        }
        fn residual(&self, x: &[f64], r: &mut [f64]) -> Result<(), RockPhysError> {
            r[0] = f64::sqrt(x[0]) - 2.0;
            Ok(())
        }
    }

    #[test]
    fn solve_captures_errors() {
        let control = SolverControl::new();
        assert_eq!(
            solve(&[1.0], &Circle {}, &control).err().unwrap().to_string(),
            "invalid parameter: x0.len() = 1 is incorrect; it must be equal to ndim = 2 > 0"
        );
        let mut control = SolverControl::new();
        control.tol_abs_residual = 0.0;
        assert_eq!(
            solve(&[1.0, 1.0], &Circle {}, &control).err().unwrap().to_string(),
            "invalid parameter: tol_abs_residual = 0.0 is incorrect; it must be ≥ 1e-15"
        );
    }

    #[test]
    fn solve_works() {
        let control = SolverControl::new();
        let sol = solve(&[1.0, 0.5], &Circle {}, &control).unwrap();
        assert_abs_diff_eq!(sol.x[0], f64::sqrt(2.0), epsilon = 1e-10);
        assert_abs_diff_eq!(sol.x[1], f64::sqrt(2.0), epsilon = 1e-10);
        assert!(sol.residual_norm <= 1e-10);
        assert!(sol.iterations > 0 && sol.iterations < 10);
    }

    #[test]
    fn solve_returns_exact_guess_unchanged() {
        let control = SolverControl::new();
        let sol = solve(&[0.0], &Parabola { a: 0.0 }, &control).unwrap();
        assert_eq!(sol.x, &[0.0]);
        assert_eq!(sol.residual_norm, 0.0);
        assert_eq!(sol.iterations, 0);
    }

    #[test]
    fn solve_reports_missing_root() {
        let control = SolverControl::new();
        let err = solve(&[1.0], &Parabola { a: 1.0 }, &control).err().unwrap();
        assert!(err.is_convergence_failure());
        match err {
            RockPhysError::ConvergenceFailure {
                last_iterate,
                residual_norm,
                ..
            } => {
                assert_eq!(last_iterate.len(), 1);
                assert!(residual_norm >= 1.0);
            }
            _ => panic!("should be a convergence failure"),
        }
    }

    #[test]
    fn solve_reports_exhausted_iterations() {
        let mut control = SolverControl::new();
        control.n_max_iterations = 2;
        let err = solve(&[100.0, 0.0], &Circle {}, &control).err().unwrap();
        match err {
            RockPhysError::ConvergenceFailure {
                last_iterate,
                iterations,
                reason,
                ..
            } => {
                assert_eq!(iterations, 2);
                assert_eq!(reason, "maximum number of iterations reached");
                assert_eq!(last_iterate.len(), 2);
                assert!(last_iterate[0] < 100.0);
            }
            _ => panic!("should be a convergence failure"),
        }
    }

    #[test]
    fn solve_reports_nan_at_the_initial_guess() {
        let control = SolverControl::new();
        let err = solve(&[-1.0], &SquareRoot {}, &control).err().unwrap();
        match err {
            RockPhysError::ConvergenceFailure { iterations, reason, .. } => {
                assert_eq!(iterations, 0);
                assert_eq!(reason, "Found NaN or Inf");
            }
            _ => panic!("should be a convergence failure"),
        }
    }

    #[test]
    fn solve_backtracks_away_from_nan() {
        // the full Newton step from x = 25 lands at x = -5 where √x is NaN
        let control = SolverControl::new();
        let sol = solve(&[25.0], &SquareRoot {}, &control).unwrap();
        assert_abs_diff_eq!(sol.x[0], 4.0, epsilon = 1e-8);
    }

    #[test]
    fn solve_reports_singular_jacobian() {
        let control = SolverControl::new();
        let err = solve(&[1.0, 1.0], &Constant {}, &control).err().unwrap();
        assert_eq!(err.last_iterate(), Some(&[1.0, 1.0][..]));
        match err {
            RockPhysError::ConvergenceFailure { reason, .. } => assert_eq!(reason, "singular Jacobian"),
            _ => panic!("should be a convergence failure"),
        }
    }

    /// F(x) = (1, -1) has a zero Jacobian
    struct Constant {}

    impl ResidualFunction for Constant {
        fn ndim(&self) -> usize {
            2
        }
        fn residual(&self, _x: &[f64], r: &mut [f64]) -> Result<(), RockPhysError> {
            r[0] = 1.0;
            r[1] = -1.0;
            Ok(())
        }
    }
}
