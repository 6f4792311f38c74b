use super::SolverControl;
use crate::StrError;

/// Tracks the convergence of the nonlinear iterations
///
/// The tracker records the max-norm of the residual vector and the relative size of the
/// iterative increment, flags convergence, divergence and stagnation, and prints the
/// iteration table when `verbose_iterations` is enabled.
pub struct ConvergenceTracker<'a> {
    control: &'a SolverControl,
    iteration: usize,
    norm_rr_prev: f64,
    norm_rr: f64,
    rel_step: f64,
    line_search_factor: f64,
    converged: bool,
    diverging: bool,
    stagnated: bool,
}

impl<'a> ConvergenceTracker<'a> {
    /// Creates a new tracker
    pub fn new(control: &'a SolverControl) -> Self {
        ConvergenceTracker {
            control,
            iteration: 0,
            norm_rr_prev: 0.0,
            norm_rr: 0.0,
            rel_step: f64::NAN,
            line_search_factor: f64::NAN,
            converged: false,
            diverging: false,
            stagnated: false,
        }
    }

    // getters

    /// Returns the current iteration number
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Returns the max-norm of the last residual vector
    pub fn norm_rr(&self) -> f64 {
        self.norm_rr
    }

    /// Indicates that the residual is below the tolerance
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Indicates that the last increment was negligible while the residual is still large
    pub fn stagnated(&self) -> bool {
        self.stagnated
    }

    // analysis

    /// Analyzes the residual vector at a new iterate
    ///
    /// Returns an error if the residual contains NaN or Inf.
    pub(crate) fn analyze_rr(&mut self, iteration: usize, rr: &[f64]) -> Result<(), StrError> {
        // record iteration index
        self.iteration = iteration;

        // compute the norm of R (NaN propagates)
        self.norm_rr = rr.iter().fold(0.0_f64, |acc, r| {
            if r.is_nan() || acc.is_nan() {
                f64::NAN
            } else {
                f64::max(acc, f64::abs(*r))
            }
        });

        // check for NaN or Inf
        let found_nan_or_inf = !self.norm_rr.is_finite();

        // check convergence
        self.converged = if found_nan_or_inf {
            false
        } else {
            self.norm_rr <= self.control.tol_abs_residual
        };

        // check if diverging
        self.diverging = if found_nan_or_inf || iteration == 0 {
            false
        } else {
            self.norm_rr > self.norm_rr_prev
        };

        // record the norm at subsequent iterations
        self.norm_rr_prev = self.norm_rr;

        // done
        if found_nan_or_inf {
            Err("Found NaN or Inf")
        } else {
            Ok(())
        }
    }

    /// Analyzes the accepted increment Δx = λ·δx
    ///
    /// ```text
    ///                  /    |Δxᵢ|    \
    /// rel_step = max_i | ——————————— |
    ///                  \ 1 + |xᵢ|    /
    /// ```
    pub(crate) fn analyze_step(&mut self, x: &[f64], step: &[f64], lambda: f64) {
        self.line_search_factor = lambda;
        self.rel_step = x
            .iter()
            .zip(step)
            .fold(0.0_f64, |acc, (xi, dxi)| f64::max(acc, f64::abs(*dxi) / (1.0 + f64::abs(*xi))));
        self.stagnated = self.rel_step <= self.control.tol_rel_step;
    }

    /// Prints the header of the iteration table
    pub fn print_header(&self) {
        if self.control.verbose_iterations {
            println!("\nROCKPHY === NONLINEAR ITERATIONS ==============================================");
            println!("\nLegend:");
            println!("✅ ─ converged");
            println!("👍 ─ converging");
            println!("🥵 ─ diverging");
            println!("😱 ─ found NaN or Inf");
            println!("\"λ\" means line search factor\n");
            println!("{}", "─".repeat(55));
            println!("{:>5} {:>11} {:>11} {:>11} {:>4}", "iter", "‖R‖∞", "rel(Δx)", "λ", "");
            println!("{}", "─".repeat(55));
        }
    }

    /// Prints the information about the current iteration
    pub(crate) fn print_iteration(&self) {
        if self.control.verbose_iterations {
            let icon = if !self.norm_rr.is_finite() {
                "😱"
            } else if self.converged {
                "✅"
            } else if self.diverging {
                "🥵"
            } else {
                "👍"
            };
            if self.iteration == 0 {
                println!(
                    "{:>5} {:>11.4e} {:>11} {:>11} {:>4}",
                    self.iteration, self.norm_rr, "·", "·", icon
                );
            } else {
                println!(
                    "{:>5} {:>11.4e} {:>11.4e} {:>11.4e} {:>4}",
                    self.iteration, self.norm_rr, self.rel_step, self.line_search_factor, icon
                );
            }
        }
    }

    /// Prints the horizontal line at the end of the iterations
    pub(crate) fn print_footer(&self) {
        if self.control.verbose_iterations {
            println!("{}", "─".repeat(55));
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
