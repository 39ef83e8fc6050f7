//! One-dimensional search for the single free parameter of a truncation.
//!
//! The caller supplies a closure that rebuilds whatever geometry depends on
//! the parameter and returns a residual: usually the difference in
//! inclination between two vertices that are meant to share a latitude.
//! The search walks the parameter in fixed steps until the residual changes
//! sign, then halves its step every time it crosses zero again.
//!
//! Nothing guarantees convergence. Seeds are picked per configuration by
//! hand, and a run that wanders off is only stopped by the iteration cap.

use slog::Logger;
use thiserror::Error;

use crate::types::Real;

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSpec {
    /// Largest acceptable |residual|.
    pub tolerance: Real,
    /// First step size, in the parameter's units (radians at every call site).
    pub initial_step: Real,
    pub max_iterations: usize,
}

impl Default for SearchSpec {
    fn default() -> SearchSpec {
        SearchSpec {
            tolerance: 0.000_000_000_01,
            initial_step: 0.5f64.to_radians(),
            max_iterations: 200,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Convergence {
    /// Parameter value of the last (accepted) evaluation.
    pub parameter: Real,
    /// |residual| at `parameter`.
    pub residual: Real,
    /// Number of times the residual closure was called.
    pub iterations: usize,
}

#[derive(Clone, Copy, PartialEq, Debug, Error)]
pub enum SearchError {
    #[error("no convergence after {iterations} iterations; residual {residual:e} at {parameter}")]
    IterationCap {
        parameter: Real,
        residual: Real,
        iterations: usize,
    },
    #[error("residual is not a number at {parameter} (iteration {iterations})")]
    NotANumber { parameter: Real, iterations: usize },
}

/// Search for a parameter, starting at `seed`, for which `residual_fn`
/// comes out within `spec.tolerance` of zero.
///
/// The closure is always last called with the returned parameter (or, on
/// failure, the parameter in the error) so any state it builds reflects
/// that value.
pub fn find_root<F>(
    spec: &SearchSpec,
    seed: Real,
    log: &Logger,
    mut residual_fn: F,
) -> Result<Convergence, SearchError>
where
    F: FnMut(Real) -> Real,
{
    let mut parameter = seed;
    let mut step = spec.initial_step;
    let mut last_residual: Option<Real> = None;
    let mut residual = Real::NAN;

    for iteration in 1..=spec.max_iterations {
        residual = residual_fn(parameter);
        trace!(log, "Search step";
            "iteration" => iteration,
            "parameter" => parameter,
            "residual" => residual,
            "step" => step);

        if residual.abs() <= spec.tolerance {
            debug!(log, "Search converged";
                "iterations" => iteration,
                "parameter" => parameter,
                "residual" => residual);
            return Ok(Convergence {
                parameter,
                residual: residual.abs(),
                iterations: iteration,
            });
        }
        if residual.is_nan() {
            warn!(log, "Search produced a NaN residual"; "parameter" => parameter);
            return Err(SearchError::NotANumber {
                parameter,
                iterations: iteration,
            });
        }
        if iteration == spec.max_iterations {
            break;
        }

        match last_residual {
            None => {
                // Assume the residual grows with the parameter.
                if residual > 0.0 {
                    step = -step;
                }
                parameter += step;
            }
            Some(last) if (residual > 0.0) == (last > 0.0) => {
                if residual.abs() < last.abs() {
                    // Getting closer; keep going.
                    parameter += step;
                } else {
                    // Heading the wrong way; go back and try the other side.
                    parameter -= step;
                    step = -step;
                    parameter += step;
                }
            }
            Some(_) => {
                // Crossed zero.
                step /= -2.0;
                parameter += step;
            }
        }
        last_residual = Some(residual);
    }

    warn!(log, "Search exceeded iteration cap";
        "max_iterations" => spec.max_iterations,
        "parameter" => parameter,
        "residual" => residual);
    Err(SearchError::IterationCap {
        parameter,
        residual,
        iterations: spec.max_iterations,
    })
}

#[cfg(test)]
mod tests;
