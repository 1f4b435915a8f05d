//! Volatility solver for step 5 of Glicko-2
//!
//! Finds the root of
//!
//! ```text
//! f(x) = e^x (delta^2 - phi^2 - v - e^x) / (2 (phi^2 + v + e^x)^2) - (x - a) / tau^2
//! ```
//!
//! with `a = ln(sigma^2)` using the Illinois variant of regula falsi: the
//! retained endpoint's function value is halved whenever an iteration fails
//! to swap the bracket.

use crate::config::Glicko2Config;
use crate::error::{RatingError, Result};
use tracing::error;

/// Quantities of the subject that the volatility update depends on, all on
/// the Glicko-2 scale
#[derive(Debug, Clone, Copy)]
pub struct VolatilityInputs {
    /// Pre-period deviation (phi)
    pub deviation: f64,
    /// Pre-period volatility (sigma)
    pub volatility: f64,
    /// Estimated variance from the period's games (v)
    pub variance: f64,
    /// Estimated improvement from the period's games (delta)
    pub improvement: f64,
}

/// Converged volatility and the number of refinement steps it took
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolatilitySolution {
    pub volatility: f64,
    pub iterations: usize,
}

impl VolatilityInputs {
    fn objective(&self, x: f64, a: f64, tau: f64) -> f64 {
        let e_x = x.exp();
        let phi2 = self.deviation * self.deviation;
        let denominator = phi2 + self.variance + e_x;

        (e_x * (self.improvement * self.improvement - denominator))
            / (2.0 * denominator * denominator)
            - (x - a) / (tau * tau)
    }

    fn check_finite(&self) -> Result<()> {
        let values = [
            ("deviation", self.deviation),
            ("volatility", self.volatility),
            ("variance", self.variance),
            ("improvement", self.improvement),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(RatingError::DomainError {
                    reason: format!("{} is not finite: {}", name, value),
                }
                .into());
            }
        }
        if self.volatility <= 0.0 || self.variance <= 0.0 {
            return Err(RatingError::DomainError {
                reason: format!(
                    "volatility and variance must be positive, got {} and {}",
                    self.volatility, self.variance
                ),
            }
            .into());
        }
        Ok(())
    }
}

/// Solve for the post-period volatility (sigma')
pub fn solve_volatility(
    inputs: &VolatilityInputs,
    config: &Glicko2Config,
) -> Result<VolatilitySolution> {
    inputs.check_finite()?;

    let tau = config.volatility_constraint;
    let tolerance = config.convergence_tolerance;
    let max_iterations = config.max_iterations;

    let a = (inputs.volatility * inputs.volatility).ln();
    let f = |x: f64| -> Result<f64> {
        let value = inputs.objective(x, a, tau);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(RatingError::DomainError {
                reason: format!("volatility objective is not finite at x = {}", x),
            }
            .into())
        }
    };

    // Step 5.2: initial bracket
    let mut big_a = a;
    let delta2 = inputs.improvement * inputs.improvement;
    let phi2_plus_v = inputs.deviation * inputs.deviation + inputs.variance;
    let mut big_b = if delta2 > phi2_plus_v {
        (delta2 - phi2_plus_v).ln()
    } else {
        let mut k = 1;
        while f(a - k as f64 * tau)? < 0.0 {
            k += 1;
            if k > max_iterations {
                error!(
                    "Volatility bracket search exceeded {} steps (phi={}, sigma={}, v={}, delta={})",
                    max_iterations,
                    inputs.deviation,
                    inputs.volatility,
                    inputs.variance,
                    inputs.improvement
                );
                return Err(RatingError::NonConvergence {
                    iterations: max_iterations,
                }
                .into());
            }
        }
        a - k as f64 * tau
    };

    // Step 5.3
    let mut f_a = f(big_a)?;
    let mut f_b = f(big_b)?;

    // Step 5.4
    let mut iterations = 0;
    while (big_b - big_a).abs() > tolerance {
        if iterations >= max_iterations {
            error!(
                "Volatility iteration did not converge after {} steps (bracket [{}, {}])",
                iterations, big_a, big_b
            );
            return Err(RatingError::NonConvergence { iterations }.into());
        }
        iterations += 1;

        let big_c = big_a + (big_a - big_b) * f_a / (f_b - f_a);
        let f_c = f(big_c)?;
        if f_c * f_b <= 0.0 {
            big_a = big_b;
            f_a = f_b;
        } else {
            f_a /= 2.0;
        }
        big_b = big_c;
        f_b = f_c;
    }

    Ok(VolatilitySolution {
        volatility: (big_a / 2.0).exp(),
        iterations,
    })
}
