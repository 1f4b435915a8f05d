//! Glicko-2 rating period update
//!
//! Implements steps 3 through 8 of Glickman's "Example of the Glicko-2
//! system" for a single competitor. All arithmetic happens on the Glicko-2
//! scale; only the final result is converted back to the natural scale.

use crate::config::Glicko2Config;
use crate::error::{RatingError, Result};
use crate::rating::volatility::{solve_volatility, VolatilityInputs};
use crate::types::{GameOutcome, Rating, RatingChange};
use crate::utils::{scale_deviation, unscale_deviation, unscale_rating};
use std::f64::consts::PI;
use tracing::{debug, warn};

/// Weighting factor `g(phi)`; shrinks an opponent's influence as their
/// deviation grows
pub fn g(scaled_deviation: f64) -> f64 {
    1.0 / (1.0 + 3.0 * scaled_deviation * scaled_deviation / (PI * PI)).sqrt()
}

/// Expected score `E` of `subject` against `opponent`, i.e. the estimated
/// probability that the subject wins
pub fn expected_score(subject: &Rating, opponent: &Rating) -> f64 {
    let weight = g(opponent.scaled_deviation());
    1.0 / (1.0 + (-weight * (subject.scaled_rating() - opponent.scaled_rating())).exp())
}

/// Compute the posterior rating of `subject` after a period against
/// `opponents` with the matching `scores`.
///
/// `opponents` and `scores` must be non-empty and of equal length. The
/// subject is taken by reference and never modified; callers replace their
/// stored rating with the returned value.
pub fn update_rating(
    subject: &Rating,
    opponents: &[Rating],
    scores: &[f64],
    config: &Glicko2Config,
) -> Result<Rating> {
    if opponents.len() != scores.len() {
        warn!(
            "Rejecting rating update: {} opponents but {} scores",
            opponents.len(),
            scores.len()
        );
        return Err(RatingError::InvalidArgument {
            reason: format!(
                "got {} opponents but {} scores",
                opponents.len(),
                scores.len()
            ),
        }
        .into());
    }

    let outcomes: Vec<GameOutcome> = opponents
        .iter()
        .zip(scores)
        .map(|(opponent, score)| GameOutcome::new(*opponent, *score))
        .collect();

    update_rating_with_outcomes(subject, &outcomes, config)
}

/// Same as [`update_rating`], with each opponent already paired with its score
pub fn update_rating_with_outcomes(
    subject: &Rating,
    outcomes: &[GameOutcome],
    config: &Glicko2Config,
) -> Result<Rating> {
    rating_period(subject, outcomes, config).map(|change| change.new_rating)
}

/// Run a full rating period update and keep the intermediate quantities
pub fn rating_period(
    subject: &Rating,
    outcomes: &[GameOutcome],
    config: &Glicko2Config,
) -> Result<RatingChange> {
    validate_period(subject, outcomes)?;

    let mu = subject.scaled_rating();
    let phi = subject.scaled_deviation();

    // Steps 3 and 4
    let mut information = 0.0;
    let mut score_surplus = 0.0;
    for outcome in outcomes {
        let weight = g(outcome.opponent.scaled_deviation());
        let expected = expected_score(subject, &outcome.opponent);

        information += weight * weight * expected * (1.0 - expected);
        score_surplus += weight * (outcome.score - expected);
    }
    let variance = 1.0 / information;
    if !variance.is_finite() {
        return Err(RatingError::DomainError {
            reason: format!("estimated variance is not finite (information {})", information),
        }
        .into());
    }
    let improvement = variance * score_surplus;

    // Step 5
    let solution = solve_volatility(
        &VolatilityInputs {
            deviation: phi,
            volatility: subject.volatility(),
            variance,
            improvement,
        },
        config,
    )?;
    let new_volatility = solution.volatility;

    // Step 6
    let phi_star = (phi * phi + new_volatility * new_volatility).sqrt();

    // Step 7
    let new_phi = 1.0 / (1.0 / (phi_star * phi_star) + 1.0 / variance).sqrt();
    let new_mu = mu + new_phi * new_phi * score_surplus;

    // Step 8
    let new_rating = Rating::new(
        unscale_rating(new_mu),
        unscale_deviation(new_phi),
        new_volatility,
    );
    new_rating.validate()?;

    debug!(
        "Rating period over {} games: {:.2}/{:.2}/{:.5} -> {:.2}/{:.2}/{:.5} ({} volatility steps)",
        outcomes.len(),
        subject.rating(),
        subject.deviation(),
        subject.volatility(),
        new_rating.rating(),
        new_rating.deviation(),
        new_rating.volatility(),
        solution.iterations
    );

    Ok(RatingChange {
        old_rating: *subject,
        new_rating,
        estimated_variance: variance,
        estimated_improvement: improvement,
        pre_period_deviation: unscale_deviation(phi_star),
        volatility_iterations: solution.iterations,
    })
}

/// Inflate the deviation of a competitor who played no games this period.
///
/// Rating and volatility stay the same; the deviation becomes
/// `sqrt(phi^2 + sigma^2)`. [`rating_period`] never applies this on its own,
/// an empty outcome list is rejected there.
pub fn apply_inactivity_decay(rating: &Rating) -> Result<Rating> {
    rating.validate()?;

    let phi = scale_deviation(rating.deviation());
    let sigma = rating.volatility();
    let inflated = (phi * phi + sigma * sigma).sqrt();

    Ok(rating.with_rating_and_deviation(rating.rating(), unscale_deviation(inflated)))
}

fn validate_period(subject: &Rating, outcomes: &[GameOutcome]) -> Result<()> {
    if outcomes.is_empty() {
        warn!("Rejecting rating update: no games in period");
        return Err(RatingError::InvalidArgument {
            reason: "at least one game is required for a rating period".to_string(),
        }
        .into());
    }

    for (i, outcome) in outcomes.iter().enumerate() {
        if !(0.0..=1.0).contains(&outcome.score) {
            warn!("Rejecting rating update: score {} of game {}", outcome.score, i);
            return Err(RatingError::InvalidArgument {
                reason: format!("score of game {} must be within [0, 1], got {}", i, outcome.score),
            }
            .into());
        }
    }

    subject.validate()?;
    for outcome in outcomes {
        outcome.opponent.validate()?;
    }

    Ok(())
}
