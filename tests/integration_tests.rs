//! Integration tests for the Glicko-2 rating crate
//!
//! These tests exercise the public API end to end, including:
//! - Glickman's worked example and its intermediate values
//! - Agreement with the skillratings Glicko-2 implementation
//! - Invalid input handling and the all-or-nothing update guarantee
//! - Configuration loading feeding into the calculator

mod fixtures;

use glicko_rating::rating::{expected_score, g, rating_period, update_rating};
use glicko_rating::{
    GameOutcome, Glicko2Config, Glicko2RatingCalculator, Rating, RatingCalculator, RatingError,
};
use skillratings::glicko2::{glicko2_rating_period, Glicko2Config as ReferenceConfig, Glicko2Rating};
use skillratings::Outcomes;

use fixtures::{
    assert_close, club_field, init_test_logging, reference_opponents, reference_outcomes,
    reference_player, reference_scores,
};

#[test]
fn test_reference_scenario() {
    init_test_logging();

    let updated = update_rating(
        &reference_player(),
        &reference_opponents(),
        &reference_scores(),
        &Glicko2Config::default(),
    )
    .unwrap();

    assert_close(updated.rating(), 1464.06, 0.01);
    assert_close(updated.deviation(), 151.52, 0.01);
    assert_close(updated.volatility(), 0.05999, 0.00001);
}

#[test]
fn test_reference_intermediate_values() {
    let player = reference_player();
    assert_close(player.scaled_rating(), 0.0, 0.0001);
    assert_close(player.scaled_deviation(), 1.1513, 0.0001);

    let expected = [
        // scaled rating, scaled deviation, g, E
        (-0.5756, 0.1727, 0.9955, 0.639),
        (0.2878, 0.5756, 0.9531, 0.432),
        (1.1513, 1.7269, 0.7242, 0.303),
    ];

    for (opponent, (mu, phi, weight, score)) in reference_opponents().iter().zip(expected) {
        assert_close(opponent.scaled_rating(), mu, 0.0001);
        assert_close(opponent.scaled_deviation(), phi, 0.0001);
        assert_close(g(opponent.scaled_deviation()), weight, 0.0001);
        assert_close(expected_score(&player, opponent), score, 0.001);
    }
}

#[test]
fn test_matches_skillratings_reference() {
    init_test_logging();

    let field = club_field();
    let reference_config = ReferenceConfig::new();
    let config = Glicko2Config::default();

    for (index, subject) in field.iter().enumerate() {
        let opponents: Vec<Rating> = field
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != index)
            .map(|(_, rating)| *rating)
            .collect();

        // Beat everyone rated below, lose to everyone above, draw equals
        let outcomes: Vec<(Rating, Outcomes)> = opponents
            .iter()
            .map(|opponent| {
                let outcome = if subject.rating() > opponent.rating() {
                    Outcomes::WIN
                } else if subject.rating() < opponent.rating() {
                    Outcomes::LOSS
                } else {
                    Outcomes::DRAW
                };
                (*opponent, outcome)
            })
            .collect();

        let scores: Vec<f64> = outcomes
            .iter()
            .map(|(_, outcome)| match outcome {
                Outcomes::WIN => 1.0,
                Outcomes::DRAW => 0.5,
                Outcomes::LOSS => 0.0,
            })
            .collect();
        let ours = update_rating(subject, &opponents, &scores, &config).unwrap();

        let results: Vec<(Glicko2Rating, Outcomes)> = outcomes
            .iter()
            .map(|(opponent, outcome)| (Glicko2Rating::from(*opponent), *outcome))
            .collect();
        let player = Glicko2Rating::from(*subject);
        let theirs = Rating::from(glicko2_rating_period(&player, &results, &reference_config));

        assert_close(ours.rating(), theirs.rating(), 0.01);
        assert_close(ours.deviation(), theirs.deviation(), 0.01);
        assert_close(ours.volatility(), theirs.volatility(), 0.00001);
    }
}

#[test]
fn test_invalid_input_leaves_subject_unchanged() {
    init_test_logging();

    let calculator = Glicko2RatingCalculator::default();
    let original = reference_player();
    let mut subject = original;

    let err = calculator.update_in_place(&mut subject, &[], &[]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RatingError>(),
        Some(RatingError::InvalidArgument { .. })
    ));
    assert_eq!(subject, original);

    let err = calculator
        .update_in_place(&mut subject, &reference_opponents(), &[1.0, 0.0])
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RatingError>(),
        Some(RatingError::InvalidArgument { .. })
    ));
    assert_eq!(subject, original);

    let broken_opponent = Rating::new(1500.0, -30.0, 0.06);
    let err = calculator
        .update_in_place(&mut subject, &[broken_opponent], &[1.0])
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RatingError>(),
        Some(RatingError::DomainError { .. })
    ));
    assert_eq!(subject, original);
}

#[test]
fn test_rating_change_through_trait() {
    let calculator: &dyn RatingCalculator = &Glicko2RatingCalculator::default();
    let change = calculator
        .calculate_rating_change(&reference_player(), &reference_outcomes())
        .unwrap();

    assert_close(change.new_rating.rating(), 1464.06, 0.01);
    assert_close(change.rating_delta(), -35.95, 0.01);
    assert!(change.new_rating.deviation() <= change.pre_period_deviation);
    assert!(change.pre_period_deviation > reference_player().deviation());
}

#[test]
fn test_inactive_period_only_inflates_deviation() {
    let calculator = Glicko2RatingCalculator::default();
    let rating = reference_player();

    let decayed = calculator.apply_inactivity(&rating).unwrap();
    assert_eq!(decayed.rating(), rating.rating());
    assert_eq!(decayed.volatility(), rating.volatility());
    assert_close(decayed.deviation(), 200.27, 0.01);

    // Empty periods are never decayed implicitly
    assert!(calculator.calculate_rating_change(&rating, &[]).is_err());
}

#[test]
fn test_toml_config_drives_calculator() {
    let config = Glicko2Config::from_toml_str(
        r#"
        default_rating = 1200.0
        default_deviation = 300.0
        volatility_constraint = 0.3
        "#,
    )
    .unwrap();
    let calculator = Glicko2RatingCalculator::new(config).unwrap();

    let newcomer = calculator.get_initial_rating();
    assert_eq!(newcomer.rating(), 1200.0);
    assert_eq!(newcomer.deviation(), 300.0);

    // Scaling is anchored at 1500 regardless of the configured start rating
    assert_close(newcomer.scaled_rating(), -300.0 / 173.7178, 1e-12);

    let after = calculator
        .update_rating(&newcomer, &[Rating::new(1250.0, 90.0, 0.06)], &[1.0])
        .unwrap();
    assert!(after.rating() > newcomer.rating());
}

#[test]
fn test_repeated_periods_converge_towards_true_strength() {
    let config = Glicko2Config::default();
    let field = club_field();
    let mut rating = Rating::default();

    // An unrated player who wins against everyone below 1600 and loses otherwise
    for _ in 0..10 {
        let outcomes: Vec<GameOutcome> = field
            .iter()
            .map(|opponent| {
                if opponent.rating() < 1600.0 {
                    GameOutcome::win(*opponent)
                } else {
                    GameOutcome::loss(*opponent)
                }
            })
            .collect();
        rating = rating_period(&rating, &outcomes, &config).unwrap().new_rating;
    }

    assert!(rating.rating() > 1450.0 && rating.rating() < 1750.0);
    assert!(rating.deviation() < 100.0);
}

#[test]
fn test_rating_json_round_trip() {
    let rating = Rating::new(1464.06, 151.52, 0.05999);
    let json = serde_json::to_string(&rating).unwrap();
    let parsed: Rating = serde_json::from_str(&json).unwrap();
    assert_close(parsed.rating(), rating.rating(), 1e-9);
    assert_close(parsed.deviation(), rating.deviation(), 1e-9);
    assert_close(parsed.volatility(), rating.volatility(), 1e-12);
    assert_close(parsed.scaled_deviation(), rating.scaled_deviation(), 1e-12);
}
