//! Shared fixtures for integration testing

#![allow(dead_code)]

use glicko_rating::{GameOutcome, Rating};
use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber once; later calls are no-ops
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_test_writer()
        .try_init();
}

/// Player from Glickman's worked example
pub fn reference_player() -> Rating {
    Rating::new(1500.0, 200.0, 0.06)
}

/// Opponents from Glickman's worked example
pub fn reference_opponents() -> Vec<Rating> {
    vec![
        Rating::new(1400.0, 30.0, 0.06),
        Rating::new(1550.0, 100.0, 0.06),
        Rating::new(1700.0, 300.0, 0.06),
    ]
}

/// Scores of the worked example: a win followed by two losses
pub fn reference_scores() -> Vec<f64> {
    vec![1.0, 0.0, 0.0]
}

pub fn reference_outcomes() -> Vec<GameOutcome> {
    reference_opponents()
        .into_iter()
        .zip(reference_scores())
        .map(|(opponent, score)| GameOutcome::new(opponent, score))
        .collect()
}

/// A club-sized field with varied ratings and certainty
pub fn club_field() -> Vec<Rating> {
    let competitors = vec![
        ("expert", 2000.0, 60.0),
        ("skilled_1", 1800.0, 120.0),
        ("skilled_2", 1750.0, 130.0),
        ("average_1", 1500.0, 200.0),
        ("average_2", 1450.0, 180.0),
        ("average_3", 1550.0, 190.0),
        ("beginner_1", 1200.0, 250.0),
        ("beginner_2", 1150.0, 280.0),
        ("newcomer", 1500.0, 350.0),
        ("consistent", 1600.0, 80.0),
    ];

    competitors
        .into_iter()
        .map(|(_, rating, deviation)| Rating::new(rating, deviation, 0.06))
        .collect()
}

pub fn assert_close(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() <= epsilon,
        "expected {} within {} of {}",
        actual,
        epsilon,
        expected
    );
}
