//! Published Glicko-2 constants
//!
//! Values follow Glickman's "Example of the Glicko-2 system"
//! (<http://www.glicko.net/glicko/glicko2.pdf>).

/// Conversion ratio between the natural Glicko scale and the internal
/// Glicko-2 scale, `ln(10) * 400 / pi`.
pub const GLICKO_SCALE: f64 = 173.7178;

/// Rating assigned to an unrated competitor (step 1)
pub const DEFAULT_RATING: f64 = 1500.0;

/// Rating deviation assigned to an unrated competitor (step 1)
pub const DEFAULT_DEVIATION: f64 = 350.0;

/// Volatility assigned to an unrated competitor (step 1)
pub const DEFAULT_VOLATILITY: f64 = 0.06;

/// Default system constant tau.
///
/// Reasonable choices lie between 0.3 and 1.2 depending on the game.
/// Smaller values keep volatility from moving by large amounts, which in turn
/// prevents enormous rating swings after very improbable results.
pub const DEFAULT_VOLATILITY_CONSTRAINT: f64 = 0.5;

/// Bracket width at which the volatility iteration stops (step 5.1)
pub const CONVERGENCE_TOLERANCE: f64 = 0.000_001;

/// Upper bound on volatility solver iterations, shared by the bracket search
/// and the Illinois refinement.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;
