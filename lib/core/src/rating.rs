// Elo rating model: expected score and rating update after a single comparison

/// Rating every item starts with
pub const INITIAL_RATING: i32 = 1500;

/// K-factor: the largest amount a single comparison can move a rating
pub const K_FACTOR: f64 = 32.0;

/// Rating gap at which the stronger side is expected to win ten times as often
const SCALE: f64 = 400.0;

/// Result of a comparison from one side's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    #[inline]
    pub fn score(self) -> f64 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Loss => 0.0,
        }
    }
}

/// New ratings for both sides of a resolved comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingUpdate {
    pub winner: i32,
    pub loser: i32,
}

/// Probability that an item rated `rating_a` is preferred over one rated `rating_b`.
///
/// `expected_score(a, b) + expected_score(b, a) == 1` for all inputs.
#[inline]
#[must_use]
pub fn expected_score(rating_a: i32, rating_b: i32) -> f64 {
    let gap = f64::from(rating_b) - f64::from(rating_a);
    1.0 / (1.0 + 10f64.powf(gap / SCALE))
}

/// Move `current` towards the observed outcome, rounded half away from zero.
#[inline]
#[must_use]
pub fn new_rating(current: i32, expected: f64, outcome: Outcome) -> i32 {
    (f64::from(current) + K_FACTOR * (outcome.score() - expected)).round() as i32
}

/// Apply one comparison to both ratings.
///
/// Each side is rounded on its own, so the winner's gain and the loser's loss
/// can differ by one point.
#[must_use]
pub fn update_ratings(winner_rating: i32, loser_rating: i32) -> RatingUpdate {
    let winner_expected = expected_score(winner_rating, loser_rating);
    let loser_expected = expected_score(loser_rating, winner_rating);

    RatingUpdate {
        winner: new_rating(winner_rating, winner_expected, Outcome::Win),
        loser: new_rating(loser_rating, loser_expected, Outcome::Loss),
    }
}
