// Matchup generation: draw two distinct items for the next comparison
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use crate::item::Item;
use crate::rating::expected_score;
use crate::registry::ItemRegistry;
use crate::{Error, Result};

/// Two distinct items offered for comparison.
///
/// `matchup_id` only correlates requests on the client side; votes are never
/// checked against previously issued matchups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub matchup_id: u64,
    pub left_item: Item,
    pub right_item: Item,
}

/// How the two sides of a matchup are chosen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum PairingStrategy {
    /// Both sides uniformly at random, ignoring ratings
    Uniform,
    /// Left side uniformly, right side weighted towards similar ratings.
    ///
    /// A candidate's weight is `(p * (1 - p)) ^ sharpness` where `p` is the expected
    /// score of the left item against it. Larger `sharpness` concentrates on closer ratings.
    Proximity { sharpness: f64 },
}

impl Default for PairingStrategy {
    fn default() -> Self {
        PairingStrategy::Uniform
    }
}

impl PairingStrategy {
    pub fn validate(&self) -> Result<()> {
        match self {
            PairingStrategy::Uniform => Ok(()),
            PairingStrategy::Proximity { sharpness } => {
                if sharpness.is_finite() && *sharpness > 0.0 {
                    Ok(())
                } else {
                    Err(Error::InvalidInput(format!(
                        "proximity sharpness must be a positive number, got {}",
                        sharpness
                    )))
                }
            }
        }
    }

    /// Pick two distinct positions in `items`. Requires `items.len() >= 2`.
    fn pick<R: Rng + ?Sized>(&self, items: &[&Item], rng: &mut R) -> (usize, usize) {
        let left = rng.random_range(0..items.len());
        let right = match self {
            PairingStrategy::Uniform => {
                let mut right = rng.random_range(0..items.len());
                while right == left {
                    right = rng.random_range(0..items.len());
                }
                right
            }
            PairingStrategy::Proximity { sharpness } => {
                pick_by_proximity(items, left, *sharpness, rng)
            }
        };
        (left, right)
    }
}

/// Information carried by a comparison between two ratings, peaked at equal ratings
pub fn info_gain(rating_a: i32, rating_b: i32, sharpness: f64) -> f64 {
    let p = expected_score(rating_a, rating_b);
    (p * (1.0 - p)).powf(sharpness)
}

fn pick_by_proximity<R: Rng + ?Sized>(
    items: &[&Item],
    left: usize,
    sharpness: f64,
    rng: &mut R,
) -> usize {
    let left_rating = items[left].rating;
    let candidates: Vec<usize> = (0..items.len()).filter(|&i| i != left).collect();
    let weights: Vec<f64> = candidates
        .iter()
        .map(|&i| info_gain(left_rating, items[i].rating, sharpness))
        .collect();

    let total: f64 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return candidates[rng.random_range(0..candidates.len())];
    }

    let mut r = rng.random::<f64>() * total;
    for (j, &w) in weights.iter().enumerate() {
        r -= w;
        if r < 1e-10 {
            return candidates[j];
        }
    }
    candidates[candidates.len() - 1]
}

/// Issues matchups from a registry snapshot and numbers them
#[derive(Debug)]
pub struct MatchupGenerator {
    strategy: PairingStrategy,
    next_id: AtomicU64,
}

impl MatchupGenerator {
    pub fn new(strategy: PairingStrategy) -> Self {
        Self {
            strategy,
            next_id: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn strategy(&self) -> PairingStrategy {
        self.strategy
    }

    /// Draw a matchup from `registry`. Fails with `InsufficientItems` below two items.
    pub fn generate<R: Rng + ?Sized>(&self, registry: &ItemRegistry, rng: &mut R) -> Result<Matchup> {
        let items: Vec<&Item> = registry.iter().collect();
        if items.len() < 2 {
            return Err(Error::InsufficientItems { available: items.len() });
        }

        let (left, right) = self.strategy.pick(&items, rng);
        Ok(Matchup {
            matchup_id: self.next_id.fetch_add(1, Ordering::Relaxed),
            left_item: items[left].clone(),
            right_item: items[right].clone(),
        })
    }
}

impl Default for MatchupGenerator {
    fn default() -> Self {
        Self::new(PairingStrategy::default())
    }
}
