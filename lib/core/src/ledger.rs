use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::item::ItemId;
use crate::rating::RatingUpdate;

pub type VoteId = u64;

/// A resolved comparison together with the ratings it moved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub id: VoteId,
    pub winner_id: ItemId,
    pub loser_id: ItemId,
    pub winner_prev_rating: i32,
    pub winner_new_rating: i32,
    pub loser_prev_rating: i32,
    pub loser_new_rating: i32,
    pub timestamp: DateTime<Utc>,
}

impl Vote {
    #[inline]
    pub fn winner_delta(&self) -> i64 {
        i64::from(self.winner_new_rating) - i64::from(self.winner_prev_rating)
    }

    #[inline]
    pub fn loser_delta(&self) -> i64 {
        i64::from(self.loser_new_rating) - i64::from(self.loser_prev_rating)
    }
}

/// Ratings of both sides immediately before a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorRatings {
    pub winner: i32,
    pub loser: i32,
}

/// Append-only history of votes. Entries are never modified or removed.
#[derive(Debug, Clone)]
pub struct VoteLedger {
    votes: Vec<Vote>,
    next_id: VoteId,
}

impl Default for VoteLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl VoteLedger {
    pub fn new() -> Self {
        Self {
            votes: Vec::new(),
            next_id: 1,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.votes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// All votes in the order they were appended
    #[inline]
    pub fn as_slice(&self) -> &[Vote] {
        &self.votes
    }

    pub fn get(&self, id: VoteId) -> Option<&Vote> {
        // ids are dense and start at 1
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        self.votes.get(index)
    }

    /// Record a vote and return a copy of the stored entry
    pub fn append(
        &mut self,
        winner_id: ItemId,
        loser_id: ItemId,
        prior: PriorRatings,
        update: RatingUpdate,
        timestamp: DateTime<Utc>,
    ) -> Vote {
        let vote = Vote {
            id: self.next_id,
            winner_id,
            loser_id,
            winner_prev_rating: prior.winner,
            winner_new_rating: update.winner,
            loser_prev_rating: prior.loser,
            loser_new_rating: update.loser,
            timestamp,
        };
        self.next_id += 1;
        self.votes.push(vote.clone());
        vote
    }

    /// Newest votes first, at most `limit` of them
    pub fn recent(&self, limit: usize) -> Vec<Vote> {
        let mut votes: Vec<&Vote> = self.votes.iter().collect();
        votes.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        votes.into_iter().take(limit).cloned().collect()
    }
}
