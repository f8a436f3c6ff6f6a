use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use crate::config::EngineConfig;
use crate::item::{Item, ItemAttributes, ItemId, ItemUpdate};
use crate::ledger::{PriorRatings, Vote};
use crate::matchup::{Matchup, MatchupGenerator};
use crate::rating::update_ratings;
use crate::repository::{MemoryRepository, Repository};
use crate::{Error, Result};

/// Result of a successful vote: the stored ledger entry and the next matchup to show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub vote: Vote,
    pub new_matchup: Matchup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_votes: usize,
    pub total_items: usize,
}

/// Entry point of the ranking engine.
///
/// Owns no item or vote state itself; it sequences calls against its repository.
pub struct RankingEngine<R: Repository = MemoryRepository> {
    repo: R,
    matchups: MatchupGenerator,
    config: EngineConfig,
}

impl RankingEngine<MemoryRepository> {
    /// Engine over an empty in-memory repository
    pub fn in_memory(config: EngineConfig) -> Result<Self> {
        Self::new(MemoryRepository::new(), config)
    }
}

impl<R: Repository> RankingEngine<R> {
    pub fn new(repo: R, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            repo,
            matchups: MatchupGenerator::new(config.pairing),
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Insert the starting catalogue in one step and rank it.
    ///
    /// Either every item is inserted or, if any attribute set is invalid, none is.
    pub fn seed<I>(&self, catalogue: I) -> Result<Vec<Item>>
    where
        I: IntoIterator<Item = ItemAttributes>,
    {
        let catalogue: Vec<ItemAttributes> = catalogue.into_iter().collect();
        if let Some(blank) = catalogue.iter().position(|a| a.name.trim().is_empty()) {
            return Err(Error::InvalidInput(format!(
                "seed entry {} has an empty name",
                blank
            )));
        }

        let seeded = self.repo.write(|store| {
            let mut ids = Vec::with_capacity(catalogue.len());
            for attributes in catalogue {
                ids.push(store.items.insert(attributes)?);
            }
            store.items.recompute_ranks();
            ids.iter()
                .map(|&id| store.items.get(id).cloned())
                .collect::<Result<Vec<Item>>>()
        })?;

        info!(count = seeded.len(), "Seeded item registry");
        Ok(seeded)
    }

    /// All items, in no particular order
    pub fn list_items(&self) -> Vec<Item> {
        self.repo.read(|store| store.items.list_all())
    }

    /// All items ordered by rank
    pub fn ranked_items(&self) -> Vec<Item> {
        self.repo.read(|store| store.items.ranked())
    }

    pub fn get_item(&self, id: ItemId) -> Result<Item> {
        self.repo.read(|store| store.items.get(id).cloned())
    }

    pub fn list_by_category(&self, category: &str) -> Vec<Item> {
        self.repo.read(|store| store.items.list_by_category(category))
    }

    pub fn list_by<F>(&self, predicate: F) -> Vec<Item>
    where
        F: Fn(&Item) -> bool,
    {
        self.repo.read(|store| store.items.list_by(predicate))
    }

    pub fn create_item(&self, attributes: ItemAttributes) -> Result<Item> {
        let item = self.repo.write(|store| store.items.create(attributes))?;
        info!(id = item.id, name = %item.name, "Created item");
        Ok(item)
    }

    pub fn apply_update(&self, id: ItemId, update: ItemUpdate) -> Result<Item> {
        self.repo.write(|store| store.items.apply_update(id, update))
    }

    pub fn recompute_ranks(&self) -> Result<()> {
        self.repo.write(|store| {
            store.items.recompute_ranks();
            Ok(())
        })
    }

    /// Two distinct items drawn from a consistent snapshot of the registry
    pub fn random_matchup(&self) -> Result<Matchup> {
        let matchup = self
            .repo
            .read(|store| self.matchups.generate(&store.items, &mut rand::rng()))?;
        debug!(
            matchup_id = matchup.matchup_id,
            left = matchup.left_item.id,
            right = matchup.right_item.id,
            "Issued matchup"
        );
        Ok(matchup)
    }

    /// Resolve one comparison.
    ///
    /// Reading both ratings, writing both new ratings, appending the vote and
    /// reranking happen in a single write section, so concurrent votes cannot
    /// lose each other's updates and readers never see half a vote.
    pub fn record_vote(&self, winner_id: ItemId, loser_id: ItemId) -> Result<VoteReceipt> {
        if winner_id == loser_id {
            return Err(Error::InvalidVote(winner_id));
        }

        let vote = self.repo.write(|store| {
            let prior = PriorRatings {
                winner: store.items.get(winner_id)?.rating,
                loser: store.items.get(loser_id)?.rating,
            };
            let update = update_ratings(prior.winner, prior.loser);

            store.items.set_rating(winner_id, update.winner)?;
            store.items.set_rating(loser_id, update.loser)?;
            let vote = store
                .votes
                .append(winner_id, loser_id, prior, update, Utc::now());
            store.items.recompute_ranks();
            Ok(vote)
        })?;

        debug!(
            vote_id = vote.id,
            winner_id,
            loser_id,
            winner_prev = vote.winner_prev_rating,
            winner_new = vote.winner_new_rating,
            loser_prev = vote.loser_prev_rating,
            loser_new = vote.loser_new_rating,
            "Recorded vote"
        );

        let new_matchup = self.random_matchup()?;
        Ok(VoteReceipt { vote, new_matchup })
    }

    /// Newest votes first. A missing or non-positive `limit` uses the configured default.
    pub fn recent_votes(&self, limit: Option<i64>) -> Vec<Vote> {
        let limit = limit
            .filter(|&l| l > 0)
            .and_then(|l| usize::try_from(l).ok())
            .unwrap_or(self.config.default_recent_limit);
        self.repo.read(|store| store.votes.recent(limit))
    }

    pub fn total_vote_count(&self) -> usize {
        self.repo.read(|store| store.votes.len())
    }

    pub fn stats(&self) -> Stats {
        self.repo.read(|store| Stats {
            total_votes: store.votes.len(),
            total_items: store.items.len(),
        })
    }
}
