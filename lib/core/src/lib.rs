//! # RankX Core
//!
//! Core library for the RankX pairwise ranking engine.
//!
//! Users judge pairs of items ("A is preferred over B"). Each judgment moves both
//! items' Elo ratings, is appended to an immutable ledger, and reranks every item.
//!
//! - [`rating`] - Elo expected score and rating update
//! - [`ItemRegistry`] - owns items, assigns ids, recomputes ranks
//! - [`VoteLedger`] - append-only vote history
//! - [`MatchupGenerator`] - draws two distinct items for the next comparison
//! - [`Repository`] / [`MemoryRepository`] - guarded access to items and votes
//! - [`RankingEngine`] - records votes atomically and serves queries
//!
//! ## Example
//!
//! ```rust
//! use rankx_core::{EngineConfig, ItemAttributes, RankingEngine};
//!
//! let engine = RankingEngine::in_memory(EngineConfig::default()).unwrap();
//! engine.seed(vec![
//!     ItemAttributes::new("Taj Mahal", "CULTURAL"),
//!     ItemAttributes::new("Kaziranga National Park", "NATURAL"),
//! ]).unwrap();
//!
//! let receipt = engine.record_vote(2, 1).unwrap();
//! assert_eq!(receipt.vote.winner_new_rating, 1516);
//! assert_eq!(engine.get_item(2).unwrap().rank, Some(1));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod item;
pub mod ledger;
pub mod matchup;
pub mod rating;
pub mod registry;
pub mod repository;

pub use config::{EngineConfig, DEFAULT_RECENT_LIMIT};
pub use engine::{RankingEngine, Stats, VoteReceipt};
pub use error::{Error, Result};
pub use item::{Item, ItemAttributes, ItemId, ItemUpdate};
pub use ledger::{PriorRatings, Vote, VoteId, VoteLedger};
pub use matchup::{Matchup, MatchupGenerator, PairingStrategy};
pub use rating::{expected_score, new_rating, update_ratings, Outcome, RatingUpdate, INITIAL_RATING, K_FACTOR};
pub use registry::ItemRegistry;
pub use repository::{MemoryRepository, Repository, Store};
