//! # RankX
//!
//! A pairwise-comparison ranking engine.
//!
//! Voters are shown two items and pick the one they prefer. Every vote moves both
//! items' Elo ratings (K = 32, initial rating 1500), is appended to an immutable
//! ledger, and reranks the whole registry so ranks always form the dense range 1..=N.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install rankx
//! rankx --http-port 5000
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use rankx::prelude::*;
//!
//! let engine = RankingEngine::in_memory(EngineConfig::default()).unwrap();
//! engine.seed(rankx::seed::bundled_catalogue().unwrap()).unwrap();
//!
//! let matchup = engine.random_matchup().unwrap();
//! let receipt = engine
//!     .record_vote(matchup.left_item.id, matchup.right_item.id)
//!     .unwrap();
//! assert_eq!(receipt.vote.winner_new_rating, 1516);
//! ```
//!
//! ## Crate Structure
//!
//! - [`rankx-core`](https://docs.rs/rankx-core) - rating model, registry, ledger, matchups, engine
//! - [`rankx-api`](https://docs.rs/rankx-api) - REST API

pub mod seed;

// Re-export core types
pub use rankx_core::{
    EngineConfig, PairingStrategy,
    Item, ItemAttributes, ItemId, ItemUpdate,
    Matchup, Vote, VoteReceipt, Stats,
    RankingEngine, Repository, MemoryRepository,
    Error, Result,
};

/// Elo rating math
pub mod rating {
    pub use rankx_core::rating::{expected_score, new_rating, update_ratings, Outcome, RatingUpdate, INITIAL_RATING, K_FACTOR};
}

// Re-export API
pub use rankx_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        EngineConfig, PairingStrategy,
        Item, ItemAttributes, ItemId, ItemUpdate,
        Matchup, Vote, VoteReceipt, Stats,
        RankingEngine, Repository, MemoryRepository,
        Error, Result,
        RestApi,
    };
}
