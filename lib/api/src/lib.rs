//! HTTP/JSON front end for a [`rankx_core::RankingEngine`].
//!
//! Translates requests into engine operations and engine errors into status codes:
//! invalid input and invalid votes become 400, unknown items 404, and a registry too
//! small for a matchup 412.

pub mod rest;

pub use rest::RestApi;
