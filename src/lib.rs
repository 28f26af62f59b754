//! Live cricket scores from cricapi.com: fetch, classify, order, and share.
//!
//! The pure core lives in [`classify`] and [`sort`]. [`CricClient`] and
//! [`LiveFeed`] fetch and poll, [`FavoritesStore`] persists the user's
//! favorites, and [`board`] turns a snapshot into what a match list shows.

pub mod board;
pub mod classify;
mod client;
mod cricapi;
mod error;
pub mod favorites;
pub mod feed;
pub mod model;
pub mod share;
pub mod sort;

pub use board::{Board, EmptyState, MatchCard, Tab};
pub use classify::{has_started, is_completed, status_category, status_text};
pub use client::{CricClient, API_KEY_ENV};
pub use error::{CricketError, Result};
pub use favorites::FavoritesStore;
pub use feed::{LiveFeed, MatchSource, Snapshot, MIN_REFRESH_INTERVAL, REFRESH_INTERVAL};
pub use model::*;
pub use share::share_summary;
pub use sort::{filter_by_favorites, sort_matches};
