//! Bat Tracking Leaderboard Fetcher
//!
//! Retrieves Baseball Savant bat tracking (swing path / attack angle)
//! leaderboards over arbitrary date ranges and composes them into monthly
//! and first-half / second-half views. The Savant UI only exposes whole
//! season aggregates; this crate builds the equivalent CSV-export queries
//! for any date window. Bat tracking data exists from the 2024 season
//! onward (Hawk-Eye).

pub mod aggregator;
pub mod config;
pub mod decode;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod query;

pub use config::SavantConfig;
pub use error::{FetchError, Result};
pub use fetcher::BatTrackingFetcher;
pub use models::{
    Cell, LeaderboardResult, LeaderboardRow, MonthlyResult, MonthlyRow, SplitResult,
};
pub use query::{Advisory, LeaderboardQuery, MinSwings, PlayerType};
