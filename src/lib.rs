//! `olympic-insights` is the aggregation layer behind an Olympic Games history dashboard.
//!
//! The crate loads the public athlete-event records and NOC-region lookup into one
//! immutable [`dataset::Games`] value, then answers dashboard questions with pure query
//! functions in [`query`]: medal tallies, participation trends, athlete rankings and
//! demographic cross-tabs.
//!
//! ## Counting medals correctly
//!
//! The source data has one row per athlete per event. A relay or team-sport medal therefore
//! appears once for every team member. Medal tallies deduplicate on the *medal-award unit*
//! `(team, NOC, games, year, city, event, medal)` via [`processing::dedup_by`] and
//! [`processing::keys::MEDAL_AWARD_UNIT`], so each team medal counts once.
//!
//! ## Quick example
//!
//! ```no_run
//! use olympic_insights::ingestion::{load_games, LoadOptions};
//! use olympic_insights::query::{fetch_medal_tally, Filter};
//!
//! # fn main() -> Result<(), olympic_insights::IngestionError> {
//! let games = load_games("athlete_events.csv", "noc_regions.csv", &LoadOptions::default())?;
//!
//! // All countries, all years: ranked by golds.
//! let tally = fetch_medal_tally(&games, &Filter::Overall, &Filter::Overall);
//! println!("{} nations", tally.row_count());
//!
//! // One country: a timeline by year.
//! let usa = fetch_medal_tally(&games, &Filter::Overall, &Filter::only("USA"));
//! for row in &usa.rows {
//!     println!("{row:?}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV loading, region join and observers for load outcomes
//! - [`dataset`]: the typed, read-only event dataset
//! - [`processing`]: deduplication, pivoting and row filter/map primitives
//! - [`query`]: the dashboard queries and the `Overall` filter sentinel
//! - [`cache`]: memoised query results
//! - [`types`]: the table model every query returns
//! - [`error`]: error types used while loading

pub mod cache;
pub mod dataset;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod query;
pub mod types;

pub use error::{IngestionError, IngestionResult};
