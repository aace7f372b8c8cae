//! Pure table primitives used by the aggregation layer.
//!
//! Nothing here mutates its input: every function returns a fresh value.
//!
//! - [`dedup_by`]: the single composite-key deduplication primitive, plus the named key
//!   sets the queries deduplicate on (see [`keys`])
//! - [`PivotTable`]: a dense `label × year → count` cross-tab with zero fill
//! - [`filter()`] / [`map()`]: row filtering and mapping over a [`crate::types::DataSet`]
//!
//! ## Example: collapse a relay medal to one unit
//!
//! ```rust
//! use olympic_insights::dataset::{EventRecord, Medal, Season, Sex};
//! use olympic_insights::processing::{dedup_by, keys};
//!
//! let swimmer = |name: &str| EventRecord {
//!     name: name.to_string(),
//!     sex: Sex::Male,
//!     age: None,
//!     height_cm: None,
//!     weight_kg: None,
//!     team: "United States".to_string(),
//!     noc: "USA".to_string(),
//!     region: Some("USA".to_string()),
//!     games: "2008 Summer".to_string(),
//!     year: 2008,
//!     season: Season::Summer,
//!     city: "Beijing".to_string(),
//!     sport: "Swimming".to_string(),
//!     event: "Swimming Men's 4 x 100 metres Freestyle Relay".to_string(),
//!     medal: Some(Medal::Gold),
//! };
//! let relay = vec![swimmer("A"), swimmer("B"), swimmer("C"), swimmer("D")];
//!
//! assert_eq!(dedup_by(&relay, keys::MEDAL_AWARD_UNIT).len(), 1);
//! assert_eq!(dedup_by(&relay, keys::ATHLETE_IDENTITY).len(), 4);
//! ```

pub mod dedup;
pub mod filter;
pub mod map;
pub mod pivot;

pub use dedup::{dedup_by, keys};
pub use filter::filter;
pub use map::map;
pub use pivot::PivotTable;
