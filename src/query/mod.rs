//! The aggregation layer.
//!
//! Every function here takes the immutable [`Games`](crate::dataset::Games) dataset by
//! shared reference plus simple filter arguments, and returns a freshly built table. No
//! function mutates its input, and no function fails: an over-restrictive filter yields
//! an empty table with the usual columns.
//!
//! | Page              | Queries                                                                  |
//! |-------------------|--------------------------------------------------------------------------|
//! | Medal tally       | [`fetch_medal_tally`], [`overall_medal_tally`], [`filter_choices`]       |
//! | Overall analysis  | [`top_statistics`], [`data_over_time`], [`event_density_pivot`], [`most_successful`] |
//! | Country analysis  | [`yearwise_medal_tally`], [`country_event_heatmap`], [`most_successful_athletes_country`] |
//! | Athlete analysis  | [`age_distribution`], [`weight_vs_height`], [`men_vs_women`]             |
//!
//! ```rust
//! use olympic_insights::dataset::Games;
//! use olympic_insights::query::{fetch_medal_tally, Filter};
//!
//! let games = Games::default();
//! let tally = fetch_medal_tally(&games, &Filter::Overall, &Filter::Overall);
//! assert!(tally.is_empty());
//! assert_eq!(
//!     tally.schema.field_names().collect::<Vec<_>>(),
//!     vec!["region", "Gold", "Silver", "Bronze", "Total"]
//! );
//! ```

mod athletes;
mod country;
mod demographics;
mod filter;
mod medals;
mod summary;
mod timeline;

pub use athletes::{
    most_successful, most_successful_athletes_country, TOP_ATHLETES, TOP_ATHLETES_BY_COUNTRY,
};
pub use country::{country_event_heatmap, yearwise_medal_tally};
pub use demographics::{age_distribution, men_vs_women, weight_vs_height, AgeDistribution, NO_MEDAL};
pub use filter::{Filter, FilterError, OVERALL};
pub use medals::{fetch_medal_tally, overall_medal_tally};
pub use summary::{filter_choices, sport_choices, top_statistics, FilterChoices, TopStatistics};
pub use timeline::{data_over_time, event_density_pivot, EDITION};
