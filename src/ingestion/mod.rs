//! Loading the source CSV files into the immutable dataset.
//!
//! Most callers should use [`load_games`] (from [`loader`]) which:
//!
//! - reads the athlete-events and NOC-regions files into [`crate::types::DataSet`]s
//! - joins regions onto events and builds [`crate::dataset::Games`] (see [`prepare`])
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! The lower-level CSV reader is available under [`csv`].

pub mod csv;
pub mod loader;
pub mod observability;
pub mod prepare;

pub use loader::{load_games, LoadOptions};
pub use observability::{
    CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    SourceKind, TracingObserver,
};
pub use prepare::{athlete_events_schema, noc_regions_schema, prepare, PrepareOptions, RegionLookup};
