//! One-call dataset loading.
//!
//! Most callers should use [`load_games`], which reads both source CSV files, joins regions
//! onto events and returns the immutable [`crate::dataset::Games`] value that every query
//! takes.
//!
//! If an [`super::observability::IngestionObserver`] is configured, the outcome of each
//! source is reported to it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::dataset::{Games, Season};
use crate::error::IngestionResult;

use super::csv::ingest_csv_from_path;
use super::observability::{
    IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats, SourceKind,
};
use super::prepare::{
    athlete_events_schema, noc_regions_schema, prepare, PrepareOptions, RegionLookup,
};

/// Options controlling [`load_games`].
///
/// Use [`Default`] for the public Olympic history dataset.
#[derive(Clone)]
pub struct LoadOptions {
    /// Cell literals read as missing values, in addition to empty cells.
    pub null_values: Vec<String>,
    /// Keep only this season; `None` keeps both.
    pub season: Option<Season>,
    /// Drop rows identical in every column.
    pub drop_duplicate_rows: bool,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("null_values", &self.null_values)
            .field("season", &self.season)
            .field("drop_duplicate_rows", &self.drop_duplicate_rows)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        let prepare = PrepareOptions::default();
        Self {
            null_values: vec!["NA".to_string()],
            season: prepare.season,
            drop_duplicate_rows: prepare.drop_duplicate_rows,
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

impl LoadOptions {
    fn prepare_options(&self) -> PrepareOptions {
        PrepareOptions {
            season: self.season,
            drop_duplicate_rows: self.drop_duplicate_rows,
        }
    }
}

/// Load the region lookup, then the athlete events, and build the dataset.
///
/// When an observer is configured, each source reports:
///
/// - `on_success` with the number of rows kept
/// - `on_failure` with a computed severity
/// - `on_alert` when that severity is >= `options.alert_at_or_above`
///
/// ```no_run
/// use std::sync::Arc;
///
/// use olympic_insights::ingestion::{load_games, LoadOptions, TracingObserver};
///
/// # fn main() -> Result<(), olympic_insights::IngestionError> {
/// let opts = LoadOptions {
///     observer: Some(Arc::new(TracingObserver)),
///     ..Default::default()
/// };
/// let games = load_games("athlete_events.csv", "noc_regions.csv", &opts)?;
/// println!("records={}", games.len());
/// # Ok(())
/// # }
/// ```
pub fn load_games(
    events_path: impl AsRef<Path>,
    regions_path: impl AsRef<Path>,
    options: &LoadOptions,
) -> IngestionResult<Games> {
    let regions_path = regions_path.as_ref();
    let regions = observe(
        options,
        regions_path,
        SourceKind::NocRegions,
        ingest_csv_from_path(regions_path, &noc_regions_schema(), &options.null_values)
            .and_then(|ds| RegionLookup::from_dataset(&ds)),
        RegionLookup::len,
    )?;

    let events_path = events_path.as_ref();
    observe(
        options,
        events_path,
        SourceKind::AthleteEvents,
        ingest_csv_from_path(events_path, &athlete_events_schema(), &options.null_values)
            .and_then(|ds| prepare(&ds, &regions, &options.prepare_options())),
        Games::len,
    )
}

fn observe<T>(
    options: &LoadOptions,
    path: &Path,
    source: SourceKind,
    result: IngestionResult<T>,
    rows: impl Fn(&T) -> usize,
) -> IngestionResult<T> {
    if let Some(obs) = options.observer.as_ref() {
        let ctx = IngestionContext {
            path: path.to_path_buf(),
            source,
        };
        match &result {
            Ok(v) => obs.on_success(&ctx, IngestionStats { rows: rows(v) }),
            Err(e) => {
                let sev = IngestionSeverity::for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }
    result
}
