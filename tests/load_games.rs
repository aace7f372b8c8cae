use std::sync::{Arc, Mutex};

use olympic_insights::dataset::Season;
use olympic_insights::ingestion::{
    load_games, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats, LoadOptions,
    SourceKind,
};
use olympic_insights::IngestionError;

const EVENTS: &str = "tests/fixtures/athlete_events.csv";
const REGIONS: &str = "tests/fixtures/noc_regions.csv";

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<(SourceKind, usize)>>,
    failures: Mutex<Vec<IngestionSeverity>>,
    alerts: Mutex<Vec<IngestionSeverity>>,
}

impl IngestionObserver for RecordingObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.successes.lock().unwrap().push((ctx.source, stats.rows));
    }

    fn on_failure(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &IngestionError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &IngestionError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

#[test]
fn loads_summer_games_without_duplicate_rows() {
    let games = load_games(EVENTS, REGIONS, &LoadOptions::default()).unwrap();

    // 21 rows: one Winter row and one exact duplicate are dropped.
    assert_eq!(games.len(), 19);
    assert!(games.iter().all(|r| r.season == Season::Summer));

    let refugee = games.iter().find(|r| r.noc == "ROT").unwrap();
    assert_eq!(refugee.region, None);
    assert_eq!(refugee.medal, None);
    assert_eq!(refugee.height_cm, None);

    let bolt = games.iter().find(|r| r.name == "Usain Bolt").unwrap();
    assert_eq!(bolt.region.as_deref(), Some("Jamaica"));
    assert_eq!(bolt.age, Some(25.0));
}

#[test]
fn all_seasons_keeps_winter_rows() {
    let opts = LoadOptions {
        season: None,
        ..Default::default()
    };
    let games = load_games(EVENTS, REGIONS, &opts).unwrap();
    assert_eq!(games.len(), 20);
    assert!(games.regions().contains("Norway"));
}

#[test]
fn observer_sees_both_sources() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };
    load_games(EVENTS, REGIONS, &opts).unwrap();

    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(
        successes,
        vec![(SourceKind::NocRegions, 6), (SourceKind::AthleteEvents, 19)]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn missing_file_is_critical_and_alerts() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: IngestionSeverity::Critical,
        ..Default::default()
    };

    let _ = load_games("tests/fixtures/does_not_exist.csv", REGIONS, &opts).unwrap_err();

    assert_eq!(*obs.failures.lock().unwrap(), vec![IngestionSeverity::Critical]);
    assert_eq!(*obs.alerts.lock().unwrap(), vec![IngestionSeverity::Critical]);
}

#[test]
fn swapped_files_fail_without_alert() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };

    // The regions file lacks every athlete column.
    let err = load_games(REGIONS, REGIONS, &opts).unwrap_err();
    assert!(err.to_string().contains("schema mismatch"));

    assert_eq!(*obs.failures.lock().unwrap(), vec![IngestionSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}
