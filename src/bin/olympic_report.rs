//! `olympic-report` prints dashboard tables as JSON.
//!
//! # Usage
//!
//! ```text
//! olympic-report --events athlete_events.csv --regions noc_regions.csv medal-tally --year 2016
//! OLYMPICS_EVENTS=athlete_events.csv OLYMPICS_REGIONS=noc_regions.csv olympic-report stats
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use olympic_insights::cache::{QueryCache, QueryKey};
use olympic_insights::dataset::{Column, Season};
use olympic_insights::ingestion::{
    load_games, CompositeObserver, FileObserver, IngestionObserver, LoadOptions, TracingObserver,
};
use olympic_insights::query::{self, Filter};
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "olympic-report", version, about = "Olympic Games history tables as JSON")]
struct Cli {
    /// Athlete events CSV (one row per athlete per event).
    #[arg(long, env = "OLYMPICS_EVENTS", value_name = "FILE")]
    events: PathBuf,

    /// NOC code to region CSV.
    #[arg(long, env = "OLYMPICS_REGIONS", value_name = "FILE")]
    regions: PathBuf,

    /// Include Winter Games as well as Summer.
    #[arg(long)]
    all_seasons: bool,

    /// Emit compact instead of pretty JSON.
    #[arg(long)]
    compact: bool,

    /// Also append load outcomes to this file.
    #[arg(long, value_name = "FILE")]
    load_log: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Gold/Silver/Bronze/Total per country, or per year for one country.
    MedalTally {
        #[arg(long, default_value = query::OVERALL)]
        year: Filter<i64>,
        #[arg(long, default_value = query::OVERALL)]
        country: Filter<String>,
    },
    /// All-time ranking counting team medals once per sport.
    OverallTally,
    /// Editions, cities, sports, events, athletes and nations.
    Stats,
    /// Distinct values of a column per edition (e.g. region, Event, Name).
    OverTime {
        #[arg(long, default_value = "region")]
        column: Column,
    },
    /// Distinct events per sport per edition.
    EventHeatmap,
    /// Top athletes by medal count.
    TopAthletes {
        #[arg(long, default_value = query::OVERALL)]
        sport: Filter<String>,
    },
    /// Medals per year for one country.
    CountryTimeline {
        #[arg(long)]
        country: String,
    },
    /// Medals per sport per year for one country.
    CountryHeatmap {
        #[arg(long)]
        country: String,
    },
    /// Top athletes of one country.
    CountryAthletes {
        #[arg(long)]
        country: String,
    },
    /// One row per athlete with height, weight and medal.
    Physique {
        #[arg(long, default_value = query::OVERALL)]
        sport: Filter<String>,
    },
    /// Male and female athletes per year.
    Participation,
    /// Athlete ages overall and by medal.
    Ages,
    /// Year, country and sport choices for the filters.
    Choices,
}

impl Command {
    fn query_key(&self) -> Option<QueryKey> {
        let key = match self {
            Command::MedalTally { year, country } => QueryKey::MedalTally {
                year: year.clone(),
                country: country.clone(),
            },
            Command::OverallTally => QueryKey::OverallMedalTally,
            Command::OverTime { column } => QueryKey::DataOverTime(*column),
            Command::EventHeatmap => QueryKey::EventDensity,
            Command::TopAthletes { sport } => QueryKey::MostSuccessful(sport.clone()),
            Command::CountryTimeline { country } => QueryKey::YearwiseMedalTally(country.clone()),
            Command::CountryHeatmap { country } => QueryKey::CountryEventHeatmap(country.clone()),
            Command::CountryAthletes { country } => {
                QueryKey::MostSuccessfulInCountry(country.clone())
            }
            Command::Physique { sport } => QueryKey::WeightVsHeight(sport.clone()),
            Command::Participation => QueryKey::MenVsWomen,
            Command::Stats | Command::Ages | Command::Choices => return None,
        };
        Some(key)
    }
}

#[derive(Serialize)]
struct Choices {
    #[serde(flatten)]
    filters: query::FilterChoices,
    sports: Vec<Filter<String>>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    let observer: Arc<dyn IngestionObserver> = match &cli.load_log {
        Some(path) => {
            let observers: Vec<Arc<dyn IngestionObserver>> =
                vec![Arc::new(TracingObserver), Arc::new(FileObserver::new(path))];
            Arc::new(CompositeObserver::new(observers))
        }
        None => Arc::new(TracingObserver),
    };
    let opts = LoadOptions {
        season: if cli.all_seasons { None } else { Some(Season::Summer) },
        observer: Some(observer),
        ..Default::default()
    };
    let games = load_games(&cli.events, &cli.regions, &opts).with_context(|| {
        format!(
            "failed to load {} and {}",
            cli.events.display(),
            cli.regions.display()
        )
    })?;
    let cache = QueryCache::new(Arc::new(games));

    let json = match cli.command.query_key() {
        Some(key) => render(&*cache.get(&key), cli.compact)?,
        None => match &cli.command {
            Command::Stats => render(&query::top_statistics(cache.games()), cli.compact)?,
            Command::Ages => render(&query::age_distribution(cache.games()), cli.compact)?,
            _ => render(
                &Choices {
                    filters: query::filter_choices(cache.games()),
                    sports: query::sport_choices(cache.games()),
                },
                cli.compact,
            )?,
        },
    };
    println!("{json}");
    Ok(())
}

fn render<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    json.context("failed to serialize output")
}
