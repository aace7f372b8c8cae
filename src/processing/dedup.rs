//! Composite-key deduplication.
//!
//! Every query that collapses rows goes through [`dedup_by`] with one of the key sets in
//! [`keys`], so the rule that decides what counts as "one medal" lives in exactly one place.

use std::collections::HashSet;

use crate::dataset::{Column, EventRecord, KeyPart};

/// Named key sets.
pub mod keys {
    use crate::dataset::Column::{self, *};

    /// One team or individual medal. Athletes sharing a relay or team-sport medal produce
    /// identical values here, so deduplicating on it counts the medal once.
    pub const MEDAL_AWARD_UNIT: &[Column] = &[Team, Noc, Games, Year, City, Event, Medal];

    /// [`MEDAL_AWARD_UNIT`] refined by sport, used by the all-time national ranking.
    pub const SPORT_MEDAL_UNIT: &[Column] = &[Team, Noc, Games, Year, City, Sport, Event, Medal];

    /// Medal unit used by the single-country timeline and heatmap.
    pub const COUNTRY_MEDAL_UNIT: &[Column] = &[Team, Noc, Year, City, Sport, Event, Medal];

    /// Approximate athlete identity. Two people sharing a name and region collide.
    pub const ATHLETE_IDENTITY: &[Column] = &[Name, Region];

    /// One event contested in one edition.
    pub const EVENT_EDITION: &[Column] = &[Year, Sport, Event];
}

/// Composite key of `record` over `key`.
pub fn row_key<'a>(record: &'a EventRecord, key: &[Column]) -> Vec<KeyPart<'a>> {
    key.iter().map(|&c| record.key(c)).collect()
}

/// Keep the first record for each distinct value of `key`, preserving input order.
///
/// Absent optional values are treated as equal to one another. An empty `key` keeps only
/// the first record.
pub fn dedup_by<'a, I>(records: I, key: &[Column]) -> Vec<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let mut seen: HashSet<Vec<KeyPart<'a>>> = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(row_key(*r, key)))
        .collect()
}
