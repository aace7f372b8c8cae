//! The `"Overall"` sentinel as a type.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Reserved filter literal meaning "no filter".
pub const OVERALL: &str = "Overall";

/// Error returned when a filter argument cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("invalid year filter '{0}': expected 'Overall' or an integer year")]
    InvalidYear(String),
}

/// A query filter: either no restriction, or restriction to one value.
///
/// Because the sentinel is a variant rather than a string, a region can never be mistaken
/// for "no filter" and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Filter<T> {
    #[default]
    Overall,
    Only(T),
}

impl<T> Filter<T> {
    pub fn as_only(&self) -> Option<&T> {
        match self {
            Filter::Overall => None,
            Filter::Only(v) => Some(v),
        }
    }
}

impl Filter<i64> {
    /// `true` if `year` passes this filter.
    pub fn admits(&self, year: i64) -> bool {
        match self {
            Filter::Overall => true,
            Filter::Only(y) => *y == year,
        }
    }
}

impl Filter<String> {
    /// Restrict to one text value.
    pub fn only(value: impl Into<String>) -> Self {
        Filter::Only(value.into())
    }

    /// `true` if `value` passes this filter. An absent value only passes `Overall`.
    pub fn admits(&self, value: Option<&str>) -> bool {
        match self {
            Filter::Overall => true,
            Filter::Only(v) => value == Some(v.as_str()),
        }
    }
}

impl FromStr for Filter<i64> {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == OVERALL {
            return Ok(Filter::Overall);
        }
        trimmed
            .parse::<i64>()
            .map(Filter::Only)
            .map_err(|_| FilterError::InvalidYear(s.to_owned()))
    }
}

impl FromStr for Filter<String> {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Filter::from(s))
    }
}

impl From<&str> for Filter<String> {
    fn from(s: &str) -> Self {
        if s == OVERALL {
            Filter::Overall
        } else {
            Filter::Only(s.to_owned())
        }
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Overall => f.write_str(OVERALL),
            Filter::Only(v) => v.fmt(f),
        }
    }
}

/// `Overall` serializes as the sentinel string, `Only(v)` as `v` itself.
impl<T: Serialize> Serialize for Filter<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Filter::Overall => serializer.serialize_str(OVERALL),
            Filter::Only(v) => v.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_year_filters() {
        assert_eq!("Overall".parse::<Filter<i64>>(), Ok(Filter::Overall));
        assert_eq!("2016".parse::<Filter<i64>>(), Ok(Filter::Only(2016)));
        assert_eq!(
            "overall".parse::<Filter<i64>>(),
            Err(FilterError::InvalidYear("overall".to_string()))
        );
    }

    #[test]
    fn year_filter_trims_sentinel_and_number_alike() {
        assert_eq!(" Overall ".parse::<Filter<i64>>(), Ok(Filter::Overall));
        assert_eq!(" 2016".parse::<Filter<i64>>(), Ok(Filter::Only(2016)));
        assert_eq!(
            " 20x6".parse::<Filter<i64>>(),
            Err(FilterError::InvalidYear(" 20x6".to_string()))
        );
    }

    #[test]
    fn text_filter_round_trips_through_display() {
        let f: Filter<String> = "Kenya".parse().unwrap();
        assert_eq!(f, Filter::only("Kenya"));
        assert_eq!(f.to_string(), "Kenya");
        assert_eq!(Filter::<String>::from(OVERALL).to_string(), OVERALL);
    }

    #[test]
    fn absent_values_only_pass_overall() {
        assert!(Filter::<String>::Overall.admits(None));
        assert!(!Filter::only("Kenya").admits(None));
        assert!(Filter::only("Kenya").admits(Some("Kenya")));
        assert!(!Filter::Only(2000).admits(2004));
    }

    #[test]
    fn serializes_sentinel_as_string() {
        let choices = vec![Filter::Overall, Filter::Only(1896_i64)];
        assert_eq!(
            serde_json::to_value(&choices).unwrap(),
            serde_json::json!(["Overall", 1896])
        );
    }
}
