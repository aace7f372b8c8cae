//! The typed event record and its enum-valued attributes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use super::column::{Column, KeyPart};
use crate::types::Value;

/// A literal that does not name any variant of one of the record enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownLiteral {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! literal_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal, { $($variant:ident => $lit:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// The literal used for this value in the source data.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $lit),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownLiteral;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($lit => Ok(Self::$variant),)+
                    other => Err(UnknownLiteral {
                        kind: $kind,
                        value: other.to_owned(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

literal_enum!(
    /// Athlete sex as recorded in the source data.
    Sex, "sex", { Male => "M", Female => "F" }
);

literal_enum!(
    /// Summer or Winter Games.
    Season, "season", { Summer => "Summer", Winter => "Winter" }
);

literal_enum!(
    /// Medal awarded for an event. Declared in podium order so `Gold < Silver < Bronze`.
    Medal, "medal", { Gold => "Gold", Silver => "Silver", Bronze => "Bronze" }
);

/// One athlete's participation in one event in one edition of the Games.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    pub name: String,
    pub sex: Sex,
    pub age: Option<f64>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub team: String,
    pub noc: String,
    /// Country resolved from `noc`; absent for NOCs without a region mapping.
    pub region: Option<String>,
    pub games: String,
    pub year: i64,
    pub season: Season,
    pub city: String,
    pub sport: String,
    pub event: String,
    pub medal: Option<Medal>,
}

impl EventRecord {
    /// Borrow one attribute as a hashable key component.
    pub fn key(&self, column: Column) -> KeyPart<'_> {
        match column {
            Column::Name => KeyPart::Text(&self.name),
            Column::Sex => KeyPart::Text(self.sex.as_str()),
            Column::Age => KeyPart::from_float(self.age),
            Column::Height => KeyPart::from_float(self.height_cm),
            Column::Weight => KeyPart::from_float(self.weight_kg),
            Column::Team => KeyPart::Text(&self.team),
            Column::Noc => KeyPart::Text(&self.noc),
            Column::Region => self.region.as_deref().map_or(KeyPart::Missing, KeyPart::Text),
            Column::Games => KeyPart::Text(&self.games),
            Column::Year => KeyPart::Int(self.year),
            Column::Season => KeyPart::Text(self.season.as_str()),
            Column::City => KeyPart::Text(&self.city),
            Column::Sport => KeyPart::Text(&self.sport),
            Column::Event => KeyPart::Text(&self.event),
            Column::Medal => self.medal.map_or(KeyPart::Missing, |m| KeyPart::Text(m.as_str())),
        }
    }

    /// Copy one attribute out as a table [`Value`].
    pub fn value(&self, column: Column) -> Value {
        match column {
            Column::Name => Value::from(self.name.as_str()),
            Column::Sex => Value::from(self.sex.as_str()),
            Column::Age => Value::from(self.age),
            Column::Height => Value::from(self.height_cm),
            Column::Weight => Value::from(self.weight_kg),
            Column::Team => Value::from(self.team.as_str()),
            Column::Noc => Value::from(self.noc.as_str()),
            Column::Region => Value::from(self.region.as_deref()),
            Column::Games => Value::from(self.games.as_str()),
            Column::Year => Value::Int64(self.year),
            Column::Season => Value::from(self.season.as_str()),
            Column::City => Value::from(self.city.as_str()),
            Column::Sport => Value::from(self.sport.as_str()),
            Column::Event => Value::from(self.event.as_str()),
            Column::Medal => Value::from(self.medal.map(Medal::as_str)),
        }
    }

    pub fn has_medal(&self) -> bool {
        self.medal.is_some()
    }

    /// `true` if `region` is present and equal to `country`.
    pub fn is_from(&self, country: &str) -> bool {
        self.region.as_deref() == Some(country)
    }
}
