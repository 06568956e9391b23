//! Closed label sets for the survey dimensions bundled with every record.
//!
//! The labels are the Catalan answer texts shown to respondents. Every enum
//! keeps its variants in display order; `ALL` exposes that order to callers
//! that build legends or facet lists.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Normalized gender label.
///
/// `Other` is the catch-all for every non-empty answer that is not one of
/// the two literal options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GenderLabel {
    #[serde(rename = "Home")]
    Man,
    #[serde(rename = "Dona")]
    Woman,
    #[serde(rename = "Altre")]
    Other,
}

impl GenderLabel {
    pub const ALL: [GenderLabel; 3] = [GenderLabel::Man, GenderLabel::Woman, GenderLabel::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            GenderLabel::Man => "Home",
            GenderLabel::Woman => "Dona",
            GenderLabel::Other => "Altre",
        }
    }
}

impl fmt::Display for GenderLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GenderLabel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Self::ALL, Self::as_str, "gender")
    }
}

/// Normalized relationship status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RelationshipLabel {
    #[serde(rename = "Solter/a")]
    Single,
    #[serde(rename = "Parella monògama")]
    Monogamous,
    #[serde(rename = "Parella oberta/liberal")]
    OpenCouple,
    #[serde(rename = "Relació poliamorosa")]
    Polyamorous,
    #[serde(rename = "Sense etiquetes")]
    NoLabels,
    #[serde(rename = "Altre")]
    Other,
}

impl RelationshipLabel {
    pub const ALL: [RelationshipLabel; 6] = [
        RelationshipLabel::Single,
        RelationshipLabel::Monogamous,
        RelationshipLabel::OpenCouple,
        RelationshipLabel::Polyamorous,
        RelationshipLabel::NoLabels,
        RelationshipLabel::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipLabel::Single => "Solter/a",
            RelationshipLabel::Monogamous => "Parella monògama",
            RelationshipLabel::OpenCouple => "Parella oberta/liberal",
            RelationshipLabel::Polyamorous => "Relació poliamorosa",
            RelationshipLabel::NoLabels => "Sense etiquetes",
            RelationshipLabel::Other => "Altre",
        }
    }
}

impl fmt::Display for RelationshipLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RelationshipLabel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Self::ALL, Self::as_str, "relationship")
    }
}

/// Fixed, ordered age bands. Upper bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "18-20")]
    UpTo20,
    #[serde(rename = "21-25")]
    From21To25,
    #[serde(rename = "26-30")]
    From26To30,
    #[serde(rename = "31-35")]
    From31To35,
    #[serde(rename = "36-40")]
    From36To40,
    #[serde(rename = "41+")]
    Over40,
}

impl AgeBand {
    pub const ALL: [AgeBand; 6] = [
        AgeBand::UpTo20,
        AgeBand::From21To25,
        AgeBand::From26To30,
        AgeBand::From31To35,
        AgeBand::From36To40,
        AgeBand::Over40,
    ];

    /// Buckets a known age. Anything at or below 20 lands in the first band,
    /// which keeps the function total for ages the validity filter would drop.
    pub fn for_age(age: i32) -> AgeBand {
        match age {
            ..=20 => AgeBand::UpTo20,
            21..=25 => AgeBand::From21To25,
            26..=30 => AgeBand::From26To30,
            31..=35 => AgeBand::From31To35,
            36..=40 => AgeBand::From36To40,
            _ => AgeBand::Over40,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBand::UpTo20 => "18-20",
            AgeBand::From21To25 => "21-25",
            AgeBand::From26To30 => "26-30",
            AgeBand::From31To35 => "31-35",
            AgeBand::From36To40 => "36-40",
            AgeBand::Over40 => "41+",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AgeBand {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Self::ALL, Self::as_str, "age band")
    }
}

fn parse_label<T: Copy>(
    s: &str,
    all: &[T],
    as_str: fn(&T) -> &'static str,
    kind: &'static str,
) -> Result<T, ModelError> {
    let wanted = s.trim().to_lowercase();
    all.iter()
        .find(|label| as_str(label).to_lowercase() == wanted)
        .copied()
        .ok_or_else(|| ModelError::UnknownLabel {
            kind,
            value: s.to_string(),
        })
}
