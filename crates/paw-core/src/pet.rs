//! Pet records and the personality attribute vector.

use std::fmt;

use serde::{Deserialize, Serialize};

fn default_trait() -> u8 {
    3
}

/// The eight personality traits every pet carries, each nominally 1-5.
///
/// A trait missing from the input JSON is substituted with the neutral
/// default of 3 rather than rejected; the attribute vector is treated as
/// read-only once a season starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    /// How much the pet seeks out company.
    #[serde(default = "default_trait")]
    pub sociable: u8,
    /// Barking, meowing, general volume.
    #[serde(default = "default_trait")]
    pub loud: u8,
    /// Refusal to back down.
    #[serde(default = "default_trait")]
    pub stubborn: u8,
    /// Appetite for exploring and poking things.
    #[serde(default = "default_trait")]
    pub curious: u8,
    /// Craving for attention and affection.
    #[serde(default = "default_trait")]
    pub needy: u8,
    /// Theatrical flair; sulking included.
    #[serde(default = "default_trait")]
    pub drama: u8,
    /// Raw energy on the dance floor and in trials.
    #[serde(default = "default_trait")]
    pub energetic: u8,
    /// Possessiveness over spaces and toys.
    #[serde(default = "default_trait")]
    pub territorial: u8,
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self {
            sociable: 3,
            loud: 3,
            stubborn: 3,
            curious: 3,
            needy: 3,
            drama: 3,
            energetic: 3,
            territorial: 3,
        }
    }
}

/// A pet's age as given by the roster: a number of years or free text
/// ("6 months", "unknown").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Age {
    /// Age in whole years.
    Years(u32),
    /// Free-text age description.
    Text(String),
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Years(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One roster entry. The engine keys contestants by `name`; uniqueness is
/// assumed, not enforced. `photo`, `species`, and `age` are carried
/// opaquely for consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetRecord {
    /// Unique display name; used as the key everywhere.
    pub name: String,
    /// Opaque photo reference for presentation layers.
    #[serde(default)]
    pub photo: Option<String>,
    /// Species label ("Dog", "Cat", anything).
    #[serde(default)]
    pub species: Option<String>,
    /// Age, numeric or free text.
    #[serde(default)]
    pub age: Option<Age>,
    /// The personality attribute vector.
    #[serde(default)]
    pub attributes: AttributeSet,
}

impl PetRecord {
    /// Create a record with the given name and attributes, leaving the
    /// presentation fields empty. Handy for tests and programmatic rosters.
    pub fn new(name: impl Into<String>, attributes: AttributeSet) -> Self {
        Self {
            name: name.into(),
            photo: None,
            species: None,
            age: None,
            attributes,
        }
    }
}
