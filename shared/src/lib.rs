use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored record.
///
/// Serialized as a bare JSON number so collections written by earlier builds
/// (which used millisecond timestamps) still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        RecordId(value)
    }
}

/// A requested appointment slot for one service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: RecordId,
    /// Service display name, e.g. "Full Grooming"
    pub service: String,
    /// Display-formatted price, e.g. "$95" (never parsed as a number)
    pub price: String,
    /// Human-readable day, e.g. "Nov 3"
    pub date: String,
    /// Daypart label ("Morning") or clock label ("09:00") depending on deployment
    pub time: String,
}

/// A customer record: a dental patient or a groomed pet.
///
/// The variant-specific field is flattened so the stored JSON keeps the flat
/// `{ "id", "name", "concern" | "breed", "notes" }` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: RecordId,
    pub name: String,
    #[serde(flatten)]
    pub details: ProfileDetails,
    #[serde(default)]
    pub notes: String,
}

/// Variant-specific part of a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileDetails {
    /// Dental patient with a primary aesthetic concern
    Patient { concern: String },
    /// Pet with a free-text breed
    Pet { breed: String },
}

impl ProfileDetails {
    pub fn empty_patient() -> Self {
        ProfileDetails::Patient { concern: String::new() }
    }

    pub fn empty_pet() -> Self {
        ProfileDetails::Pet { breed: String::new() }
    }

    /// The secondary line shown under a profile's name
    pub fn label(&self) -> &str {
        match self {
            ProfileDetails::Patient { concern } => concern,
            ProfileDetails::Pet { breed } => breed,
        }
    }
}

impl Profile {
    /// First character of the name, used for the avatar badge
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

/// A bookable service as presented on the services tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffer {
    pub name: String,
    pub price: String,
    pub blurb: String,
}
