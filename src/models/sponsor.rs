//! Sponsor records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type SponsorId = i32;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Sponsor {
    pub id: SponsorId,
    pub name: String,
    pub description: Option<String>,
    /// Person to talk to at the sponsor.
    pub contact: Option<String>,
    pub logo: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NewSponsor {
    pub name: String,
    pub description: Option<String>,
    pub contact: Option<String>,
    pub logo: Option<String>,
}
