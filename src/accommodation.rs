//! Accommodation cards
//!
//! Projects the static accommodation records into display cards. The
//! projection is pure: records and nearby places keep their declared order
//! and nothing is filtered out.

use crate::data::Accommodation;

/// One nearby place as it appears on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearbyEntry {
    pub name: String,
    pub distance: String,
    pub link: String,
}

/// Display-ready form of one accommodation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccommodationCard {
    pub name: String,
    /// e.g. "Day 1, 2"
    pub applies_to: String,
    pub address: String,
    pub phone: String,
    pub map_url: String,
    pub check_in: String,
    pub check_out: String,
    /// Notes verbatim, emphasis markup included
    pub notes: String,
    pub nearby: Vec<NearbyEntry>,
}

impl From<&Accommodation> for AccommodationCard {
    fn from(hotel: &Accommodation) -> Self {
        Self {
            name: hotel.name.to_string(),
            applies_to: hotel.day.to_string(),
            address: hotel.address.to_string(),
            phone: hotel.phone.to_string(),
            map_url: hotel.map_url.to_string(),
            check_in: hotel.check_in.to_string(),
            check_out: hotel.check_out.to_string(),
            notes: hotel.notes.to_string(),
            nearby: hotel
                .nearby
                .iter()
                .map(|place| NearbyEntry {
                    name: place.name.to_string(),
                    distance: place.distance.to_string(),
                    link: place.map_link.to_string(),
                })
                .collect(),
        }
    }
}

/// Builds one card per record, in record order
pub fn render(records: &[Accommodation]) -> Vec<AccommodationCard> {
    records.iter().map(AccommodationCard::from).collect()
}
