//! Static trip data
//!
//! This module contains the data types for the trip: accommodations with
//! their nearby places, and the day-by-day itinerary. Everything here is
//! declared once at startup and never mutated.

pub mod accommodations;
pub mod itinerary;

pub use accommodations::{all_accommodations, ACCOMMODATIONS};
pub use itinerary::{all_days, get_day_by_id, DAYS, TRIP_TITLE};

/// A place of interest near an accommodation (convenience store, mall, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearbyPlace {
    /// Display name of the place
    pub name: &'static str,
    /// Free-text distance description (e.g. walking time)
    pub distance: &'static str,
    /// Outbound map link
    pub map_link: &'static str,
}

/// A lodging entry for one or more days of the trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accommodation {
    /// Hotel name
    pub name: &'static str,
    /// Which itinerary days this accommodation applies to (e.g. "Day 1, 2")
    pub day: &'static str,
    /// Postal address
    pub address: &'static str,
    /// Phone number including country code
    pub phone: &'static str,
    /// Check-in time
    pub check_in: &'static str,
    /// Check-out time
    pub check_out: &'static str,
    /// Free-text notes, may contain `**emphasis**` markup
    pub notes: &'static str,
    /// Nearby places, in display order
    pub nearby: &'static [NearbyPlace],
    /// Outbound map link for the hotel itself
    pub map_url: &'static str,
}

/// A single scheduled stop within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stop {
    /// Start time, free text (e.g. "09:30")
    pub time: &'static str,
    /// What happens at this stop
    pub title: &'static str,
    /// Extra detail, may be empty
    pub detail: &'static str,
}

/// One day of the itinerary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItineraryDay {
    /// Unique identifier used by the day selector (e.g. "day1")
    pub id: &'static str,
    /// Short label shown on the day selector (e.g. "Day 1")
    pub label: &'static str,
    /// Headline for the day
    pub title: &'static str,
    /// Scheduled stops, in display order
    pub stops: &'static [Stop],
}
