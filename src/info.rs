//! Content of the info view
//!
//! The info panel owns the rendered accommodation cards and the currency
//! converter. It is rebuilt every time the info view is activated.

use chrono::{DateTime, Local};

use crate::accommodation::{self, AccommodationCard};
use crate::currency::CurrencyConverter;
use crate::data::all_accommodations;
use crate::navigator::{ActivationHook, View};

/// Accommodation cards and the currency converter shown in the info view
#[derive(Debug, Clone)]
pub struct InfoPanel {
    /// Rendered cards, in dataset order
    pub cards: Vec<AccommodationCard>,
    /// Rate state and converter inputs
    pub converter: CurrencyConverter,
    /// When the panel was last rebuilt on activation
    pub last_refresh: Option<DateTime<Local>>,
}

impl InfoPanel {
    /// Creates an empty panel around `converter`; cards are built on first render
    pub fn new(converter: CurrencyConverter) -> Self {
        Self {
            cards: Vec::new(),
            converter,
            last_refresh: None,
        }
    }

    /// Clears and rebuilds the accommodation cards
    pub fn render_accommodations(&mut self) {
        self.cards.clear();
        self.cards.extend(accommodation::render(all_accommodations()));
    }

    /// Re-renders the converter display
    pub fn render_currency(&mut self) {
        self.converter.render();
    }

    /// Rebuilds everything the info view shows
    pub fn refresh(&mut self) {
        self.render_accommodations();
        self.render_currency();
        self.last_refresh = Some(Local::now());
    }
}

impl ActivationHook for InfoPanel {
    fn on_view_activated(&mut self, view: View) {
        if view == View::Info {
            self.refresh();
        }
    }
}
