//! Application state management for the trip viewer
//!
//! This module contains the state root: the navigator, the info panel, input
//! focus and overlays. It runs the startup sequence and turns key events into
//! navigation and converter actions.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::info;

use crate::cli::StartupConfig;
use crate::currency::{rate_search_url, CurrencyConverter};
use crate::data::all_days;
use crate::info::InfoPanel;
use crate::navigator::{DayControl, NavBinding, Navigator, View, NAV_CONTROLS};
use crate::store::RateStore;

/// Which converter field receives typed characters, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    None,
    Rate,
    Amount,
}

/// Main application struct managing state
pub struct App {
    /// Active view and day
    pub navigator: Navigator,
    /// Accommodation cards and currency converter
    pub info: InfoPanel,
    /// Field currently being edited
    pub focus: InputFocus,
    /// Message that must be acknowledged before anything else happens
    pub alert: Option<String>,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Index of the selected accommodation card in the info view
    pub selected_card: usize,
    /// Links waiting to be opened by the event loop
    pub pending_links: Vec<String>,
    /// Navigation keys, bound once at startup
    nav_bindings: Vec<NavBinding>,
}

impl App {
    /// Runs the startup sequence
    ///
    /// Loads the persisted rate, shows the initial day, renders the info
    /// panel once, binds the navigation controls and finally selects the
    /// initial view so its highlight state is set up.
    pub fn bootstrap(config: &StartupConfig, store: Option<RateStore>) -> Self {
        let converter = CurrencyConverter::load_rate(store);

        let mut navigator = Navigator::new(
            &NAV_CONTROLS,
            all_days().iter().map(DayControl::from).collect(),
        );
        navigator.show_day(&config.initial_day);

        let mut info = InfoPanel::new(converter);
        info.render_accommodations();
        info.render_currency();

        let nav_bindings = navigator.bind_controls();

        navigator.switch_view(&config.initial_view, &mut info);

        Self {
            navigator,
            info,
            focus: InputFocus::None,
            alert: None,
            show_help: false,
            should_quit: false,
            selected_card: 0,
            pending_links: Vec::new(),
            nav_bindings,
        }
    }

    /// Creates a new App with the given startup configuration.
    ///
    /// Runs [`App::bootstrap`] and then applies a `--rate` override.
    pub fn with_startup_config(config: &StartupConfig, store: Option<RateStore>) -> Self {
        let mut app = Self::bootstrap(config, store);

        if let Some(rate) = config.rate_override {
            if let Err(e) = app.info.converter.set_rate(&rate.to_string()) {
                app.alert = Some(format!("Invalid exchange rate: {}", e));
            }
        }

        app
    }

    /// Returns the links queued since the last call
    pub fn take_pending_links(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending_links)
    }

    /// Switches to the view identified by `target`
    pub fn switch_view(&mut self, target: &str) {
        self.navigator.switch_view(target, &mut self.info);
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - any key while an alert is shown: acknowledge it
    /// - `i` / `n`: itinerary / info view
    /// - `?`: toggle help, `q`: quit
    /// - itinerary: `Left`/`h`, `Right`/`l` change day, `1`-`9` jump to day
    /// - info: `Up`/`k`, `Down`/`j` select card, `m` open hotel map,
    ///   `1`-`9` open nearby place, `g` rate search, `r` edit rate, `a` edit amount
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if self.alert.is_some() {
            self.alert = None;
            return;
        }

        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {} // Ignore other keys when help is shown
            }
            return;
        }

        match self.focus {
            InputFocus::Rate => self.handle_rate_input(key_event),
            InputFocus::Amount => self.handle_amount_input(key_event),
            InputFocus::None => self.handle_navigation_key(key_event),
        }
    }

    fn handle_navigation_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return;
            }
            KeyCode::Char(c) => {
                if let Some(binding) = self.nav_bindings.iter().find(|b| b.key == c) {
                    let target = binding.target;
                    self.switch_view(target);
                    return;
                }
            }
            _ => {}
        }

        match self.navigator.active_view() {
            View::Itinerary => match key_event.code {
                KeyCode::Left | KeyCode::Char('h') => self.navigator.previous_day(),
                KeyCode::Right | KeyCode::Char('l') => self.navigator.next_day(),
                KeyCode::Char(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    self.navigator.show_day_at(index);
                }
                _ => {}
            },
            View::Info => match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
                KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
                KeyCode::Char('m') => {
                    if let Some(card) = self.info.cards.get(self.selected_card) {
                        self.pending_links.push(card.map_url.clone());
                    }
                }
                KeyCode::Char(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    if let Some(place) = self
                        .info
                        .cards
                        .get(self.selected_card)
                        .and_then(|card| card.nearby.get(index))
                    {
                        self.pending_links.push(place.link.clone());
                    }
                }
                KeyCode::Char('g') => self.pending_links.push(rate_search_url()),
                KeyCode::Char('r') => self.focus = InputFocus::Rate,
                KeyCode::Char('a') => self.focus = InputFocus::Amount,
                _ => {}
            },
        }
    }

    fn handle_rate_input(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char(c) if is_number_char(c) => {
                self.info.converter.rate_input_mut().push(c);
            }
            KeyCode::Backspace => {
                self.info.converter.rate_input_mut().pop();
            }
            KeyCode::Enter | KeyCode::Tab => self.commit_rate(),
            KeyCode::Esc => {
                self.info.converter.revert_rate_input();
                self.focus = InputFocus::None;
            }
            _ => {}
        }
    }

    fn handle_amount_input(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char(c) if is_number_char(c) => self.info.converter.push_amount_char(c),
            KeyCode::Backspace => self.info.converter.pop_amount_char(),
            KeyCode::Enter | KeyCode::Tab | KeyCode::Esc => self.focus = InputFocus::None,
            _ => {}
        }
    }

    /// Leaves the rate editor and applies what was typed
    fn commit_rate(&mut self) {
        self.focus = InputFocus::None;
        let candidate = self.info.converter.rate_input().to_string();
        match self.info.converter.set_rate(&candidate) {
            Ok(rate) => info!(rate, "rate changed from the editor"),
            Err(e) => {
                self.alert = Some(format!("Invalid exchange rate: {}", e));
            }
        }
    }

    /// Moves the card selection up, wrapping to the bottom if at top
    fn move_selection_up(&mut self) {
        let count = self.info.cards.len();
        if count == 0 {
            return;
        }
        if self.selected_card == 0 {
            self.selected_card = count - 1;
        } else {
            self.selected_card -= 1;
        }
    }

    /// Moves the card selection down, wrapping to the top if at bottom
    fn move_selection_down(&mut self) {
        let count = self.info.cards.len();
        if count == 0 {
            return;
        }
        self.selected_card = (self.selected_card + 1) % count;
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}
