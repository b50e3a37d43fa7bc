//! View and day navigation
//!
//! Two independent single-select state machines: which top-level view is
//! visible, and which itinerary day is visible. Navigation controls declare
//! the identifier they target; a control is highlighted exactly when its
//! declared target equals the identifier most recently requested, so an
//! unknown identifier leaves the visible view or day untouched and
//! highlights nothing.

use tracing::debug;

use crate::data::ItineraryDay;

/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Day-by-day schedule
    Itinerary,
    /// Currency converter and accommodations
    Info,
}

impl View {
    /// All views in declaration order; the first is the launch view
    pub const ALL: [View; 2] = [View::Itinerary, View::Info];

    /// Identifier navigation controls use to target this view
    pub fn id(&self) -> &'static str {
        match self {
            View::Itinerary => "itinerary-view",
            View::Info => "info-view",
        }
    }

    /// Resolves a view identifier
    pub fn from_id(id: &str) -> Option<View> {
        View::ALL.into_iter().find(|view| view.id() == id)
    }

    /// Human-readable title
    pub fn title(&self) -> &'static str {
        match self {
            View::Itinerary => "Itinerary",
            View::Info => "Info",
        }
    }
}

/// A bottom-bar navigation control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControl {
    /// Key that activates the control
    pub key: char,
    /// Label shown in the navigation bar
    pub label: &'static str,
    /// Identifier of the view this control switches to
    pub target: &'static str,
}

/// Navigation bar controls, in display order
pub static NAV_CONTROLS: [NavControl; 2] = [
    NavControl {
        key: 'i',
        label: "Itinerary",
        target: "itinerary-view",
    },
    NavControl {
        key: 'n',
        label: "Info",
        target: "info-view",
    },
];

/// A day-selector control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayControl {
    /// Label shown on the selector
    pub label: &'static str,
    /// Identifier of the day this control shows
    pub target: &'static str,
}

impl From<&ItineraryDay> for DayControl {
    fn from(day: &ItineraryDay) -> Self {
        Self {
            label: day.label,
            target: day.id,
        }
    }
}

/// Key-to-target binding produced once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavBinding {
    /// Key that triggers the switch
    pub key: char,
    /// View identifier the key switches to
    pub target: &'static str,
}

/// Called by the navigator whenever a view becomes visible
///
/// This is how the info view's content gets refreshed on every activation
/// instead of once at startup.
pub trait ActivationHook {
    fn on_view_activated(&mut self, view: View);
}

/// Active view and day plus the highlight state of their controls
#[derive(Debug, Clone)]
pub struct Navigator {
    nav_controls: Vec<NavControl>,
    day_controls: Vec<DayControl>,
    active_view: View,
    /// Index into `day_controls`; `None` only when no days are declared
    active_day: Option<usize>,
    requested_view: String,
    requested_day: String,
}

impl Navigator {
    /// Creates a navigator showing the first view and the first day
    pub fn new(nav_controls: &[NavControl], day_controls: Vec<DayControl>) -> Self {
        let active_view = View::ALL[0];
        let active_day = (!day_controls.is_empty()).then_some(0);
        let requested_day = day_controls
            .first()
            .map(|d| d.target.to_string())
            .unwrap_or_default();

        Self {
            nav_controls: nav_controls.to_vec(),
            day_controls,
            active_view,
            active_day,
            requested_view: active_view.id().to_string(),
            requested_day,
        }
    }

    /// The visible view
    pub fn active_view(&self) -> View {
        self.active_view
    }

    /// Identifier of the visible day
    pub fn active_day_id(&self) -> Option<&'static str> {
        self.active_day.map(|i| self.day_controls[i].target)
    }

    /// Navigation bar controls, in display order
    pub fn nav_controls(&self) -> &[NavControl] {
        &self.nav_controls
    }

    /// Day selector controls, in itinerary order
    pub fn day_controls(&self) -> &[DayControl] {
        &self.day_controls
    }

    /// Whether the navigation control at `index` is highlighted
    pub fn is_nav_highlighted(&self, index: usize) -> bool {
        self.nav_controls
            .get(index)
            .is_some_and(|c| c.target == self.requested_view)
    }

    /// Whether the day control at `index` is highlighted
    pub fn is_day_highlighted(&self, index: usize) -> bool {
        self.day_controls
            .get(index)
            .is_some_and(|c| c.target == self.requested_day)
    }

    /// Reads each navigation control's declared target into a key table
    pub fn bind_controls(&self) -> Vec<NavBinding> {
        self.nav_controls
            .iter()
            .map(|c| NavBinding {
                key: c.key,
                target: c.target,
            })
            .collect()
    }

    /// Shows the view identified by `target`
    ///
    /// Unknown identifiers leave the visible view as it was. Returns whether
    /// the identifier resolved. `hook` is notified of every activation.
    pub fn switch_view(&mut self, target: &str, hook: &mut impl ActivationHook) -> bool {
        self.requested_view = target.to_string();

        let Some(view) = View::from_id(target) else {
            debug!(view_id = target, "ignoring unknown view");
            return false;
        };

        debug!(view = view.id(), "switching view");
        self.active_view = view;
        hook.on_view_activated(view);
        true
    }

    /// Shows the day identified by `day_id`
    ///
    /// Unknown identifiers leave the visible day as it was. Returns whether
    /// the identifier resolved.
    pub fn show_day(&mut self, day_id: &str) -> bool {
        self.requested_day = day_id.to_string();

        let Some(index) = self.day_controls.iter().position(|c| c.target == day_id) else {
            debug!(day_id, "ignoring unknown day");
            return false;
        };

        debug!(day_id, "showing day");
        self.active_day = Some(index);
        true
    }

    /// Shows the day at `index` in selector order
    pub fn show_day_at(&mut self, index: usize) -> bool {
        match self.day_controls.get(index).map(|c| c.target) {
            Some(target) => self.show_day(target),
            None => false,
        }
    }

    /// Shows the next day, staying on the last one
    pub fn next_day(&mut self) {
        if let Some(current) = self.active_day {
            let last = self.day_controls.len() - 1;
            self.show_day_at((current + 1).min(last));
        }
    }

    /// Shows the previous day, staying on the first one
    pub fn previous_day(&mut self) {
        if let Some(current) = self.active_day {
            self.show_day_at(current.saturating_sub(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::all_days;

    /// Records every activation it is told about
    #[derive(Default)]
    struct RecordingHook {
        activated: Vec<View>,
    }

    impl ActivationHook for RecordingHook {
        fn on_view_activated(&mut self, view: View) {
            self.activated.push(view);
        }
    }

    fn navigator() -> Navigator {
        Navigator::new(&NAV_CONTROLS, all_days().iter().map(DayControl::from).collect())
    }

    fn highlighted_navs(nav: &Navigator) -> Vec<usize> {
        (0..nav.nav_controls().len())
            .filter(|&i| nav.is_nav_highlighted(i))
            .collect()
    }

    fn highlighted_days(nav: &Navigator) -> Vec<usize> {
        (0..nav.day_controls().len())
            .filter(|&i| nav.is_day_highlighted(i))
            .collect()
    }

    #[test]
    fn test_view_ids_round_trip() {
        for view in View::ALL {
            assert_eq!(View::from_id(view.id()), Some(view));
        }
        assert_eq!(View::from_id("settings-view"), None);
    }

    #[test]
    fn test_initial_state_is_first_view_and_first_day() {
        let nav = navigator();
        assert_eq!(nav.active_view(), View::Itinerary);
        assert_eq!(nav.active_day_id(), Some("day1"));
        assert_eq!(highlighted_navs(&nav), vec![0]);
        assert_eq!(highlighted_days(&nav), vec![0]);
    }

    #[test]
    fn test_switch_view_highlights_matching_control() {
        let mut nav = navigator();
        let mut hook = RecordingHook::default();

        assert!(nav.switch_view("info-view", &mut hook));

        assert_eq!(nav.active_view(), View::Info);
        assert_eq!(highlighted_navs(&nav), vec![1]);
        assert_eq!(hook.activated, vec![View::Info]);
    }

    #[test]
    fn test_switch_view_unknown_target_keeps_view_and_clears_highlight() {
        let mut nav = navigator();
        let mut hook = RecordingHook::default();
        nav.switch_view("info-view", &mut hook);

        assert!(!nav.switch_view("settings-view", &mut hook));

        assert_eq!(nav.active_view(), View::Info);
        assert!(highlighted_navs(&nav).is_empty());
        assert_eq!(hook.activated, vec![View::Info], "Unknown targets activate nothing");
    }

    #[test]
    fn test_switch_view_notifies_on_every_activation() {
        let mut nav = navigator();
        let mut hook = RecordingHook::default();

        nav.switch_view("info-view", &mut hook);
        nav.switch_view("itinerary-view", &mut hook);
        nav.switch_view("info-view", &mut hook);

        assert_eq!(hook.activated, vec![View::Info, View::Itinerary, View::Info]);
    }

    #[test]
    fn test_any_switch_sequence_leaves_one_view_and_at_most_one_highlight() {
        let mut nav = navigator();
        let mut hook = RecordingHook::default();
        let sequence = ["info-view", "", "itinerary-view", "bogus", "info", "info-view"];

        let mut last_valid = View::Itinerary;
        for target in sequence {
            nav.switch_view(target, &mut hook);
            if let Some(view) = View::from_id(target) {
                last_valid = view;
            }
            assert_eq!(nav.active_view(), last_valid);
            assert!(highlighted_navs(&nav).len() <= 1);
        }
    }

    #[test]
    fn test_show_day_switches_and_highlights() {
        let mut nav = navigator();

        assert!(nav.show_day("day3"));

        assert_eq!(nav.active_day_id(), Some("day3"));
        assert_eq!(highlighted_days(&nav), vec![2]);
    }

    #[test]
    fn test_show_day_unknown_id_keeps_day_and_clears_highlight() {
        let mut nav = navigator();
        nav.show_day("day2");

        assert!(!nav.show_day("day42"));

        assert_eq!(nav.active_day_id(), Some("day2"));
        assert!(highlighted_days(&nav).is_empty());
    }

    #[test]
    fn test_next_and_previous_day_clamp_at_ends() {
        let mut nav = navigator();

        nav.previous_day();
        assert_eq!(nav.active_day_id(), Some("day1"));

        for _ in 0..10 {
            nav.next_day();
        }
        assert_eq!(nav.active_day_id(), Some("day5"));

        nav.previous_day();
        assert_eq!(nav.active_day_id(), Some("day4"));
        assert_eq!(highlighted_days(&nav), vec![3]);
    }

    #[test]
    fn test_next_day_recovers_highlight_after_unknown_id() {
        let mut nav = navigator();
        nav.show_day("nope");

        nav.next_day();

        assert_eq!(nav.active_day_id(), Some("day2"));
        assert_eq!(highlighted_days(&nav), vec![1]);
    }

    #[test]
    fn test_show_day_at_out_of_range_is_ignored() {
        let mut nav = navigator();
        assert!(!nav.show_day_at(99));
        assert_eq!(nav.active_day_id(), Some("day1"));
        assert_eq!(highlighted_days(&nav), vec![0]);
    }

    #[test]
    fn test_navigator_without_days() {
        let mut nav = Navigator::new(&NAV_CONTROLS, Vec::new());
        assert_eq!(nav.active_day_id(), None);
        nav.next_day();
        nav.previous_day();
        assert!(!nav.show_day("day1"));
        assert_eq!(nav.active_day_id(), None);
    }

    #[test]
    fn test_bind_controls_reads_declared_targets() {
        let nav = navigator();
        let bindings = nav.bind_controls();
        assert_eq!(
            bindings,
            vec![
                NavBinding {
                    key: 'i',
                    target: "itinerary-view"
                },
                NavBinding {
                    key: 'n',
                    target: "info-view"
                },
            ]
        );
    }
}
