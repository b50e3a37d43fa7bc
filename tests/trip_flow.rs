//! End-to-end flow through the library: convert, change the rate, reject a
//! bad rate, open the info view.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;
use tripview::app::App;
use tripview::cli::StartupConfig;
use tripview::data::all_accommodations;
use tripview::navigator::View;
use tripview::store::RateStore;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn replace_rate(app: &mut App, rate: &str) {
    press(app, KeyCode::Char('r'));
    for _ in 0..app.info.converter.rate_input().len() {
        press(app, KeyCode::Backspace);
    }
    type_str(app, rate);
    press(app, KeyCode::Enter);
}

#[test]
fn test_convert_change_rate_reject_and_browse() {
    let data_dir = TempDir::new().expect("Failed to create temp directory");
    let store = RateStore::with_dir(data_dir.path().to_path_buf());
    let mut app = App::bootstrap(&StartupConfig::default(), Some(store.clone()));

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.navigator.active_view(), View::Info);

    press(&mut app, KeyCode::Char('a'));
    type_str(&mut app, "900");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.info.converter.result(), "≈ 200.00 TWD");

    replace_rate(&mut app, "5.0");
    assert_eq!(app.info.converter.current_rate(), 5.0);
    assert_eq!(app.info.converter.result(), "≈ 180.00 TWD");

    replace_rate(&mut app, "-1");
    assert!(app.alert.is_some(), "Rejected rate must be acknowledged");
    assert_eq!(app.info.converter.current_rate(), 5.0);
    assert_eq!(app.info.converter.rate_input(), "5.0000");
    press(&mut app, KeyCode::Enter);
    assert!(app.alert.is_none());

    // Leave and come back: cards are rebuilt in dataset order
    press(&mut app, KeyCode::Char('i'));
    press(&mut app, KeyCode::Char('n'));
    let names: Vec<&str> = app.info.cards.iter().map(|c| c.name.as_str()).collect();
    let expected: Vec<&str> = all_accommodations().iter().map(|a| a.name).collect();
    assert_eq!(names, expected);
    for (card, hotel) in app.info.cards.iter().zip(all_accommodations()) {
        let links: Vec<&str> = card.nearby.iter().map(|n| n.link.as_str()).collect();
        let expected: Vec<&str> = hotel.nearby.iter().map(|n| n.map_link).collect();
        assert_eq!(links, expected);
    }

    // The accepted rate survives a restart, the rejected one never landed
    let restarted = App::bootstrap(&StartupConfig::default(), Some(store));
    assert_eq!(restarted.info.converter.current_rate(), 5.0);
    assert_eq!(restarted.navigator.active_view(), View::Itinerary);
    assert_eq!(restarted.navigator.active_day_id(), Some("day1"));
}

#[test]
fn test_unknown_targets_never_break_navigation() {
    let mut app = App::bootstrap(&StartupConfig::default(), None);

    app.switch_view("map-view");
    assert_eq!(app.navigator.active_view(), View::Itinerary);
    assert!(!app.navigator.is_nav_highlighted(0));
    assert!(!app.navigator.is_nav_highlighted(1));

    app.navigator.show_day("day0");
    assert_eq!(app.navigator.active_day_id(), Some("day1"));

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.navigator.active_view(), View::Info);
    assert!(app.navigator.is_nav_highlighted(1));
}
