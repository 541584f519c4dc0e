//! End-to-end interaction scenarios, driven through the public API the way
//! a host page would drive the widget.

use std::sync::{Arc, Mutex};

use typeahead::prelude::*;

// Note: no "Tunisia" here; containment matching would find "uni" inside it.
const COUNTRIES: [&str; 5] = [
    "Hungary",
    "United Arab Emirates",
    "United Kingdom",
    "United States",
    "Zimbabwe",
];

fn country_widget() -> Autocomplete<&'static str> {
    Autocomplete::new(COUNTRIES.to_vec())
}

fn type_str(widget: &mut Autocomplete<&'static str>, s: &str) {
    for c in s.chars() {
        widget.type_char(c);
    }
}

// --- Scenario A: case-insensitive matching

#[test]
fn typing_uni_lowercased_yields_three_suggestions() {
    let mut widget = country_widget();
    type_str(&mut widget, "uni");

    assert_eq!(
        widget.suggestions(),
        ["United Arab Emirates", "United Kingdom", "United States"]
    );
}

#[test]
fn typing_uni_capitalized_yields_the_same_suggestions() {
    let mut widget = country_widget();
    type_str(&mut widget, "Uni");

    assert_eq!(
        widget.suggestions(),
        ["United Arab Emirates", "United Kingdom", "United States"]
    );
}

// --- Scenario B: deleting characters

#[test]
fn backspacing_below_a_match_closes_the_list() {
    let mut widget = country_widget();
    type_str(&mut widget, "uni");
    assert!(widget.is_open());

    // "un" still matches three countries; keep deleting to empty.
    widget.backspace();
    widget.backspace();
    widget.backspace();

    assert_eq!(widget.query(), "");
    assert!(!widget.is_open());
    assert!(widget.suggestions().is_empty());
}

#[test]
fn emptying_the_query_emits_closed() {
    let mut widget = country_widget();
    let closed = Arc::new(Mutex::new(0));

    let closed_clone = closed.clone();
    widget.closed.connect(move |_| {
        *closed_clone.lock().unwrap() += 1;
    });

    type_str(&mut widget, "u");
    widget.backspace();

    assert_eq!(*closed.lock().unwrap(), 1);
}

// --- Scenario C: highlight navigation

#[test]
fn arrows_walk_the_highlight_up_and_down() {
    let mut widget = country_widget();
    type_str(&mut widget, "uni");

    widget.move_down();
    assert_eq!(
        widget.snapshot().highlighted(),
        Some(&"United Arab Emirates")
    );

    widget.move_down();
    assert_eq!(widget.snapshot().highlighted(), Some(&"United Kingdom"));

    widget.move_up();
    assert_eq!(
        widget.snapshot().highlighted(),
        Some(&"United Arab Emirates")
    );
}

#[test]
fn highlight_clamps_at_both_ends() {
    let mut widget = country_widget();
    type_str(&mut widget, "uni");

    for _ in 0..10 {
        widget.move_down();
    }
    assert_eq!(widget.highlight_index(), Some(2));

    for _ in 0..10 {
        widget.move_up();
    }
    assert_eq!(widget.highlight_index(), Some(0));
}

// --- Scenario D: committing the highlight

#[test]
fn enter_commits_the_highlighted_country() {
    let mut widget = country_widget();
    let selected = Arc::new(Mutex::new(Vec::new()));

    let selected_clone = selected.clone();
    widget.selected.connect(move |country| {
        selected_clone.lock().unwrap().push(*country);
    });

    type_str(&mut widget, "united");
    widget.move_down();
    widget.move_down();
    widget.commit();

    assert_eq!(*selected.lock().unwrap(), ["United Kingdom"]);
    assert_eq!(widget.query(), "");
    assert!(!widget.is_open());
    assert!(widget.suggestions().is_empty());
}

#[test]
fn commit_emits_selected_then_cleared_query_then_closed() {
    let mut widget = country_widget();
    let order = Arc::new(Mutex::new(Vec::new()));

    let order_clone = order.clone();
    widget.selected.connect(move |country| {
        order_clone
            .lock()
            .unwrap()
            .push(format!("selected:{country}"));
    });
    let order_clone = order.clone();
    widget.query_changed.connect(move |query| {
        order_clone.lock().unwrap().push(format!("query:{query}"));
    });
    let order_clone = order.clone();
    widget.closed.connect(move |_| {
        order_clone.lock().unwrap().push("closed".to_string());
    });

    type_str(&mut widget, "united");
    widget.move_down();
    widget.move_down();

    order.lock().unwrap().clear();
    widget.commit();

    assert_eq!(
        *order.lock().unwrap(),
        ["selected:United Kingdom", "query:", "closed"]
    );
}

#[test]
fn clicking_a_suggestion_commits_it_directly() {
    let mut widget = country_widget();
    let selected = Arc::new(Mutex::new(Vec::new()));

    let selected_clone = selected.clone();
    widget.selected.connect(move |country| {
        selected_clone.lock().unwrap().push(*country);
    });

    type_str(&mut widget, "united");
    // No highlight at all; the click alone decides.
    widget.click_suggestion(1);

    assert_eq!(*selected.lock().unwrap(), ["United Kingdom"]);
    assert_eq!(widget.query(), "");
    assert!(!widget.is_open());
}

// --- Scenario E: manual trigger

#[test]
fn manual_mode_stays_closed_until_triggered() {
    let mut widget = Autocomplete::with_config(
        COUNTRIES.to_vec(),
        Config::default().with_trigger_mode(TriggerMode::Manual),
    )
    .unwrap();

    type_str(&mut widget, "uni");
    assert!(!widget.is_open());
    assert!(widget.suggestions().is_empty());

    widget.trigger_search();
    assert!(widget.is_open());
    assert_eq!(widget.suggestions().len(), 3);
}

#[test]
fn manual_mode_behaves_automatically_once_triggered() {
    let mut widget = Autocomplete::with_config(
        COUNTRIES.to_vec(),
        Config::default().with_trigger_mode(TriggerMode::Manual),
    )
    .unwrap();

    type_str(&mut widget, "united");
    widget.trigger_search();
    assert!(widget.is_open());

    // Deleting a character recomputes but does not hide the list.
    widget.backspace();
    assert!(widget.is_open());
    assert_eq!(widget.suggestions().len(), 3);

    // Typing more keeps governing the list automatically.
    widget.type_char('d');
    assert!(widget.is_open());
}

#[test]
fn manual_mode_commit_clears_and_requires_a_new_trigger() {
    let mut widget = Autocomplete::with_config(
        COUNTRIES.to_vec(),
        Config::default().with_trigger_mode(TriggerMode::Manual),
    )
    .unwrap();
    let selected = Arc::new(Mutex::new(Vec::new()));

    let selected_clone = selected.clone();
    widget.selected.connect(move |country| {
        selected_clone.lock().unwrap().push(*country);
    });

    type_str(&mut widget, "united");
    widget.trigger_search();
    widget.move_down();
    widget.move_down();
    widget.commit();

    assert_eq!(*selected.lock().unwrap(), ["United Kingdom"]);
    assert_eq!(widget.query(), "");
    assert!(!widget.is_open());

    // The trigger was disarmed by the commit.
    type_str(&mut widget, "uni");
    assert!(!widget.is_open());

    widget.trigger_search();
    assert!(widget.is_open());
}

#[test]
fn explicit_close_disarms_the_manual_trigger() {
    let mut widget = Autocomplete::with_config(
        COUNTRIES.to_vec(),
        Config::default().with_trigger_mode(TriggerMode::Manual),
    )
    .unwrap();

    type_str(&mut widget, "uni");
    widget.trigger_search();
    assert!(widget.is_open());

    widget.close();
    assert!(!widget.is_open());

    widget.type_char('t');
    assert!(!widget.is_open());
}

// --- Scenario F: multi-select

#[test]
fn multi_select_accumulates_and_keeps_matching_all_candidates() {
    let mut widget = Autocomplete::with_config(
        vec!["simple", "simple-tag", "other-tag"],
        Config::default().with_selection_mode(SelectionMode::Multi),
    )
    .unwrap();

    for c in "simple-tag".chars() {
        widget.type_char(c);
    }
    widget.move_down();
    assert_eq!(widget.snapshot().highlighted(), Some(&"simple-tag"));
    widget.commit();

    assert_eq!(widget.selected_items(), ["simple-tag"]);
    assert_eq!(widget.query(), "");
    assert!(!widget.is_open());

    // A new search is independent of the prior commit.
    for c in "simple".chars() {
        widget.type_char(c);
    }
    assert_eq!(widget.suggestions(), ["simple", "simple-tag"]);
}

#[test]
fn multi_select_duplicate_commit_is_idempotent() {
    let mut widget = Autocomplete::with_config(
        vec!["simple", "simple-tag"],
        Config::default().with_selection_mode(SelectionMode::Multi),
    )
    .unwrap();
    let selected = Arc::new(Mutex::new(Vec::new()));

    let selected_clone = selected.clone();
    widget.selected.connect(move |item| {
        selected_clone.lock().unwrap().push(*item);
    });

    for _ in 0..2 {
        for c in "simple-tag".chars() {
            widget.type_char(c);
        }
        widget.move_down();
        widget.commit();
    }

    assert_eq!(widget.selected_items(), ["simple-tag"]);
    assert_eq!(*selected.lock().unwrap(), ["simple-tag"]);
    // The query still clears on the duplicate commit.
    assert_eq!(widget.query(), "");
}

// --- Defensive no-ops

#[test]
fn trigger_search_in_auto_mode_is_a_noop() {
    let mut widget = country_widget();
    let changed = Arc::new(Mutex::new(0));

    let changed_clone = changed.clone();
    widget.suggestions_changed.connect(move |_| {
        *changed_clone.lock().unwrap() += 1;
    });

    widget.trigger_search();
    assert!(!widget.is_open());
    assert_eq!(*changed.lock().unwrap(), 0);
}

#[test]
fn commit_with_no_highlight_emits_nothing() {
    let mut widget = country_widget();
    let selected = Arc::new(Mutex::new(0));

    let selected_clone = selected.clone();
    widget.selected.connect(move |_| {
        *selected_clone.lock().unwrap() += 1;
    });

    type_str(&mut widget, "uni");
    widget.commit();

    assert_eq!(*selected.lock().unwrap(), 0);
    assert!(widget.is_open());
}

#[test]
fn out_of_range_click_emits_nothing() {
    let mut widget = country_widget();
    let selected = Arc::new(Mutex::new(0));

    let selected_clone = selected.clone();
    widget.selected.connect(move |_| {
        *selected_clone.lock().unwrap() += 1;
    });

    type_str(&mut widget, "uni");
    widget.click_suggestion(3);

    assert_eq!(*selected.lock().unwrap(), 0);
    assert_eq!(widget.suggestions().len(), 3);
}

#[test]
fn query_changed_fires_on_every_keystroke() {
    let mut widget = country_widget();
    let queries = Arc::new(Mutex::new(Vec::new()));

    let queries_clone = queries.clone();
    widget.query_changed.connect(move |query| {
        queries_clone.lock().unwrap().push(query.clone());
    });

    type_str(&mut widget, "uni");
    widget.backspace();

    assert_eq!(*queries.lock().unwrap(), ["u", "un", "uni", "un"]);
}

#[test]
fn suggestions_changed_reports_highlight_moves() {
    let mut widget = country_widget();
    let highlights = Arc::new(Mutex::new(Vec::new()));

    let highlights_clone = highlights.clone();
    widget.suggestions_changed.connect(move |(_, highlight)| {
        highlights_clone.lock().unwrap().push(*highlight);
    });

    type_str(&mut widget, "uni");
    widget.move_down();
    widget.move_down();
    widget.move_up();

    let seen = highlights.lock().unwrap();
    // Three keystrokes replace the list (no highlight), then three moves.
    assert_eq!(
        *seen,
        [None, None, None, Some(0), Some(1), Some(0)]
    );
}

#[test]
fn events_drive_the_widget_like_direct_calls() {
    let mut widget = country_widget();

    for c in "uni".chars() {
        widget.handle_event(InputEvent::Type(c));
    }
    widget.handle_event(InputEvent::MoveDown);
    widget.handle_event(InputEvent::MoveDown);
    widget.handle_event(InputEvent::MoveUp);

    assert_eq!(
        widget.snapshot().highlighted(),
        Some(&"United Arab Emirates")
    );

    widget.handle_event(InputEvent::Commit);
    assert_eq!(widget.query(), "");
    assert!(!widget.is_open());
}
