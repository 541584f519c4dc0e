//! Scripted walkthrough of the autocomplete engine against a country list.
//!
//! Run with `RUST_LOG=typeahead=trace` to watch the engine's tracing output.

use typeahead::prelude::*;

const COUNTRIES: [&str; 8] = [
    "Hungary",
    "Portugal",
    "Tanzania",
    "United Arab Emirates",
    "United Kingdom",
    "United States",
    "Uruguay",
    "Zimbabwe",
];

fn print_snapshot(widget: &Autocomplete<&'static str>) {
    let snapshot = widget.snapshot();
    println!("query: {:?}, open: {}", snapshot.query, snapshot.open);
    for entry in &snapshot.entries {
        let marker = if entry.highlighted { ">" } else { " " };
        println!("  {marker} {}", entry.candidate);
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut widget = Autocomplete::new(COUNTRIES.to_vec());

    let _selected = widget.selected.connect(|country| {
        println!("-> selected: {country}");
    });
    let _closed = widget.closed.connect(|_| {
        println!("-> suggestions closed");
    });

    println!("typing \"uni\"...");
    for c in "uni".chars() {
        widget.type_char(c);
    }
    print_snapshot(&widget);

    println!("\narrow down twice...");
    widget.move_down();
    widget.move_down();
    print_snapshot(&widget);

    println!("\npressing enter...");
    widget.handle_key(Key::Enter);
    print_snapshot(&widget);

    println!("\nselected so far: {:?}", widget.selected_items());
}
