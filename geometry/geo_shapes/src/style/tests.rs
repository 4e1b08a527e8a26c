use pretty_assertions::assert_eq;

use super::*;

#[test]
fn default_is_white_and_not_filled() {
    let style = Style::default();
    assert_eq!(style.color(), "White");
    assert!(!style.is_filled());
}

#[test]
fn new_stores_trimmed_color() {
    let Ok(style) = Style::new("  Cobalt Blue \t", true) else {
        panic!("expected Ok for a non-blank color");
    };
    assert_eq!(style.color(), "Cobalt Blue");
    assert!(style.is_filled());
}

#[test]
fn new_rejects_empty_color() {
    assert_eq!(Style::new("", false), Err(InvalidArgument::BlankColor));
}

#[test]
fn new_rejects_whitespace_only_color() {
    assert_eq!(Style::new("   \t\n", true), Err(InvalidArgument::BlankColor));
}

#[test]
fn set_color_replaces_value() {
    let mut style = Style::default();
    assert_eq!(style.set_color("Red"), Ok(()));
    assert_eq!(style.color(), "Red");
}

#[test]
fn failed_set_color_keeps_previous_value() {
    let mut style = Style::default();
    assert_eq!(style.set_color("  "), Err(InvalidArgument::BlankColor));
    assert_eq!(style.color(), "White");
}

#[test]
fn set_filled_toggles() {
    let mut style = Style::default();
    style.set_filled(true);
    assert!(style.is_filled());
    style.set_filled(false);
    assert!(!style.is_filled());
}

#[test]
fn display_format() {
    let style = Style::default();
    assert_eq!(style.to_string(), "Color: White    IsFilled: false");

    let Ok(style) = Style::new("Green", true) else {
        panic!("expected Ok for a non-blank color");
    };
    assert_eq!(style.to_string(), "Color: Green    IsFilled: true");
}
