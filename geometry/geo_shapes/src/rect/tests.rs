use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use super::*;

fn three_by_four() -> Rectangle {
    let Ok(rect) = Rectangle::new(dec!(3), dec!(4)) else {
        panic!("expected Ok for positive dimensions");
    };
    rect
}

#[test]
fn default_is_a_unit_square() {
    let rect = Rectangle::default();
    assert_eq!(rect.height(), dec!(1));
    assert_eq!(rect.width(), dec!(1));
    assert_eq!(rect.color(), "White");
    assert!(!rect.is_filled());
}

#[test]
fn new_names_the_failing_dimension() {
    assert_eq!(
        Rectangle::new(dec!(0), dec!(4)),
        Err(InvalidArgument::NonPositive {
            field: "height",
            value: dec!(0),
        })
    );
    assert_eq!(
        Rectangle::new(dec!(3), dec!(-4)),
        Err(InvalidArgument::NonPositive {
            field: "width",
            value: dec!(-4),
        })
    );
}

#[test]
fn with_style_validates_dimensions_and_color() {
    let Ok(rect) = Rectangle::with_style(dec!(2), dec!(5), "Blue", true) else {
        panic!("expected Ok for valid arguments");
    };
    assert_eq!(rect.height(), dec!(2));
    assert_eq!(rect.width(), dec!(5));
    assert_eq!(rect.color(), "Blue");
    assert!(rect.is_filled());

    assert_eq!(
        Rectangle::with_style(dec!(2), dec!(5), " ", true),
        Err(InvalidArgument::BlankColor)
    );
}

#[test]
fn area_and_perimeter_are_exact() {
    let rect = three_by_four();
    assert_eq!(rect.area(), dec!(12));
    assert_eq!(rect.perimeter(), dec!(14));
}

#[test]
fn fractional_dimensions_stay_exact() {
    let Ok(rect) = Rectangle::new(dec!(0.5), dec!(0.25)) else {
        panic!("expected Ok for positive dimensions");
    };
    assert_eq!(rect.area(), dec!(0.125));
    assert_eq!(rect.perimeter(), dec!(1.5));
}

#[test]
fn set_height_persists_valid_value() {
    let mut rect = three_by_four();
    assert_eq!(rect.set_height(dec!(6)), Ok(()));
    assert_eq!(rect.height(), dec!(6));
    assert_eq!(rect.area(), dec!(24));
}

#[test]
fn set_width_persists_valid_value() {
    // A discarded width write would leave the area unchanged.
    let mut rect = three_by_four();
    assert_eq!(rect.set_width(dec!(10)), Ok(()));
    assert_eq!(rect.width(), dec!(10));
    assert_eq!(rect.area(), dec!(30));
    assert_eq!(rect.perimeter(), dec!(26));
}

#[test]
fn failed_setters_keep_previous_values() {
    let mut rect = three_by_four();
    assert!(rect.set_height(dec!(0)).is_err());
    assert!(rect.set_width(dec!(-1)).is_err());
    assert_eq!(rect.height(), dec!(3));
    assert_eq!(rect.width(), dec!(4));
}

#[test]
fn describe_lists_dimensions_and_derived_values() {
    let rect = three_by_four();
    assert_eq!(
        rect.describe(),
        "Color: White    IsFilled: false\n\
         Height: 3    Width: 4    Area: 12    Perimeter: 14"
    );
}
