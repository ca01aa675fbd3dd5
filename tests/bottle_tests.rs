use water_sort::{Bottle, BottleError, Filling, EMPTY};
use water_sort::Filling::{Blue, Green, Red};

#[test]
fn test_fill_to_capacity_with_one_colour() {
    let mut bottle = Bottle::new(5);
    for _ in 0..4 {
        assert!(bottle.receive(Red));
    }
    assert!(!bottle.is_full());
    assert!(bottle.receive(Red));
    assert!(bottle.is_full());
    assert!(bottle.is_single_filling());
    // no room for a sixth unit
    assert!(!bottle.receive(Red));
    assert_eq!(bottle.len(), 5);
    assert_eq!(bottle.space_available(), 0);
}

#[test]
fn test_receive_rejects_different_colour() {
    let mut bottle = Bottle::new(3);
    assert!(bottle.receive(Blue));
    let before = bottle.clone();
    assert!(!bottle.receive(Green));
    assert_eq!(bottle, before);
}

#[test]
fn test_empty_bottle_has_no_top() {
    let bottle = Bottle::new(3);
    assert!(bottle.is_empty());
    assert!(bottle.is_single_filling());
    assert_eq!(bottle.top().unwrap_err(), BottleError::Empty);
}

#[test]
fn test_pour_out_on_empty_is_silent() {
    let mut bottle = Bottle::new(2);
    bottle.pour_out();
    assert!(bottle.is_empty());

    bottle.receive(Red);
    bottle.pour_out();
    assert!(bottle.is_empty());
}

#[test]
fn test_mixed_bottle_is_not_single_filling() {
    let bottle = Bottle::from_slots(&[Some(Red), Some(Red), Some(Blue), Some(Blue), Some(Blue)]);
    assert_eq!(bottle.top(), Ok(Red));
    assert!(!bottle.is_single_filling());
    assert_eq!(bottle.top_run(), 2);
    assert_eq!(bottle.iter().collect::<Vec<_>>(), vec![Red, Red, Blue, Blue, Blue]);
}

#[test]
fn test_content_is_a_copy() {
    let mut bottle = Bottle::with_contents(3, &[Green]);
    let snapshot = bottle.content();
    bottle.receive(Green);
    assert_eq!(snapshot, vec![Green]);
    assert_eq!(bottle.content(), vec![Green, Green]);
}

#[test]
fn test_display_lists_slots_top_first() {
    let bottle = Bottle::with_contents(3, &[Red, Blue]);
    let text = bottle.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec![EMPTY, Filling::Blue.symbol(), Filling::Red.symbol()]);
}
