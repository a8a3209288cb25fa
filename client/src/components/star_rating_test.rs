use super::*;

#[test]
fn star_states_fill_from_the_left() {
    assert_eq!(star_states(0), [false; 5]);
    assert_eq!(star_states(3), [true, true, true, false, false]);
    assert_eq!(star_states(5), [true; 5]);
}

#[test]
fn star_states_saturate_above_five() {
    assert_eq!(star_states(9), [true; 5]);
}

#[test]
fn valid_rating_is_one_to_five() {
    assert!(!is_valid_rating(0));
    assert!(is_valid_rating(1));
    assert!(is_valid_rating(5));
    assert!(!is_valid_rating(6));
}

#[test]
fn star_class_adds_filled_modifier() {
    assert_eq!(star_class(true), "stars__star stars__star--filled");
    assert_eq!(star_class(false), "stars__star");
}
