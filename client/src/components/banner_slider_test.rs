use super::*;

#[test]
fn next_wraps_to_first() {
    assert_eq!(next_index(0, 3), 1);
    assert_eq!(next_index(2, 3), 0);
}

#[test]
fn prev_wraps_to_last() {
    assert_eq!(prev_index(1, 3), 0);
    assert_eq!(prev_index(0, 3), 2);
}

#[test]
fn empty_slider_stays_at_zero() {
    assert_eq!(next_index(0, 0), 0);
    assert_eq!(prev_index(0, 0), 0);
}

#[test]
fn three_stories_are_configured() {
    assert_eq!(STORIES.len(), 3);
    assert!(STORIES.iter().all(|s| s.image.starts_with("https://")));
}
