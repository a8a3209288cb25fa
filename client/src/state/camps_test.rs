use super::*;

fn camp(id: &str, name: &str, location: &str, fees: f64, count: u32) -> Camp {
    Camp {
        id: id.to_owned(),
        camp_name: name.to_owned(),
        location: location.to_owned(),
        camp_fees: fees,
        participant_count: count,
        description: format!("{name} in {location}"),
        ..Camp::default()
    }
}

fn sample() -> Vec<Camp> {
    vec![
        camp("a", "heart health", "Dhaka", 30.0, 5),
        camp("b", "Eye Care", "Chittagong", 10.0, 40),
        camp("c", "Dental Day", "Sylhet", 20.0, 12),
    ]
}

fn ids(camps: &[Camp]) -> Vec<&str> {
    camps.iter().map(|c| c.id.as_str()).collect()
}

// =============================================================
// Sort option
// =============================================================

#[test]
fn sort_option_round_trips_select_values() {
    for opt in SortOption::ALL {
        assert_eq!(SortOption::from_value(opt.as_value()), opt);
    }
    assert_eq!(SortOption::from_value("bogus"), SortOption::Default);
}

#[test]
fn sort_default_keeps_api_order() {
    let mut camps = sample();
    sort_camps(&mut camps, SortOption::Default);
    assert_eq!(ids(&camps), ["a", "b", "c"]);
}

#[test]
fn sort_most_registered_is_descending() {
    let mut camps = sample();
    sort_camps(&mut camps, SortOption::MostRegistered);
    assert_eq!(ids(&camps), ["b", "c", "a"]);
}

#[test]
fn sort_fees_is_ascending() {
    let mut camps = sample();
    sort_camps(&mut camps, SortOption::CampFees);
    assert_eq!(ids(&camps), ["b", "c", "a"]);
}

#[test]
fn sort_alphabetical_ignores_case() {
    let mut camps = sample();
    sort_camps(&mut camps, SortOption::Alphabetical);
    assert_eq!(ids(&camps), ["c", "b", "a"]);
}

// =============================================================
// Search
// =============================================================

#[test]
fn filter_matches_name_location_or_description() {
    let camps = sample();
    assert_eq!(ids(&filter_camps(&camps, "EYE")), ["b"]);
    assert_eq!(ids(&filter_camps(&camps, "sylhet")), ["c"]);
    assert_eq!(ids(&filter_camps(&camps, "in dhaka")), ["a"]);
}

#[test]
fn filter_blank_keyword_keeps_everything() {
    assert_eq!(filter_camps(&sample(), "   ").len(), 3);
}

#[test]
fn filter_no_match_is_empty() {
    assert!(filter_camps(&sample(), "oncology").is_empty());
}

#[test]
fn quick_search_skips_description_and_blank_query() {
    let camps = sample();
    assert!(quick_search(&camps, "").is_empty());
    assert!(quick_search(&camps, "in dhaka").is_empty());
    assert_eq!(ids(&quick_search(&camps, "chitt")), ["b"]);
}

#[test]
fn catalog_view_filters_then_sorts() {
    let mut camps = sample();
    camps.push(camp("d", "Eye Screening", "Dhaka", 5.0, 1));
    let view = catalog_view(&camps, "eye", SortOption::CampFees);
    assert_eq!(ids(&view), ["d", "b"]);
}

#[test]
fn popular_camps_takes_top_by_count() {
    let camps = sample();
    assert_eq!(ids(&popular_camps(&camps, 2)), ["b", "c"]);
    assert_eq!(popular_camps(&camps, POPULAR_CAMP_COUNT).len(), 3);
}

// =============================================================
// Local patching
// =============================================================

#[test]
fn increment_participants_updates_listed_camp() {
    let mut state = CampsState { items: sample(), ..CampsState::default() };
    assert_eq!(state.increment_participants("a"), Some(6));
    assert_eq!(state.find("a").map(|c| c.participant_count), Some(6));
    assert_eq!(state.increment_participants("zzz"), None);
}

#[test]
fn replace_and_remove_patch_in_place() {
    let mut state = CampsState { items: sample(), ..CampsState::default() };
    assert!(state.replace(camp("b", "Eye Care Plus", "Chittagong", 12.0, 40)));
    assert_eq!(state.find("b").map(|c| c.camp_name.as_str()), Some("Eye Care Plus"));
    assert!(!state.replace(camp("q", "Ghost", "", 0.0, 0)));

    state.remove("a");
    assert_eq!(ids(&state.items), ["b", "c"]);
}

#[test]
fn upsert_appends_unknown_camp() {
    let mut state = CampsState::default();
    state.upsert(camp("x", "New", "Rajshahi", 0.0, 0));
    state.upsert(camp("x", "Renamed", "Rajshahi", 0.0, 0));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].camp_name, "Renamed");
}

// =============================================================
// Edit merge
// =============================================================

#[test]
fn merge_prefers_fetched_values() {
    let previous = camp("a", "Old", "Dhaka", 30.0, 5);
    let submitted = camp("", "Submitted", "Khulna", 35.0, 0);
    let fetched = camp("a", "Fetched", "Barisal", 40.0, 7);
    let merged = merge_updated_camp(&previous, &submitted, Some(fetched));
    assert_eq!(merged.id, "a");
    assert_eq!(merged.camp_name, "Fetched");
    assert_eq!(merged.location, "Barisal");
    assert!((merged.camp_fees - 40.0).abs() < f64::EPSILON);
    assert_eq!(merged.participant_count, 7);
}

#[test]
fn merge_falls_back_field_by_field() {
    let previous = camp("a", "Old", "Dhaka", 30.0, 5);
    let submitted = camp("", "Submitted", "Khulna", 35.0, 0);
    let fetched = Camp { id: "a".to_owned(), camp_name: "Fetched".to_owned(), ..Camp::default() };
    let merged = merge_updated_camp(&previous, &submitted, Some(fetched));
    assert_eq!(merged.camp_name, "Fetched");
    assert_eq!(merged.location, "Khulna");
    assert!((merged.camp_fees - 35.0).abs() < f64::EPSILON);
    assert_eq!(merged.participant_count, 5);
}

#[test]
fn merge_without_refetch_uses_submission() {
    let previous = camp("a", "Old", "Dhaka", 30.0, 5);
    let submitted = camp("", "Submitted", "Khulna", 35.0, 0);
    let merged = merge_updated_camp(&previous, &submitted, None);
    assert_eq!(merged.id, "a");
    assert_eq!(merged.camp_name, "Submitted");
    assert_eq!(merged.participant_count, 5);
}
