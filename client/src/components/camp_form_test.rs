use super::*;
use crate::util::validate::parse_datetime;

fn now() -> NaiveDateTime {
    parse_datetime("2030-01-01T00:00").unwrap_or_default()
}

fn valid_draft() -> CampDraft {
    CampDraft {
        camp_name: " Eye Care ".to_owned(),
        image: "https://example.com/eye.jpg".to_owned(),
        camp_fees: "12.5".to_owned(),
        date_time: "2030-02-01T10:00".to_owned(),
        location: "Dhaka".to_owned(),
        healthcare_professional: "Dr. Rahman".to_owned(),
        description: DEFAULT_DESCRIPTION.to_owned(),
    }
}

#[test]
fn default_draft_carries_default_description() {
    assert_eq!(CampDraft::default().description, DEFAULT_DESCRIPTION);
}

#[test]
fn valid_draft_builds_trimmed_camp_with_zero_participants() {
    let camp = valid_draft().validate(now()).unwrap_or_default();
    assert_eq!(camp.camp_name, "Eye Care");
    assert!((camp.camp_fees - 12.5).abs() < f64::EPSILON);
    assert_eq!(camp.participant_count, 0);
    assert!(camp.id.is_empty());
}

#[test]
fn empty_draft_reports_every_required_field() {
    let draft = CampDraft { description: String::new(), ..CampDraft::default() };
    let errors = draft.validate(now()).err().unwrap_or_default();
    for field in ["campName", "image", "campFees", "dateTime", "location", "healthcareProfessional", "description"] {
        assert!(errors.has(field), "missing error for {field}");
    }
    assert_eq!(errors.get("campName"), Some("Camp name is required"));
}

#[test]
fn bad_url_negative_fee_and_past_date_are_rejected() {
    let draft = CampDraft {
        image: "not a url".to_owned(),
        camp_fees: "-5".to_owned(),
        date_time: "2029-12-31T23:00".to_owned(),
        ..valid_draft()
    };
    let errors = draft.validate(now()).err().unwrap_or_default();
    assert_eq!(errors.get("image"), Some("Please enter a valid URL (e.g., https://example.com/image.jpg)"));
    assert_eq!(errors.get("campFees"), Some("Fees cannot be negative"));
    assert_eq!(errors.get("dateTime"), Some("Date and time must be in the future"));
    assert_eq!(errors.len(), 3);
}

#[test]
fn free_camp_is_allowed() {
    let draft = CampDraft { camp_fees: "0".to_owned(), ..valid_draft() };
    assert!(draft.validate(now()).is_ok());
}

#[test]
fn from_camp_prefills_input_formats() {
    let camp = Camp {
        id: "c1".to_owned(),
        camp_name: "Dental".to_owned(),
        camp_fees: 20.0,
        date_time: "2030-03-04T05:06:07.000Z".to_owned(),
        ..Camp::default()
    };
    let draft = CampDraft::from_camp(&camp);
    assert_eq!(draft.camp_name, "Dental");
    assert_eq!(draft.camp_fees, "20");
    assert_eq!(draft.date_time, "2030-03-04T05:06");
}
