use super::*;

#[test]
fn testimonial_author_is_email_local_part() {
    assert_eq!(testimonial_author("ann@example.com"), "ann");
    assert_eq!(testimonial_author("no-at-sign"), "no-at-sign");
    assert_eq!(testimonial_author(""), "");
}
