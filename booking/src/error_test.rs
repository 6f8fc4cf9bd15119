use super::*;

#[test]
fn incomplete_draft_lists_missing_fields() {
    let err = BookingError::IncompleteDraft(vec!["doctor", "time"]);
    assert_eq!(err.to_string(), "booking draft is missing: doctor, time");
    assert_eq!(err.user_message(), INCOMPLETE_MESSAGE);
}

#[test]
fn invalid_month_pads_month_number() {
    let err = BookingError::InvalidMonth { year: 2026, month: 13 };
    assert_eq!(err.to_string(), "invalid calendar month: 2026-13");
}

#[test]
fn invalid_date_quotes_input() {
    let err = BookingError::InvalidDate("2026-02-30".to_owned());
    assert_eq!(err.to_string(), "invalid calendar date: \"2026-02-30\"");
    assert_eq!(err.user_message(), "Некорректная дата");
}
