use super::*;

#[test]
fn parses_positive_ids() {
    assert_eq!(parse_id(Some("3")), Some(3));
    assert_eq!(parse_id(Some(" 12 ")), Some(12));
}

#[test]
fn rejects_missing_blank_or_invalid() {
    assert_eq!(parse_id(None), None);
    assert_eq!(parse_id(Some("")), None);
    assert_eq!(parse_id(Some("abc")), None);
    assert_eq!(parse_id(Some("0")), None);
    assert_eq!(parse_id(Some("-4")), None);
}
