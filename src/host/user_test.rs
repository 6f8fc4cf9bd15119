use super::*;

#[test]
fn test_user_matches_development_identity() {
    let user = HostUser::test_user();
    assert_eq!(user.id, 123_456_789);
}

#[test]
fn host_payload_is_parsed() {
    let raw = r#"{"id":42,"first_name":"Анна","username":"anna","language_code":"ru"}"#;
    let user = HostUser::from_json_or_test(Some(raw));
    assert_eq!(user.id, 42);
}

#[test]
fn missing_or_broken_payload_falls_back() {
    assert_eq!(HostUser::from_json_or_test(None), HostUser::test_user());
    assert_eq!(HostUser::from_json_or_test(Some("{\"name\":1}")), HostUser::test_user());
}

#[test]
fn only_dark_scheme_adds_body_class() {
    assert_eq!(ColorScheme::from_name("dark").body_class(), Some("tg-theme-dark"));
    assert_eq!(ColorScheme::from_name("light").body_class(), None);
    assert_eq!(ColorScheme::from_name("").body_class(), None);
}
