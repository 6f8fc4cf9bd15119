use super::*;

#[test]
fn starts_loading() {
    assert_eq!(Listing::<u8>::default(), Listing::Loading);
}

#[test]
fn failure_and_empty_list_are_both_empty() {
    assert_eq!(Listing::<u8>::from_response(None), Listing::Empty);
    assert_eq!(Listing::<u8>::from_response(Some(Vec::new())), Listing::Empty);
}

#[test]
fn items_are_kept_in_order() {
    assert_eq!(Listing::from_response(Some(vec![3, 1, 2])), Listing::Ready(vec![3, 1, 2]));
}
