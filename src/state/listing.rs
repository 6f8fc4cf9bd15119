#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

/// Remote list as a page shows it.
///
/// A failed fetch and an empty list both render the empty state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Listing<T> {
    #[default]
    Loading,
    Empty,
    Ready(Vec<T>),
}

impl<T> Listing<T> {
    pub fn from_response(response: Option<Vec<T>>) -> Self {
        match response {
            Some(items) if !items.is_empty() => Self::Ready(items),
            _ => Self::Empty,
        }
    }
}
