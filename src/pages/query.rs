//! Query-string helpers shared by catalog pages.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use booking::Id;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

/// Positive numeric id from a raw query value.
pub(crate) fn parse_id(raw: Option<&str>) -> Option<Id> {
    raw.and_then(|value| value.trim().parse::<Id>().ok()).filter(|id| *id > 0)
}

/// Reactive id from query parameter `key`.
pub(crate) fn use_id_param(key: &'static str) -> Memo<Option<Id>> {
    let query = use_query_map();
    Memo::new(move |_| query.with(|q| parse_id(q.get_str(key))))
}
