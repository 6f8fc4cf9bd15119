#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn dark_scheme_uses_stylesheet_class() {
    assert_eq!(ColorScheme::Dark.body_class(), Some(DARK_CLASS));
    assert_eq!(ColorScheme::Light.body_class(), None);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(ColorScheme::Dark);
    apply(ColorScheme::Light);
}
