//! Host theme on `<body>`.
//!
//! The stylesheet keys dark colors off `body.tg-theme-dark`; light is the
//! absence of the class. Requires a browser environment.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::host::ColorScheme;

#[cfg(any(test, feature = "csr"))]
const DARK_CLASS: &str = "tg-theme-dark";

/// Add or remove the dark class to match `scheme`.
pub fn apply(scheme: ColorScheme) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let class_list = body.class_list();
            match scheme.body_class() {
                Some(class) => {
                    let _ = class_list.add_1(class);
                }
                None => {
                    let _ = class_list.remove_1(DARK_CLASS);
                }
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = scheme;
    }
}
