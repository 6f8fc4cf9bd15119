//! Russian-locale display text.
//!
//! Amounts use the ru-RU grouping (no-break space every three digits, comma
//! before the fraction), so labels match what the clinic shows elsewhere.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::calendar::parse_iso_date;
use crate::types::{PriceType, Service};

/// Thousands separator used by ru-RU.
pub const GROUP_SEPARATOR: char = '\u{a0}';
/// Shown when a service has no usable price.
pub const PRICE_ON_REQUEST: &str = "Уточняйте";

const WEEKDAY_SHORT: [&str; 7] = ["пн", "вт", "ср", "чт", "пт", "сб", "вс"];
const MONTH_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Group the decimal digits of `value` in threes.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Format an amount with up to two fraction digits, trailing zeros dropped.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_amount(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    match cents % 100 {
        0 => format!("{sign}{whole}"),
        frac if frac % 10 == 0 => format!("{sign}{whole},{}", frac / 10),
        frac => format!("{sign}{whole},{frac:02}"),
    }
}

/// Price text for a service card.
///
/// Server-provided `price_display` wins. Otherwise the text follows
/// `price_type`; a type whose amounts are missing is shown as on request.
#[must_use]
pub fn format_price(service: &Service) -> String {
    if let Some(display) = service.price_display.as_deref().filter(|d| !d.trim().is_empty()) {
        return display.to_owned();
    }
    match (service.price_type.unwrap_or_default(), service.price, service.price_from, service.price_to) {
        (PriceType::Fixed, Some(price), _, _) => format!("{} ₽", format_amount(price)),
        (PriceType::From, _, Some(from), _) => format!("от {} ₽", format_amount(from)),
        (PriceType::Range, _, Some(from), Some(to)) => {
            format!("{} — {} ₽", format_amount(from), format_amount(to))
        }
        _ => PRICE_ON_REQUEST.to_owned(),
    }
}

/// Pick the Russian plural form for `n`.
#[must_use]
pub fn plural_ru<'a>(n: u64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    match (n % 10, n % 100) {
        (1, rem) if rem != 11 => one,
        (2..=4, rem) if !(12..=14).contains(&rem) => few,
        _ => many,
    }
}

/// "5 услуг", "1 услуга", "3 услуги".
#[must_use]
pub fn services_count_label(count: u32) -> String {
    format!("{count} {}", plural_ru(count.into(), "услуга", "услуги", "услуг"))
}

/// "Стаж 12 лет".
#[must_use]
pub fn experience_label(years: u32) -> String {
    format!("Стаж {years} {}", plural_ru(years.into(), "год", "года", "лет"))
}

#[must_use]
pub fn duration_label(minutes: u32) -> String {
    format!("{minutes} мин")
}

/// "⭐ 4.9".
#[must_use]
pub fn rating_label(rating: f64) -> String {
    format!("⭐ {rating}")
}

/// Appointment date as "пн, 6 октября".
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_appointment_date(iso: &str) -> String {
    match parse_iso_date(iso) {
        Ok(date) => {
            let weekday = WEEKDAY_SHORT[usize::from(date.weekday().number_days_from_monday())];
            let month = MONTH_GENITIVE[usize::from(u8::from(date.month())) - 1];
            format!("{weekday}, {} {month}", date.day())
        }
        Err(_) => iso.to_owned(),
    }
}
