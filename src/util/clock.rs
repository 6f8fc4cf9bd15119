//! Today's local calendar date.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::{Date, Month};

/// Date from JS-style parts: full year, zero-based month, day of month.
fn date_from_parts(year: u32, month_index: u32, day: u32) -> Option<Date> {
    let year = i32::try_from(year).ok()?;
    let month = Month::try_from(u8::try_from(month_index + 1).ok()?).ok()?;
    Date::from_calendar_date(year, month, u8::try_from(day).ok()?).ok()
}

/// Today in the device's time zone.
pub fn today() -> Date {
    #[cfg(feature = "csr")]
    let parts = {
        let now = js_sys::Date::new_0();
        (now.get_full_year(), now.get_month(), now.get_date())
    };
    #[cfg(not(feature = "csr"))]
    let parts = {
        let now = time::OffsetDateTime::now_utc().date();
        (
            u32::try_from(now.year()).unwrap_or_default(),
            u32::from(u8::from(now.month())) - 1,
            u32::from(now.day()),
        )
    };
    date_from_parts(parts.0, parts.1, parts.2).unwrap_or_else(|| {
        log::error!("clock: invalid local date {parts:?}");
        Date::MIN
    })
}
