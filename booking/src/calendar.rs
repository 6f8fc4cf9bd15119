//! Month grid for the date picker.
//!
//! The grid is Monday-first with seven columns. It starts with
//! `(weekday_of_first + 6) % 7` disabled blanks (weekday counted from Sunday =
//! 0, so the result is the number of days since Monday), followed by one cell
//! per day of the month. Each day carries three independent flags: `past`
//! (strictly before today, never selectable), `today`, and `selected`.
//!
//! Paging is by [`YearMonth::next`] / [`YearMonth::prev`]; the grid reports
//! whether paging back is useful via [`MonthGrid::can_go_back`].

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use time::{Date, Month};

use crate::error::BookingError;

/// Weekday header, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

/// Month names in the nominative case, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// A calendar month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// Validate a `year` and 1-based `month`.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidMonth`] when the month is outside
    /// `1..=12` or the year is outside the supported date range.
    pub fn new(year: i32, month: u8) -> Result<Self, BookingError> {
        let candidate = Self { year, month };
        candidate.first_day()?;
        Ok(candidate)
    }

    /// Month containing `date`.
    #[must_use]
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: u8::from(date.month()),
        }
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.year
    }

    /// 1-based month number.
    #[must_use]
    pub fn month(self) -> u8 {
        self.month
    }

    /// First day of the month.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidMonth`] when the month cannot be represented.
    pub fn first_day(self) -> Result<Date, BookingError> {
        let invalid = || BookingError::InvalidMonth {
            year: self.year,
            month: self.month,
        };
        let month = Month::try_from(self.month).map_err(|_| invalid())?;
        Date::from_calendar_date(self.year, month, 1).map_err(|_| invalid())
    }

    /// Number of days in the month.
    #[must_use]
    pub fn days(self) -> u8 {
        Month::try_from(self.month).map_or(0, |month| month.length(self.year))
    }

    #[must_use]
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Header text, e.g. `Октябрь 2026`.
    #[must_use]
    pub fn title(self) -> String {
        let name = MONTH_NAMES
            .get(usize::from(self.month.saturating_sub(1)))
            .copied()
            .unwrap_or_default();
        format!("{name} {}", self.year)
    }
}

/// Format a date as `YYYY-MM-DD`.
#[must_use]
pub fn iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Parse a `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns [`BookingError::InvalidDate`] for malformed input or impossible dates.
pub fn parse_iso_date(raw: &str) -> Result<Date, BookingError> {
    let invalid = || BookingError::InvalidDate(raw.to_owned());
    let mut parts = raw.trim().splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return Err(invalid());
    }
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u8 = month.parse().map_err(|_| invalid())?;
    let day: u8 = day.parse().map_err(|_| invalid())?;
    let month = Month::try_from(month).map_err(|_| invalid())?;
    Date::from_calendar_date(year, month, day).map_err(|_| invalid())
}

/// Month to show first: the selected date's month unless it lies before the
/// current month.
#[must_use]
pub fn initial_month(today: Date, selected: Option<&str>) -> YearMonth {
    let current = YearMonth::of(today);
    match selected.map(parse_iso_date) {
        Some(Ok(date)) if YearMonth::of(date) >= current => YearMonth::of(date),
        _ => current,
    }
}

/// One day of the month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayCell {
    pub day: u8,
    /// `YYYY-MM-DD`.
    pub iso: String,
    pub past: bool,
    pub today: bool,
    pub selected: bool,
}

impl DayCell {
    /// Past days are disabled.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.past
    }
}

/// Grid cell: a leading blank or a day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day(DayCell),
}

impl CalendarCell {
    /// Blanks and past days ignore clicks.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        match self {
            Self::Blank => true,
            Self::Day(day) => !day.is_selectable(),
        }
    }
}

/// A rendered month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub leading_blanks: u8,
    pub cells: Vec<CalendarCell>,
    /// `false` when `month` is the current month or earlier.
    pub can_go_back: bool,
}

impl MonthGrid {
    /// Build the grid for `month` relative to `today`, marking `selected`.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidMonth`] when `month` cannot be represented.
    pub fn build(month: YearMonth, today: Date, selected: Option<&str>) -> Result<Self, BookingError> {
        let first = month.first_day()?;
        let leading_blanks = first.weekday().number_days_from_monday();
        let days = month.days();

        let mut cells = Vec::with_capacity(usize::from(leading_blanks) + usize::from(days));
        cells.extend((0..leading_blanks).map(|_| CalendarCell::Blank));

        let mut date = first;
        for day in 1..=days {
            let iso = iso_date(date);
            cells.push(CalendarCell::Day(DayCell {
                day,
                past: date < today,
                today: date == today,
                selected: selected == Some(iso.as_str()),
                iso,
            }));
            match date.next_day() {
                Some(next) => date = next,
                None => break,
            }
        }

        Ok(Self {
            month,
            leading_blanks,
            cells,
            can_go_back: month > YearMonth::of(today),
        })
    }
}
