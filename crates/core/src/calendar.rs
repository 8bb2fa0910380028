//! Month grids for the academic calendar.
//!
//! Weeks start on Monday. A grid is a run of empty leading cells followed by
//! one cell per day of the month, each optionally carrying a marker.

use chrono::{Datelike, Month, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Column headers for a Monday-first week.
pub const WEEKDAY_INITIALS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Exam,
    Holiday,
    Event,
}

/// A dated entry on the academic calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    date: NaiveDate,
    kind: EventKind,
    label: String,
}

impl CalendarEvent {
    #[must_use]
    pub fn new(date: NaiveDate, kind: EventKind, label: impl Into<String>) -> Self {
        Self {
            date,
            kind,
            label: label.into(),
        }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayMarker {
    Exam,
    Holiday,
    Event,
    Today,
}

impl DayMarker {
    /// CSS-friendly name, shared with the legend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DayMarker::Exam => "exam",
            DayMarker::Holiday => "holiday",
            DayMarker::Event => "event",
            DayMarker::Today => "today",
        }
    }
}

impl From<EventKind> for DayMarker {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Exam => DayMarker::Exam,
            EventKind::Holiday => DayMarker::Holiday,
            EventKind::Event => DayMarker::Event,
        }
    }
}

/// A calendar month, anchored on its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    /// The month `date` falls in.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// Returns `None` for a month outside `1..=12` or an unrepresentable year.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// English month name, e.g. "November".
    #[must_use]
    pub fn name(&self) -> &'static str {
        u8::try_from(self.month())
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or("", |m| m.name())
    }

    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        (28..=31)
            .rev()
            .find(|day| self.first.with_day(*day).is_some())
            .unwrap_or(28)
    }

    /// Number of empty cells before day 1 in a Monday-first week.
    #[must_use]
    pub fn leading_blanks(&self) -> u32 {
        self.first.weekday().num_days_from_monday()
    }

    /// The following month. Saturates at the last representable month.
    #[must_use]
    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map_or(*self, |first| Self { first })
    }

    /// The preceding month. Saturates at the first representable month.
    #[must_use]
    pub fn previous(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map_or(*self, |first| Self { first })
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub marker: Option<DayMarker>,
    pub label: Option<String>,
}

/// Rendered shape of one month: leading blanks, then one cell per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: CalendarMonth,
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Lay out `month`, marking event dates and `today`.
    ///
    /// An event on the same date as `today` wins the marker.
    #[must_use]
    pub fn build(month: CalendarMonth, events: &[CalendarEvent], today: NaiveDate) -> Self {
        let days = (1..=month.days_in_month())
            .filter_map(|day| month.first_day().with_day(day).map(|date| (day, date)))
            .map(|(day, date)| {
                let (marker, label) = match events.iter().find(|event| event.date() == date) {
                    Some(event) => (
                        Some(DayMarker::from(event.kind())),
                        Some(event.label().to_owned()),
                    ),
                    None if date == today => (Some(DayMarker::Today), Some("Today".to_owned())),
                    None => (None, None),
                };
                DayCell {
                    day,
                    date,
                    marker,
                    label,
                }
            })
            .collect();

        Self {
            month,
            leading_blanks: month.leading_blanks(),
            days,
        }
    }

    /// Events from `events` that fall inside this grid's month, in date order.
    #[must_use]
    pub fn events_in_month<'a>(&self, events: &'a [CalendarEvent]) -> Vec<&'a CalendarEvent> {
        let mut found: Vec<_> = events
            .iter()
            .filter(|event| self.month.contains(event.date()))
            .collect();
        found.sort_by_key(|event| event.date());
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn events() -> Vec<CalendarEvent> {
        vec![
            CalendarEvent::new(date(2025, 11, 9), EventKind::Exam, "Examen Matemáticas"),
            CalendarEvent::new(date(2025, 11, 23), EventKind::Holiday, "Revolución Mexicana"),
            CalendarEvent::new(date(2025, 12, 25), EventKind::Holiday, "Navidad"),
        ]
    }

    #[test]
    fn november_2025_layout() {
        let month = CalendarMonth::new(2025, 11).unwrap();
        let grid = MonthGrid::build(month, &events(), date(2025, 11, 18));
        assert_eq!(grid.leading_blanks, 5);
        assert_eq!(grid.days.len(), 30);
        assert_eq!(grid.days[8].marker, Some(DayMarker::Exam));
        assert_eq!(grid.days[8].label.as_deref(), Some("Examen Matemáticas"));
        assert_eq!(grid.days[17].marker, Some(DayMarker::Today));
        assert_eq!(grid.days[0].marker, None);
    }

    #[test]
    fn event_wins_over_today() {
        let month = CalendarMonth::new(2025, 11).unwrap();
        let grid = MonthGrid::build(month, &events(), date(2025, 11, 9));
        assert_eq!(grid.days[8].marker, Some(DayMarker::Exam));
        assert!(grid.days.iter().all(|cell| cell.marker != Some(DayMarker::Today)));
    }

    #[test]
    fn month_navigation_wraps_years() {
        let january = CalendarMonth::new(2026, 1).unwrap();
        let december = january.previous();
        assert_eq!((december.year(), december.month()), (2025, 12));
        assert_eq!(december.next(), january);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(CalendarMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(CalendarMonth::new(2025, 2).unwrap().days_in_month(), 28);
        assert_eq!(CalendarMonth::new(2025, 12).unwrap().days_in_month(), 31);
    }

    #[test]
    fn monday_first_blanks() {
        assert_eq!(CalendarMonth::new(2025, 12).unwrap().leading_blanks(), 0);
        assert_eq!(CalendarMonth::new(2026, 2).unwrap().leading_blanks(), 6);
    }

    #[test]
    fn containing_snaps_to_first_day() {
        let month = CalendarMonth::containing(date(2025, 11, 18));
        assert_eq!(month.first_day(), date(2025, 11, 1));
        assert_eq!(month.name(), "November");
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(CalendarMonth::new(2025, 13).is_none());
        assert!(CalendarMonth::new(2025, 0).is_none());
    }

    #[test]
    fn events_in_month_filters_and_sorts() {
        let all = events();
        let grid = MonthGrid::build(CalendarMonth::new(2025, 11).unwrap(), &all, date(2025, 11, 18));
        let labels: Vec<_> = grid.events_in_month(&all).iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["Examen Matemáticas", "Revolución Mexicana"]);
    }

    #[test]
    fn event_kind_uses_lowercase_names() {
        let kind: EventKind = serde_json::from_str("\"holiday\"").unwrap();
        assert_eq!(kind, EventKind::Holiday);
        assert_eq!(DayMarker::from(kind).as_str(), "holiday");
    }
}
