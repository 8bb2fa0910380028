use portal_core::calendar::{CalendarEvent, DayMarker, MonthGrid, WEEKDAY_INITIALS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CalendarCellVm {
    Blank,
    Day {
        day: u32,
        class: String,
        title: Option<String>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarEventVm {
    pub date_label: String,
    pub class: &'static str,
    pub label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarLegendVm {
    pub class: &'static str,
    pub label: &'static str,
}

pub const LEGEND: [CalendarLegendVm; 4] = [
    CalendarLegendVm {
        class: "exam",
        label: "Exam",
    },
    CalendarLegendVm {
        class: "holiday",
        label: "Holiday",
    },
    CalendarLegendVm {
        class: "event",
        label: "Event",
    },
    CalendarLegendVm {
        class: "today",
        label: "Today",
    },
];

fn day_class(marker: Option<DayMarker>) -> String {
    match marker {
        Some(marker) => format!("calendar-day {}", marker.as_str()),
        None => "calendar-day".to_owned(),
    }
}

/// One rendered month: heading, weekday row, cells and the month's events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarVm {
    pub title: String,
    pub weekdays: [&'static str; 7],
    pub cells: Vec<CalendarCellVm>,
    pub events: Vec<CalendarEventVm>,
}

impl CalendarVm {
    #[must_use]
    pub fn new(grid: &MonthGrid, events: &[CalendarEvent]) -> Self {
        let blanks = (0..grid.leading_blanks).map(|_| CalendarCellVm::Blank);
        let days = grid.days.iter().map(|cell| CalendarCellVm::Day {
            day: cell.day,
            class: day_class(cell.marker),
            title: cell.label.clone(),
        });

        Self {
            title: format!("{} {}", grid.month.name(), grid.month.year()),
            weekdays: WEEKDAY_INITIALS,
            cells: blanks.chain(days).collect(),
            events: grid
                .events_in_month(events)
                .into_iter()
                .map(|event| CalendarEventVm {
                    date_label: event.date().format("%-d %b").to_string(),
                    class: DayMarker::from(event.kind()).as_str(),
                    label: event.label().to_owned(),
                })
                .collect(),
        }
    }
}
