use crate::domain::Weekday;
use chrono::{Datelike, Duration, Local, NaiveDate};

/// The calendar date currently selected on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekCursor {
    date: NaiveDate,
}

impl WeekCursor {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: within_calendar(date),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday().into()
    }

    /// Move by `days` (negative moves back). Dates outside chrono's range are ignored.
    pub fn shift(&mut self, days: i64) {
        if let Some(date) = self.date.checked_add_signed(Duration::days(days)) {
            self.date = within_calendar(date);
        }
    }

    pub fn jump_to(&mut self, date: NaiveDate) {
        self.date = within_calendar(date);
    }

    /// Monday-start week containing the selected date
    pub fn week(&self) -> [NaiveDate; 7] {
        let offset = self.date.weekday().num_days_from_monday() as i64;
        let monday = self.date - Duration::days(offset);
        let mut days = [monday; 7];
        for (i, day) in days.iter_mut().enumerate() {
            *day = monday + Duration::days(i as i64);
        }
        days
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}

/// Keep the date six days clear of chrono's limits so its whole week exists
fn within_calendar(date: NaiveDate) -> NaiveDate {
    let first = NaiveDate::MIN + Duration::days(6);
    let last = NaiveDate::MAX - Duration::days(6);
    date.clamp(first, last)
}

/// Whether `date` is the local current date
pub fn is_today(date: NaiveDate) -> bool {
    date == Local::now().date_naive()
}
