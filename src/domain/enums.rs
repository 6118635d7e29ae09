use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the planning week (Monday first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Zero-based position in the week (Monday = 0)
    pub fn index(&self) -> usize {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }

    /// The following day, wrapping Sunday back to Monday
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % 7]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Three-letter label for the week navigator
    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }

    /// Parse a day name, case-insensitive, full or three-letter form
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|day| {
            let full = day.name().to_lowercase();
            lower == full || lower == full[..3]
        })
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Self::ALL[day.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Provenance of a task, fixed when the planner creates it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fixed,
    Routine,
    Homework,
    Project,
    Substitute,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Fixed => "fixed",
            Category::Routine => "routine",
            Category::Homework => "homework",
            Category::Project => "project",
            Category::Substitute => "substitute",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Category::Fixed,
            Category::Routine,
            Category::Homework,
            Category::Project,
            Category::Substitute,
        ]
    }
}

/// Coarse time slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    Morning,
    Afternoon,
    Evening,
    /// Reserved for tasks that carry an exact time range
    Fixed,
}

impl Period {
    pub fn name(&self) -> &'static str {
        match self {
            Period::Morning => "Morning",
            Period::Afternoon => "Afternoon",
            Period::Evening => "Evening",
            Period::Fixed => "Fixed",
        }
    }
}

/// Where a postponed task goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostponeTarget {
    /// End of the same day's list
    LaterToday,
    /// Following weekday
    NextDay,
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    EditingTask,
    Substituting,
    ChoosingPostpone,
    ConfirmDelete,
    ConfirmRegenerate,
    Planning, // Shown while the planner call is in flight
}
