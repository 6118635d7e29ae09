use super::enums::Weekday;
use crate::error::InputError;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn short_id() -> String {
    Uuid::new_v4().simple().to_string()[..9].to_string()
}

/// A class or appointment that happens at a set time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedEvent {
    pub id: String,
    pub name: String,
    pub day: Weekday,
    /// HH:MM
    pub start_time: String,
    /// HH:MM
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Something repeated a number of times per week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    pub id: String,
    pub name: String,
    pub frequency_per_week: u8,
    pub duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Work that needs a number of sessions before a deadline (homework and projects)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineItem {
    pub id: String,
    pub name: String,
    pub sessions_needed: u32,
    pub deadline: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Everything the planner needs to lay out a week
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInput {
    #[serde(default)]
    pub fixed_events: Vec<FixedEvent>,
    #[serde(default)]
    pub routines: Vec<Routine>,
    #[serde(default)]
    pub homework: Vec<DeadlineItem>,
    #[serde(default)]
    pub projects: Vec<DeadlineItem>,
}

fn clean_note(note: Option<String>) -> Option<String> {
    note.filter(|n| !n.trim().is_empty())
}

fn require_name(name: &str) -> Result<String, InputError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }
    Ok(name.to_string())
}

fn parse_clock(value: &str) -> Result<NaiveTime, InputError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| InputError::InvalidTime(value.to_string()))
}

impl PlanInput {
    pub fn total_items(&self) -> usize {
        self.fixed_events.len() + self.routines.len() + self.homework.len() + self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }

    pub fn add_fixed_event(
        &mut self,
        name: &str,
        day: Weekday,
        start: &str,
        end: &str,
        note: Option<String>,
    ) -> Result<&FixedEvent, InputError> {
        let name = require_name(name)?;
        let start_time = parse_clock(start)?;
        let end_time = parse_clock(end)?;
        if start_time >= end_time {
            return Err(InputError::EndBeforeStart {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        self.fixed_events.push(FixedEvent {
            id: short_id(),
            name,
            day,
            start_time: start_time.format("%H:%M").to_string(),
            end_time: end_time.format("%H:%M").to_string(),
            note: clean_note(note),
        });
        Ok(&self.fixed_events[self.fixed_events.len() - 1])
    }

    pub fn add_routine(
        &mut self,
        name: &str,
        frequency_per_week: u8,
        duration_minutes: u32,
        note: Option<String>,
    ) -> Result<&Routine, InputError> {
        let name = require_name(name)?;
        if !(1..=7).contains(&frequency_per_week) {
            return Err(InputError::FrequencyOutOfRange(frequency_per_week));
        }
        if duration_minutes == 0 {
            return Err(InputError::ZeroDuration);
        }

        self.routines.push(Routine {
            id: short_id(),
            name,
            frequency_per_week,
            duration_minutes,
            note: clean_note(note),
        });
        Ok(&self.routines[self.routines.len() - 1])
    }

    pub fn add_homework(
        &mut self,
        name: &str,
        sessions_needed: u32,
        deadline: NaiveDate,
        note: Option<String>,
    ) -> Result<&DeadlineItem, InputError> {
        let item = deadline_item(name, sessions_needed, deadline, note)?;
        self.homework.push(item);
        Ok(&self.homework[self.homework.len() - 1])
    }

    pub fn add_project(
        &mut self,
        name: &str,
        sessions_needed: u32,
        deadline: NaiveDate,
        note: Option<String>,
    ) -> Result<&DeadlineItem, InputError> {
        let item = deadline_item(name, sessions_needed, deadline, note)?;
        self.projects.push(item);
        Ok(&self.projects[self.projects.len() - 1])
    }

    /// Remove an item from whichever list holds it. Returns false if no item has that id.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.total_items();
        self.fixed_events.retain(|e| e.id != id);
        self.routines.retain(|r| r.id != id);
        self.homework.retain(|h| h.id != id);
        self.projects.retain(|p| p.id != id);
        self.total_items() != before
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn deadline_item(
    name: &str,
    sessions_needed: u32,
    deadline: NaiveDate,
    note: Option<String>,
) -> Result<DeadlineItem, InputError> {
    let name = require_name(name)?;
    if sessions_needed == 0 {
        return Err(InputError::ZeroSessions);
    }
    Ok(DeadlineItem {
        id: short_id(),
        name,
        sessions_needed,
        deadline,
        note: clean_note(note),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_fixed_event() {
        let mut input = PlanInput::default();
        let event = input
            .add_fixed_event("Math Class", Weekday::Monday, "9:00", "10:30", None)
            .unwrap();
        assert_eq!(event.start_time, "09:00");
        assert_eq!(event.end_time, "10:30");
        assert_eq!(input.total_items(), 1);
    }

    #[test]
    fn test_fixed_event_rejects_inverted_range() {
        let mut input = PlanInput::default();
        let result = input.add_fixed_event("Lab", Weekday::Tuesday, "14:00", "13:00", None);
        assert!(matches!(result, Err(InputError::EndBeforeStart { .. })));
        assert!(input.is_empty());
    }

    #[test]
    fn test_rejects_blank_name_and_bad_time() {
        let mut input = PlanInput::default();
        assert!(matches!(
            input.add_routine("  ", 3, 30, None),
            Err(InputError::EmptyName)
        ));
        assert!(matches!(
            input.add_fixed_event("Lab", Weekday::Tuesday, "noon", "13:00", None),
            Err(InputError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_routine_frequency_bounds() {
        let mut input = PlanInput::default();
        assert!(input.add_routine("Run", 7, 30, None).is_ok());
        assert!(matches!(
            input.add_routine("Run", 8, 30, None),
            Err(InputError::FrequencyOutOfRange(8))
        ));
        assert!(matches!(
            input.add_routine("Run", 0, 30, None),
            Err(InputError::FrequencyOutOfRange(0))
        ));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut input = PlanInput::default();
        let deadline = NaiveDate::from_ymd_opt(2026, 10, 23).unwrap();
        let id = input.add_homework("Physics", 2, deadline, Some("Ch 1-3".into())).unwrap().id.clone();
        input.add_project("Robot", 4, deadline, Some("   ".into())).unwrap();
        assert_eq!(input.projects[0].note, None);

        assert!(input.remove(&id));
        assert!(!input.remove(&id));
        assert_eq!(input.total_items(), 1);

        input.clear();
        assert!(input.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let mut input = PlanInput::default();
        input.add_routine("Vocabulary", 7, 20, None).unwrap();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"frequencyPerWeek\":7"));
        assert!(json.contains("\"fixedEvents\":[]"));
    }
}
