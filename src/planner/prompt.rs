use crate::domain::{Category, PlanInput, Task, Weekday};
use crate::report::stats::{calculate_week_stats, TaskStatus};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Value};

/// Prompt asking for a Monday-to-Sunday plan built from `input`
pub fn plan_prompt(input: &PlanInput, today: NaiveDate) -> Result<String, serde_json::Error> {
    let data = serde_json::to_string_pretty(input)?;

    Ok(format!(
        "Role: You are an intelligent weekly planning assistant.
Task: Generate a weekly schedule (Monday to Sunday) based on the user's inputs.
Current Date: {today}.

Inputs:
1. Fixed Events (Classes): Must happen at the specified day and time. Period must be 'Fixed'.
2. Routines: Distribute these across the week based on frequency per week.
3. Homework: Schedule before the deadline. Distribute 'sessionsNeeded' across available slots.
4. Projects: Schedule before the deadline. Distribute 'sessionsNeeded'.

Data:
{data}

Rules:
- 'Fixed' events must keep their exact time in the 'specificTime' field (e.g. \"10:00-11:30\").
- Non-fixed tasks get a 'period' of 'Morning', 'Afternoon' or 'Evening' and no 'specificTime'.
- Keep a reasonable workload per day.
- Return a flat array of task objects with a unique id for every task instance.
- Keep 'originalName' and 'note' in the same language as the input.
",
        today = today.format("%a %b %d %Y"),
        data = data,
    ))
}

/// Response schema constraining the planner's JSON output
pub fn plan_schema() -> Value {
    let categories: Vec<&str> = [
        Category::Fixed,
        Category::Routine,
        Category::Homework,
        Category::Project,
    ]
    .iter()
    .map(|c| c.name())
    .collect();
    let days: Vec<&str> = Weekday::ALL.iter().map(|d| d.name()).collect();

    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "originalName": { "type": "STRING" },
                "type": { "type": "STRING", "enum": categories },
                "day": { "type": "STRING", "enum": days },
                "period": {
                    "type": "STRING",
                    "enum": ["Morning", "Afternoon", "Evening", "Fixed"]
                },
                "specificTime": { "type": "STRING" },
                "durationDisplay": { "type": "STRING" },
                "note": { "type": "STRING" }
            },
            "required": ["id", "originalName", "type", "day", "period"]
        }
    })
}

#[derive(Serialize)]
struct LogEntry<'a> {
    name: &'a str,
    day: Weekday,
    status: String,
}

/// Prompt asking for a coach-style review of the week
pub fn summary_prompt(tasks: &[Task]) -> Result<String, serde_json::Error> {
    let stats = calculate_week_stats(tasks);
    let log: Vec<LogEntry> = tasks
        .iter()
        .map(|t| LogEntry {
            name: &t.original_name,
            day: t.day,
            status: TaskStatus::of(t).to_string(),
        })
        .collect();
    let log = serde_json::to_string_pretty(&log)?;

    Ok(format!(
        "Role: You are a sharp, empathetic and data-driven productivity coach.
Task: Write a weekly performance review based on the user's schedule data.
Language: the same language as the task names.
Tone: natural and direct. No generic pleasantries.

Guidelines:
- If the completion rate is high (>80%), praise what went well.
- If the completion rate is low (<50%), be critical but constructive and ask the user to reflect on why.
- If many tasks were replaced, ask whether this is procrastination or flexible adaptation.
- Use Markdown for formatting.

Stats:
- Total Tasks: {total}
- Completed: {completed} (Rate: {rate}%)
- Replaced (Alternative Activity): {replaced}
- Postponed: {postponed}

Detailed Task Log:
{log}

Required Structure (Markdown headers):
1. **Data Insights**: interpret the numbers. What does {rate}% say about the week?
2. **Deep Dive**: analyze specific days or patterns.
3. **Action Plan**: 2-3 specific, actionable suggestions for next week.
",
        total = stats.total,
        completed = stats.completed,
        rate = stats.completion_rate,
        replaced = stats.replaced,
        postponed = stats.postponed,
        log = log,
    ))
}
