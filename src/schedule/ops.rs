//! Pure mutations over the full task sequence.
//!
//! Every function takes the current sequence and returns the next one; the
//! input is never modified. Unknown ids leave the sequence unchanged.

use crate::domain::{PostponeTarget, Task, TaskId, Weekday};
use crate::error::ScheduleError;

/// Marker appended to the note when a task moves to the end of its day
pub const POSTPONED_MARKER: &str = "[Postponed]";

/// One user action on the schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    ToggleComplete(TaskId),
    Reorder { day: Weekday, from: usize, to: usize },
    Substitute { id: TaskId, reason: String },
    Postpone { id: TaskId, target: PostponeTarget },
    Edit { id: TaskId, name: String, note: String },
    Delete(TaskId),
}

impl Mutation {
    /// Compute the sequence that results from this action
    pub fn apply(&self, tasks: &[Task]) -> Result<Vec<Task>, ScheduleError> {
        match self {
            Mutation::ToggleComplete(id) => Ok(toggle_complete(tasks, id)),
            Mutation::Reorder { day, from, to } => reorder(tasks, *day, *from, *to),
            Mutation::Substitute { id, reason } => Ok(substitute(tasks, id, reason)),
            Mutation::Postpone { id, target } => Ok(postpone(tasks, id, *target)),
            Mutation::Edit { id, name, note } => Ok(edit(tasks, id, name, note)),
            Mutation::Delete(id) => Ok(delete(tasks, id)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mutation::ToggleComplete(_) => "toggle_complete",
            Mutation::Reorder { .. } => "reorder",
            Mutation::Substitute { .. } => "substitute",
            Mutation::Postpone { .. } => "postpone",
            Mutation::Edit { .. } => "edit",
            Mutation::Delete(_) => "delete",
        }
    }
}

/// Clone the sequence and apply `change` to the task with `id`
fn update_task(tasks: &[Task], id: &TaskId, change: impl FnOnce(&mut Task)) -> Vec<Task> {
    let mut next = tasks.to_vec();
    if let Some(task) = next.iter_mut().find(|t| &t.id == id) {
        change(task);
    }
    next
}

pub fn toggle_complete(tasks: &[Task], id: &TaskId) -> Vec<Task> {
    update_task(tasks, id, |task| task.is_completed = !task.is_completed)
}

/// Move a task within one day's list. Other days keep their positions.
pub fn reorder(
    tasks: &[Task],
    day: Weekday,
    from: usize,
    to: usize,
) -> Result<Vec<Task>, ScheduleError> {
    let slots: Vec<usize> = tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| t.day == day)
        .map(|(i, _)| i)
        .collect();

    if from >= slots.len() || to >= slots.len() {
        return Err(ScheduleError::IndexOutOfRange {
            day,
            from,
            to,
            len: slots.len(),
        });
    }

    let mut day_tasks: Vec<Task> = slots.iter().map(|&i| tasks[i].clone()).collect();
    let moved = day_tasks.remove(from);
    day_tasks.insert(to, moved);

    // Write the reordered day back into the slots that day already occupied
    let mut next = tasks.to_vec();
    for (slot, task) in slots.into_iter().zip(day_tasks) {
        next[slot] = task;
    }
    Ok(next)
}

/// Record a substitute activity; a blank reason clears the substitution
pub fn substitute(tasks: &[Task], id: &TaskId, reason: &str) -> Vec<Task> {
    update_task(tasks, id, |task| {
        if reason.trim().is_empty() {
            task.is_replaced = false;
            task.replaced_with = None;
        } else {
            task.is_replaced = true;
            task.replaced_with = Some(reason.to_string());
        }
    })
}

pub fn postpone(tasks: &[Task], id: &TaskId, target: PostponeTarget) -> Vec<Task> {
    match target {
        PostponeTarget::LaterToday => {
            let Some(pos) = tasks.iter().position(|t| &t.id == id) else {
                return tasks.to_vec();
            };
            let mut next = tasks.to_vec();
            let mut task = next.remove(pos);
            task.is_postponed = true;
            task.append_note(POSTPONED_MARKER);
            // The end of the full sequence is also the end of this task's day
            next.push(task);
            next
        }
        PostponeTarget::NextDay => update_task(tasks, id, |task| {
            let origin = task.day;
            task.day = origin.next();
            task.is_postponed = true;
            task.append_note(&format!("[Postponed from {}]", origin));
        }),
    }
}

/// Overwrite name and note verbatim
pub fn edit(tasks: &[Task], id: &TaskId, name: &str, note: &str) -> Vec<Task> {
    update_task(tasks, id, |task| {
        task.original_name = name.to_string();
        task.note = note.to_string();
    })
}

pub fn delete(tasks: &[Task], id: &TaskId) -> Vec<Task> {
    tasks.iter().filter(|t| &t.id != id).cloned().collect()
}
