use crate::domain::{partition_ids, PostponeTarget, Task, TaskId, UiMode, Weekday};
use crate::error::PlannerError;
use crate::schedule::{Mutation, ScheduleStore, WeekCursor};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::path::Path;
use tracing::{info, warn};

/// Text entry state for the edit and substitute forms
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub task_id: TaskId,
    /// Task name when editing, substitute activity when substituting
    pub name: String,
    pub note: String,
    pub editing_field: usize, // 0 = name, 1 = note
}

/// Main application state
pub struct AppState {
    pub store: ScheduleStore,
    pub cursor: WeekCursor,
    /// Position within the selected day's tasks
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    /// Task awaiting a postpone choice or delete confirmation
    pub pending_task: Option<TaskId>,
    pub status: Option<String>,
    pub show_summary: bool,
    pub use_emoji: bool,
    pub needs_save: bool,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, today: NaiveDate, use_emoji: bool) -> Self {
        Self {
            store: ScheduleStore::new(tasks),
            cursor: WeekCursor::new(today),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            pending_task: None,
            status: None,
            show_summary: false,
            use_emoji,
            needs_save: false,
        }
    }

    pub fn selected_day(&self) -> Weekday {
        self.cursor.weekday()
    }

    /// Tasks on the board for the selected day
    pub fn day_tasks(&self) -> Vec<&Task> {
        self.store.for_day(self.selected_day())
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.day_tasks().get(self.selected_index).copied()
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id.clone())
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Keep the selection inside the current day's list
    fn clamp_selection(&mut self) {
        let len = self.day_tasks().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    fn select_task(&mut self, id: &TaskId) {
        let ids = partition_ids(self.store.all(), self.selected_day());
        if let Some(pos) = ids.iter().position(|other| other == id) {
            self.selected_index = pos;
        }
    }

    /// Run a mutation through the store. Errors leave the store as it was.
    fn apply(&mut self, mutation: Mutation) -> bool {
        match self.store.apply(&mutation) {
            Ok(()) => {
                self.needs_save = true;
                self.clamp_selection();
                true
            }
            Err(e) => {
                warn!(error = %e, "mutation rejected");
                self.set_status(e.to_string());
                false
            }
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.day_tasks().len() {
            self.selected_index += 1;
        }
    }

    /// Move selected task up within its day
    pub fn move_task_up(&mut self) {
        if self.selected_index == 0 || self.selected_task().is_none() {
            return;
        }
        let from = self.selected_index;
        if self.apply(Mutation::Reorder {
            day: self.selected_day(),
            from,
            to: from - 1,
        }) {
            self.selected_index = from - 1;
        }
    }

    /// Move selected task down within its day
    pub fn move_task_down(&mut self) {
        let from = self.selected_index;
        if from + 1 >= self.day_tasks().len() {
            return;
        }
        if self.apply(Mutation::Reorder {
            day: self.selected_day(),
            from,
            to: from + 1,
        }) {
            self.selected_index = from + 1;
        }
    }

    pub fn next_day(&mut self) {
        self.shift_days(1);
    }

    pub fn previous_day(&mut self) {
        self.shift_days(-1);
    }

    pub fn next_week(&mut self) {
        self.shift_days(7);
    }

    pub fn previous_week(&mut self) {
        self.shift_days(-7);
    }

    fn shift_days(&mut self, days: i64) {
        self.cursor.shift(days);
        self.selected_index = 0;
    }

    pub fn go_to_today(&mut self) {
        self.cursor.jump_to(Local::now().date_naive());
        self.selected_index = 0;
    }

    pub fn toggle_complete(&mut self) {
        if let Some(id) = self.selected_id() {
            self.apply(Mutation::ToggleComplete(id));
        }
    }

    /// Open the edit form prefilled with the selected task
    pub fn start_edit(&mut self) {
        if let Some(task) = self.selected_task() {
            self.input_form = Some(InputFormState {
                task_id: task.id.clone(),
                name: task.original_name.clone(),
                note: task.note.clone(),
                editing_field: 0,
            });
            self.ui_mode = UiMode::EditingTask;
        }
    }

    /// Open the substitute form. Completed tasks can't be substituted.
    pub fn start_substitute(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        if task.is_completed {
            self.set_status("Completed tasks can't be substituted");
            return;
        }
        self.input_form = Some(InputFormState {
            task_id: task.id.clone(),
            name: task.replaced_with.clone().unwrap_or_default(),
            note: String::new(),
            editing_field: 0,
        });
        self.ui_mode = UiMode::Substituting;
    }

    /// Toggle between name and note (edit form only)
    pub fn input_form_toggle_field(&mut self) {
        if self.ui_mode != UiMode::EditingTask {
            return;
        }
        if let Some(form) = &mut self.input_form {
            form.editing_field = (form.editing_field + 1) % 2;
        }
    }

    /// Add character to input form (current field)
    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => form.name.push(c),
                _ => form.note.push(c),
            }
        }
    }

    /// Backspace in input form (current field)
    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => form.name.pop(),
                _ => form.note.pop(),
            };
        }
    }

    pub fn submit_input_form(&mut self) {
        if let Some(form) = self.input_form.take() {
            match self.ui_mode {
                UiMode::EditingTask => {
                    self.apply(Mutation::Edit {
                        id: form.task_id,
                        name: form.name,
                        note: form.note,
                    });
                }
                UiMode::Substituting => {
                    self.apply(Mutation::Substitute {
                        id: form.task_id,
                        reason: form.name,
                    });
                }
                _ => {}
            }
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Ask where to postpone the selected task
    pub fn request_postpone(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        if task.is_completed {
            self.set_status("Completed tasks can't be postponed");
            return;
        }
        self.pending_task = Some(task.id.clone());
        self.ui_mode = UiMode::ChoosingPostpone;
    }

    pub fn choose_postpone(&mut self, target: PostponeTarget) {
        if let Some(id) = self.pending_task.take() {
            if self.apply(Mutation::Postpone {
                id: id.clone(),
                target,
            }) && target == PostponeTarget::LaterToday
            {
                self.select_task(&id);
            }
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn request_delete(&mut self) {
        if let Some(id) = self.selected_id() {
            self.pending_task = Some(id);
            self.ui_mode = UiMode::ConfirmDelete;
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.pending_task.take() {
            self.apply(Mutation::Delete(id));
        }
        self.ui_mode = UiMode::Normal;
    }

    /// Dismiss any confirmation modal without changing the plan
    pub fn cancel_modal(&mut self) {
        self.pending_task = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn undo(&mut self) {
        if !self.store.can_undo() {
            self.set_status("Nothing to undo");
            return;
        }
        self.store.undo();
        self.needs_save = true;
        self.clamp_selection();
        self.set_status("Undone");
    }

    /// An empty board has nothing to lose, so it skips the confirmation
    pub fn request_regenerate(&mut self) {
        if self.store.is_empty() {
            self.confirm_regenerate();
        } else {
            self.ui_mode = UiMode::ConfirmRegenerate;
        }
    }

    /// Switch to the planning overlay; the event loop makes the call
    pub fn confirm_regenerate(&mut self) {
        self.ui_mode = UiMode::Planning;
        self.set_status("Planning...");
    }

    /// Install a planner result. A failure leaves the current plan in place.
    pub fn apply_generated(&mut self, result: Result<Vec<Task>, PlannerError>) {
        match result {
            Ok(tasks) => {
                info!(tasks = tasks.len(), "installed generated plan");
                let count = tasks.len();
                self.store.load_plan(tasks);
                self.selected_index = 0;
                self.needs_save = true;
                self.set_status(format!("Generated {} tasks", count));
            }
            Err(e) => {
                warn!(error = %e, "plan generation failed");
                self.set_status(e.user_message());
            }
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn toggle_summary(&mut self) {
        self.show_summary = !self.show_summary;
    }

    /// Write the selected day to a text snapshot
    pub fn export_day(&mut self) {
        let date = self.cursor.date();
        let result = crate::persistence::ensure_data_dir().and_then(|dir| {
            crate::export::export_day(self.store.all(), date, &dir)
        });
        match result {
            Ok(path) => self.set_status(format!("Exported {}", path.display())),
            Err(e) => self.set_status(format!("Export failed: {}", e)),
        }
    }

    /// Save the plan to disk
    pub fn save(&mut self, path: &Path) -> Result<()> {
        crate::persistence::save_plan(path, self.store.all())?;
        self.needs_save = false;
        Ok(())
    }
}
