use super::ops::Mutation;
use crate::domain::{day_partition, Task, TaskId, Weekday};
use crate::error::ScheduleError;
use tracing::debug;

/// How many previous sequences are kept for undo
const MAX_HISTORY: usize = 10;

/// The single canonical holder of the task sequence.
///
/// Mutations change the sequence only through [`ScheduleStore::replace_all`],
/// which keeps the previous sequence so a change can be undone. `load_plan`
/// and `undo` are the two other writers, and neither records history.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    tasks: Vec<Task>,
    history: Vec<Vec<Task>>,
}

impl ScheduleStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            history: Vec::new(),
        }
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn for_day(&self, day: Weekday) -> Vec<&Task> {
        day_partition(&self.tasks, day)
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Swap in a whole new sequence, remembering the old one
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        let previous = std::mem::replace(&mut self.tasks, tasks);
        self.history.push(previous);
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
    }

    /// Compute the next sequence for `mutation` and install it.
    /// On error the store is left as it was.
    pub fn apply(&mut self, mutation: &Mutation) -> Result<(), ScheduleError> {
        let next = mutation.apply(&self.tasks)?;
        debug!(
            mutation = mutation.name(),
            before = self.tasks.len(),
            after = next.len(),
            "applied mutation"
        );
        self.replace_all(next);
        Ok(())
    }

    /// Install a freshly generated plan. Prior history is discarded.
    pub fn load_plan(&mut self, tasks: Vec<Task>) {
        // Bypasses replace_all: a new plan starts with empty history
        self.tasks = tasks;
        self.history.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Restore the previous sequence. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                // Bypasses replace_all so undo does not push onto the history it pops
                self.tasks = previous;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Period, PostponeTarget};
    use pretty_assertions::assert_eq;

    fn task(id: &str, day: Weekday) -> Task {
        Task::new(id, Category::Homework, day, Period::Evening).with_id(id)
    }

    fn create_test_store() -> ScheduleStore {
        ScheduleStore::new(vec![
            task("a", Weekday::Monday),
            task("b", Weekday::Tuesday),
            task("c", Weekday::Monday),
        ])
    }

    #[test]
    fn test_for_day_keeps_store_order() {
        let store = create_test_store();
        let monday: Vec<&str> = store.for_day(Weekday::Monday).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(monday, vec!["a", "c"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_apply_and_undo() {
        let mut store = create_test_store();
        let original = store.all().to_vec();

        store.apply(&Mutation::Delete("b".into())).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.can_undo());

        assert!(store.undo());
        assert_eq!(store.all(), original.as_slice());
        assert!(!store.undo());
    }

    #[test]
    fn test_failed_apply_leaves_store_untouched() {
        let mut store = create_test_store();
        let original = store.all().to_vec();

        let result = store.apply(&Mutation::Reorder {
            day: Weekday::Monday,
            from: 0,
            to: 9,
        });
        assert!(result.is_err());
        assert_eq!(store.all(), original.as_slice());
        assert!(!store.can_undo());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut store = create_test_store();
        for _ in 0..(MAX_HISTORY + 5) {
            store.apply(&Mutation::ToggleComplete("a".into())).unwrap();
        }
        let mut undone = 0;
        while store.undo() {
            undone += 1;
        }
        assert_eq!(undone, MAX_HISTORY);
    }

    #[test]
    fn test_load_plan_clears_history() {
        let mut store = create_test_store();
        store
            .apply(&Mutation::Postpone {
                id: "a".into(),
                target: PostponeTarget::NextDay,
            })
            .unwrap();
        store.load_plan(vec![task("z", Weekday::Friday)]);
        assert!(!store.can_undo());
        assert_eq!(store.get(&"z".into()).map(|t| t.day), Some(Weekday::Friday));
        assert!(store.get(&"a".into()).is_none());
    }
}
