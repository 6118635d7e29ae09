pub mod enums;
pub mod input;
pub mod task;
pub mod views;

pub use enums::{Category, Period, PostponeTarget, UiMode, Weekday};
pub use input::PlanInput;
pub use task::{validate_plan, Task, TaskId};
pub use views::{completion_glyph, day_partition, partition_ids, period_badge};
