pub mod cursor;
pub mod ops;
pub mod store;

pub use cursor::{is_today, WeekCursor};
pub use ops::Mutation;
pub use store::ScheduleStore;
