pub mod enums;
pub mod task;
pub mod timer;

pub use enums::{PickerField, RunState, Screen, UiMode};
pub use task::{TaskList, TaskRecord};
pub use timer::{DurationPicker, TickOutcome, TimerEngine};
