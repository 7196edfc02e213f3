pub mod activity;
pub mod board;

pub use activity::{ActivityTask, SortCriteria, SortOrder, TAG_LEVELS, TaskStatus, tag_label};
pub use board::{BoardTask, Priority};
