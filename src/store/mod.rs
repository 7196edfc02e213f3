pub mod activities;
pub mod board;

pub use activities::{ActivityStore, NewTaskForm, date_key};
pub use board::{BoardForm, BoardStore};
