pub mod board;
pub mod event;
pub mod filter;
pub mod task;
pub mod view;

pub use board::TaskBoard;
pub use event::BoardEvent;
pub use filter::{
  Filter,
  ParseFilterError
};
pub use task::{
  ParseTaskIdError,
  Task,
  TaskId
};
pub use view::{
  BoardView,
  ViewLabels
};
