use tracing::trace;

use crate::board::TaskBoard;
use crate::filter::Filter;
use crate::task::TaskId;

/// User input a host delivers to the
/// board: text edits, the submit key,
/// and taps on rows, footer or filter
/// selector.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum BoardEvent {
  DraftChanged(String),
  DraftSubmitted,
  ToggleTask(TaskId),
  DeleteTask(TaskId),
  ClearCompleted,
  SetFilter(Filter)
}

impl TaskBoard {
  /// Applies `event` in place and
  /// reports whether anything changed.
  pub fn dispatch(
    &mut self,
    event: BoardEvent
  ) -> bool {
    trace!(?event, "dispatching board event");

    match event {
      | BoardEvent::DraftChanged(
        text
      ) => {
        if self.draft() == text {
          return false;
        }
        self.set_draft(text);
        true
      }
      | BoardEvent::DraftSubmitted => {
        self.submit_draft().is_some()
      }
      | BoardEvent::ToggleTask(id) => {
        self.toggle_task(id)
      }
      | BoardEvent::DeleteTask(id) => {
        self.delete_task(id)
      }
      | BoardEvent::ClearCompleted => {
        self.clear_completed() > 0
      }
      | BoardEvent::SetFilter(
        filter
      ) => {
        if self.filter() == filter {
          return false;
        }
        self.set_filter(filter);
        true
      }
    }
  }

  /// The snapshot that follows `self`
  /// once `event` is applied.
  pub fn reduce(
    &self,
    event: BoardEvent
  ) -> TaskBoard {
    let mut next = self.clone();
    next.dispatch(event);
    next
  }
}
