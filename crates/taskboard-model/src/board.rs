use serde::Serialize;
use tracing::{
  debug,
  trace
};

use crate::filter::Filter;
use crate::task::{
  Task,
  TaskId,
  demo_tasks
};

/// State of one mounted to-do screen.
///
/// Every operation is total: an empty
/// draft or an id that is not on the
/// board leaves the state untouched
/// instead of failing.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
)]
pub struct TaskBoard {
  tasks:   Vec<Task>,
  draft:   String,
  filter:  Filter,
  next_id: Option<TaskId>
}

impl Default for TaskBoard {
  fn default() -> Self {
    Self::with_demo_tasks()
  }
}

impl TaskBoard {
  pub fn empty() -> Self {
    Self::with_tasks(Vec::new())
  }

  pub fn with_demo_tasks() -> Self {
    Self::with_tasks(demo_tasks())
  }

  /// Builds a board from `tasks`,
  /// dropping later duplicates of an
  /// id so ids stay unique.
  pub fn with_tasks(
    tasks: Vec<Task>
  ) -> Self {
    let mut unique: Vec<Task> =
      Vec::with_capacity(tasks.len());
    for task in tasks {
      if unique
        .iter()
        .any(|seen| seen.id == task.id)
      {
        debug!(id = %task.id, "dropping duplicate seed task");
        continue;
      }
      unique.push(task);
    }

    let next_id = unique
      .iter()
      .map(|task| task.id)
      .max()
      .map_or(Some(TaskId::new(1)), |max| {
        max.next()
      });

    Self {
      tasks: unique,
      draft: String::new(),
      filter: Filter::default(),
      next_id
    }
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn draft(&self) -> &str {
    &self.draft
  }

  pub fn filter(&self) -> Filter {
    self.filter
  }

  pub fn get(
    &self,
    id: TaskId
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| task.id == id)
  }

  pub fn set_draft(
    &mut self,
    text: impl Into<String>
  ) {
    self.draft = text.into();
    trace!(len = self.draft.len(), "draft changed");
  }

  /// Appends a task holding `text` as
  /// typed. Whitespace-only text is
  /// ignored and the draft is kept, as
  /// is any text once ids run out.
  #[tracing::instrument(skip(
    self, text
  ))]
  pub fn create_task(
    &mut self,
    text: &str
  ) -> Option<TaskId> {
    if text.trim().is_empty() {
      trace!(
        "ignoring blank task text"
      );
      return None;
    }

    let Some(id) = self.next_id else {
      debug!(
        "task ids exhausted, nothing created"
      );
      return None;
    };
    self.next_id = id.next();
    self
      .tasks
      .push(Task::new(id, text));
    self.draft.clear();

    debug!(%id, count = self.tasks.len(), "task created");
    Some(id)
  }

  pub fn submit_draft(
    &mut self
  ) -> Option<TaskId> {
    let text =
      std::mem::take(&mut self.draft);
    let created =
      self.create_task(&text);
    if created.is_none() {
      self.draft = text;
    }
    created
  }

  #[tracing::instrument(skip(self))]
  pub fn toggle_task(
    &mut self,
    id: TaskId
  ) -> bool {
    let Some(task) = self
      .tasks
      .iter_mut()
      .find(|task| task.id == id)
    else {
      trace!(%id, "toggle of unknown task ignored");
      return false;
    };

    task.completed = !task.completed;
    debug!(%id, completed = task.completed, "task toggled");
    true
  }

  #[tracing::instrument(skip(self))]
  pub fn delete_task(
    &mut self,
    id: TaskId
  ) -> bool {
    let before = self.tasks.len();
    self
      .tasks
      .retain(|task| task.id != id);
    let removed =
      before != self.tasks.len();

    if removed {
      debug!(%id, count = self.tasks.len(), "task deleted");
    } else {
      trace!(%id, "delete of unknown task ignored");
    }
    removed
  }

  #[tracing::instrument(skip(self))]
  pub fn clear_completed(
    &mut self
  ) -> usize {
    let before = self.tasks.len();
    self
      .tasks
      .retain(Task::is_active);
    let removed =
      before - self.tasks.len();

    debug!(removed, "cleared completed tasks");
    removed
  }

  pub fn set_filter(
    &mut self,
    filter: Filter
  ) {
    if self.filter != filter {
      debug!(from = %self.filter, to = %filter, "filter changed");
    }
    self.filter = filter;
  }

  /// Tasks the list shows under the
  /// current filter, in board order.
  pub fn visible_tasks(
    &self
  ) -> Vec<&Task> {
    self.tasks_matching(self.filter)
  }

  pub fn tasks_matching(
    &self,
    filter: Filter
  ) -> Vec<&Task> {
    self
      .tasks
      .iter()
      .filter(|task| {
        filter.matches(task)
      })
      .collect()
  }

  /// Active tasks across the whole
  /// board, whatever the filter.
  pub fn remaining_count(
    &self
  ) -> usize {
    self
      .tasks
      .iter()
      .filter(|task| task.is_active())
      .count()
  }

  pub fn completed_count(
    &self
  ) -> usize {
    self.tasks.len()
      - self.remaining_count()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ids(tasks: &[&Task]) -> Vec<u64> {
    tasks
      .iter()
      .map(|task| task.id.get())
      .collect()
  }

  fn assert_unique_ids(
    board: &TaskBoard
  ) {
    let mut seen: Vec<TaskId> = board
      .tasks()
      .iter()
      .map(|task| task.id)
      .collect();
    seen.sort();
    let before = seen.len();
    seen.dedup();
    assert_eq!(before, seen.len());
  }

  #[test]
  fn blank_text_creates_nothing() {
    let mut board =
      TaskBoard::with_demo_tasks();
    board.set_draft("   ");
    let before = board.clone();

    assert_eq!(
      board.create_task(""),
      None
    );
    assert_eq!(
      board.create_task("   "),
      None
    );
    assert_eq!(
      board.create_task("\t\n"),
      None
    );
    assert_eq!(board, before);
    assert_eq!(board.draft(), "   ");
  }

  #[test]
  fn create_appends_active_task_and_clears_draft()
   {
    let mut board =
      TaskBoard::with_demo_tasks();
    board.set_draft("Buy milk");

    let id = board
      .create_task("Buy milk")
      .unwrap();

    assert_eq!(board.tasks().len(), 7);
    let last =
      board.tasks().last().unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.text, "Buy milk");
    assert!(!last.completed);
    assert_eq!(board.draft(), "");
  }

  #[test]
  fn created_text_is_kept_untrimmed() {
    let mut board = TaskBoard::empty();
    let id = board
      .create_task("  padded  ")
      .unwrap();
    assert_eq!(
      board.get(id).unwrap().text,
      "  padded  "
    );
  }

  #[test]
  fn submit_draft_uses_and_clears_buffer()
   {
    let mut board = TaskBoard::empty();
    board.set_draft("Walk the dog");

    let id =
      board.submit_draft().unwrap();
    assert_eq!(
      board.get(id).unwrap().text,
      "Walk the dog"
    );
    assert_eq!(board.draft(), "");
  }

  #[test]
  fn submit_blank_draft_keeps_buffer() {
    let mut board = TaskBoard::empty();
    board.set_draft("  ");

    assert_eq!(
      board.submit_draft(),
      None
    );
    assert_eq!(board.draft(), "  ");
    assert!(board.tasks().is_empty());
  }

  #[test]
  fn toggle_twice_restores_state() {
    let mut board =
      TaskBoard::with_demo_tasks();
    let before = board.clone();
    let id = TaskId::new(3);

    assert!(board.toggle_task(id));
    assert!(
      board.get(id).unwrap().completed
    );
    assert!(board.toggle_task(id));
    assert_eq!(board, before);
  }

  #[test]
  fn toggle_unknown_id_is_noop() {
    let mut board =
      TaskBoard::with_demo_tasks();
    let before = board.clone();

    assert!(
      !board
        .toggle_task(TaskId::new(99))
    );
    assert_eq!(board, before);
  }

  #[test]
  fn delete_removes_one_and_keeps_order()
   {
    let mut board =
      TaskBoard::with_demo_tasks();

    assert!(
      board.delete_task(TaskId::new(3))
    );
    let all = board.tasks_matching(
      Filter::All
    );
    assert_eq!(
      ids(&all),
      vec![1, 2, 4, 5, 6]
    );

    let before = board.clone();
    assert!(
      !board.delete_task(TaskId::new(3))
    );
    assert_eq!(board, before);
  }

  #[test]
  fn clear_completed_keeps_active_order()
   {
    let mut board =
      TaskBoard::with_demo_tasks();
    board.toggle_task(TaskId::new(4));

    assert_eq!(
      board.clear_completed(),
      2
    );
    assert_eq!(
      board.completed_count(),
      0
    );
    assert_eq!(
      ids(&board.visible_tasks()),
      vec![2, 3, 5, 6]
    );
    assert_eq!(
      board.clear_completed(),
      0
    );
  }

  #[test]
  fn filters_partition_the_board() {
    let mut board =
      TaskBoard::with_demo_tasks();
    board.toggle_task(TaskId::new(5));

    let active = board
      .tasks_matching(Filter::Active);
    let completed = board
      .tasks_matching(Filter::Completed);

    assert_eq!(ids(&active), vec![
      2, 3, 4, 6
    ]);
    assert_eq!(ids(&completed), vec![
      1, 5
    ]);
    assert_eq!(
      active.len() + completed.len(),
      board.tasks().len()
    );
    assert!(active.iter().all(|a| {
      completed
        .iter()
        .all(|c| a.id != c.id)
    }));
  }

  #[test]
  fn remaining_count_ignores_filter() {
    let mut board =
      TaskBoard::with_demo_tasks();
    for filter in Filter::ALL {
      board.set_filter(filter);
      assert_eq!(
        board.remaining_count(),
        5
      );
      assert_eq!(
        board.remaining_count(),
        board
          .tasks_matching(Filter::Active)
          .len()
      );
    }
  }

  #[test]
  fn set_filter_does_not_touch_tasks() {
    let mut board =
      TaskBoard::with_demo_tasks();
    let tasks = board.tasks().to_vec();

    board.set_filter(Filter::Completed);
    assert_eq!(
      board.filter(),
      Filter::Completed
    );
    assert_eq!(board.tasks(), tasks);
    assert_eq!(
      ids(&board.visible_tasks()),
      vec![1]
    );
  }

  #[test]
  fn ids_stay_unique_across_mixed_operations()
   {
    let mut board =
      TaskBoard::with_demo_tasks();

    for round in 0_u64..40 {
      match round % 5 {
        | 0 | 1 => {
          board.create_task(&format!(
            "task {round}"
          ));
        }
        | 2 => {
          board.toggle_task(
            TaskId::new(round / 2)
          );
        }
        | 3 => {
          board.delete_task(
            TaskId::new(round / 3)
          );
        }
        | _ => {
          board.clear_completed();
        }
      }
      assert_unique_ids(&board);
    }
  }

  #[test]
  fn deleted_ids_are_never_reused() {
    let mut board = TaskBoard::empty();
    let first =
      board.create_task("a").unwrap();
    board.delete_task(first);
    let second =
      board.create_task("b").unwrap();
    assert_ne!(first, second);
  }

  #[test]
  fn seeded_duplicates_are_dropped() {
    let board = TaskBoard::with_tasks(
      vec![
        Task::new(TaskId::new(2), "a"),
        Task::new(TaskId::new(2), "b"),
        Task::new(TaskId::new(9), "c"),
      ]
    );
    assert_eq!(board.tasks().len(), 2);
    assert_eq!(
      board.tasks()[0].text,
      "a"
    );

    let mut board = board;
    assert_eq!(
      board.create_task("d"),
      Some(TaskId::new(10))
    );
  }

  #[test]
  fn seed_at_max_id_does_not_overflow() {
    let mut board = TaskBoard::with_tasks(
      vec![Task::new(
        TaskId::new(u64::MAX),
        "last"
      )]
    );
    board.set_draft("one more");
    let before = board.clone();

    assert_eq!(
      board.create_task("one more"),
      None
    );
    assert_eq!(board, before);
    assert_eq!(board.draft(), "one more");
  }

  #[test]
  fn final_id_is_handed_out_once() {
    let mut board = TaskBoard::with_tasks(
      vec![Task::new(
        TaskId::new(u64::MAX - 1),
        "almost"
      )]
    );

    assert_eq!(
      board.create_task("fits"),
      Some(TaskId::new(u64::MAX))
    );
    assert_eq!(
      board.create_task("does not"),
      None
    );
    assert_eq!(board.tasks().len(), 2);
  }
}
