use std::fmt;
use std::str::FromStr;

use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
  pub const fn new(raw: u64) -> Self {
    Self(raw)
  }

  pub const fn get(self) -> u64 {
    self.0
  }

  /// The id after this one, or `None`
  /// once the `u64` space is used up.
  pub(crate) fn next(
    self
  ) -> Option<Self> {
    self.0.checked_add(1).map(Self)
  }
}

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
  thiserror::Error,
)]
#[error(
  "invalid task id {input:?}: expected \
   a number"
)]
pub struct ParseTaskIdError {
  pub input: String
}

impl FromStr for TaskId {
  type Err = ParseTaskIdError;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    s.trim()
      .parse::<u64>()
      .map(Self)
      .map_err(|_| {
        ParseTaskIdError {
          input: s.to_string()
        }
      })
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct Task {
  pub id:        TaskId,
  pub text:      String,
  #[serde(default)]
  pub completed: bool
}

impl Task {
  pub fn new(
    id: TaskId,
    text: impl Into<String>
  ) -> Self {
    Self {
      id,
      text: text.into(),
      completed: false
    }
  }

  pub fn is_active(&self) -> bool {
    !self.completed
  }
}

const DEMO_TASKS: [(&str, bool); 6] = [
  (
    "Complete online JavaScript \
     course",
    true
  ),
  ("Jog around the park 3x", false),
  ("10 minutes meditation", false),
  ("Read for 1 hour", false),
  ("Pick up groceries", false),
  (
    "Complete Todo App on Frontend \
     Mentor",
    false
  )
];

/// The demonstration tasks a fresh
/// board starts with, ids `1..=6`.
pub fn demo_tasks() -> Vec<Task> {
  DEMO_TASKS
    .iter()
    .zip(1_u64..)
    .map(|(&(text, completed), id)| {
      Task {
        id: TaskId::new(id),
        text: text.to_string(),
        completed
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn task_id_parses_and_displays() {
    let id: TaskId =
      " 42 ".parse().unwrap();
    assert_eq!(id, TaskId::new(42));
    assert_eq!(id.to_string(), "42");
    assert!(
      "abc".parse::<TaskId>().is_err()
    );
    assert!(
      "-1".parse::<TaskId>().is_err()
    );
  }

  #[test]
  fn demo_tasks_have_mixed_state() {
    let tasks = demo_tasks();
    assert_eq!(tasks.len(), 6);
    assert_eq!(
      tasks[0].id,
      TaskId::new(1)
    );
    assert!(tasks[0].completed);
    assert!(
      tasks[1..]
        .iter()
        .all(Task::is_active)
    );
    assert_eq!(
      tasks[5].text,
      "Complete Todo App on Frontend \
       Mentor"
    );
  }

  #[test]
  fn task_serializes_with_plain_id() {
    let task =
      Task::new(TaskId::new(7), "x");
    let json =
      serde_json::to_string(&task)
        .unwrap();
    assert_eq!(
      json,
      r#"{"id":7,"text":"x","completed":false}"#
    );
  }
}
