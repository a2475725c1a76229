//! Render-ready description of the
//! screen, built fresh from a board
//! snapshot on every render.

use serde::Serialize;

use crate::board::TaskBoard;
use crate::filter::Filter;
use crate::task::TaskId;

/// Header gradient stops, top-left to
/// bottom-right.
pub const HEADER_GRADIENT: [&str; 3] = [
  "#8B5CF6", "#6366F1", "#3B82F6"
];

pub const DEFAULT_TITLE: &str = "TODO";
pub const DEFAULT_PLACEHOLDER: &str =
  "Create a new todo...";
pub const HEADER_ICON: &str = "🌙";
pub const CLEAR_COMPLETED_LABEL: &str =
  "Clear Completed";
pub const REORDER_HINT: &str =
  "Drag and drop to reorder list";

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct ViewLabels {
  pub title:       String,
  pub placeholder: String
}

impl Default for ViewLabels {
  fn default() -> Self {
    Self {
      title:       DEFAULT_TITLE
        .to_string(),
      placeholder: DEFAULT_PLACEHOLDER
        .to_string()
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
  Serialize,
)]
pub struct HeaderView {
  pub title:    String,
  pub icon:     &'static str,
  pub gradient: [&'static str; 3]
}

#[derive(
  Debug, Clone, PartialEq, Eq,
  Serialize,
)]
pub struct InputView {
  pub placeholder: String,
  pub draft:       String
}

#[derive(
  Debug, Clone, PartialEq, Eq,
  Serialize,
)]
pub struct RowView {
  pub id:        TaskId,
  pub text:      String,
  pub completed: bool
}

#[derive(
  Debug, Clone, PartialEq, Eq,
  Serialize,
)]
pub struct FooterView {
  pub remaining:       usize,
  pub remaining_label: String,
  pub clear_label:     &'static str,
  pub can_clear:       bool
}

#[derive(
  Debug, Clone, PartialEq, Eq,
  Serialize,
)]
pub struct FilterOption {
  pub filter: Filter,
  pub label:  &'static str,
  pub active: bool
}

#[derive(
  Debug, Clone, PartialEq, Eq,
  Serialize,
)]
pub struct BoardView {
  pub header:  HeaderView,
  pub input:   InputView,
  pub rows:    Vec<RowView>,
  pub footer:  FooterView,
  pub filters: Vec<FilterOption>,
  pub hint:    &'static str
}

impl BoardView {
  pub fn build(
    board: &TaskBoard,
    labels: &ViewLabels
  ) -> Self {
    let rows = board
      .visible_tasks()
      .into_iter()
      .map(|task| {
        RowView {
          id:        task.id,
          text:      task.text.clone(),
          completed: task.completed
        }
      })
      .collect();

    let remaining =
      board.remaining_count();
    let filters = Filter::ALL
      .into_iter()
      .map(|filter| {
        FilterOption {
          filter,
          label: filter.label(),
          active: filter
            == board.filter()
        }
      })
      .collect();

    Self {
      header: HeaderView {
        title:    labels.title.clone(),
        icon:     HEADER_ICON,
        gradient: HEADER_GRADIENT
      },
      input: InputView {
        placeholder: labels
          .placeholder
          .clone(),
        draft:       board
          .draft()
          .to_string()
      },
      rows,
      footer: FooterView {
        remaining,
        remaining_label:
          remaining_label(remaining),
        clear_label:
          CLEAR_COMPLETED_LABEL,
        can_clear: board
          .completed_count()
          > 0
      },
      filters,
      hint: REORDER_HINT
    }
  }
}

pub fn remaining_label(
  remaining: usize
) -> String {
  format!("{remaining} items left")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn seed_view_shows_every_region() {
    let board =
      TaskBoard::with_demo_tasks();
    let view = BoardView::build(
      &board,
      &ViewLabels::default()
    );

    assert_eq!(view.header.title, "TODO");
    assert_eq!(
      view.header.gradient,
      HEADER_GRADIENT
    );
    assert_eq!(
      view.input.placeholder,
      "Create a new todo..."
    );
    assert_eq!(view.rows.len(), 6);
    assert_eq!(
      view.footer.remaining_label,
      "5 items left"
    );
    assert!(view.footer.can_clear);
    assert_eq!(
      view.hint,
      "Drag and drop to reorder list"
    );

    let active: Vec<_> = view
      .filters
      .iter()
      .filter(|option| option.active)
      .map(|option| option.label)
      .collect();
    assert_eq!(active, ["All"]);
  }

  #[test]
  fn rows_follow_filter_and_footer_does_not()
   {
    let mut board =
      TaskBoard::with_demo_tasks();
    board.set_filter(Filter::Completed);
    board.set_draft("half typed");

    let view = BoardView::build(
      &board,
      &ViewLabels {
        title:       "Chores"
          .to_string(),
        placeholder: "What next?"
          .to_string()
      }
    );

    assert_eq!(view.rows, vec![RowView {
      id:        TaskId::new(1),
      text:      "Complete online \
                  JavaScript course"
        .to_string(),
      completed: true
    }]);
    assert_eq!(view.footer.remaining, 5);
    assert_eq!(view.header.title, "Chores");
    assert_eq!(
      view.input.draft,
      "half typed"
    );
    assert!(
      view.filters[2].active
        && !view.filters[0].active
    );
  }

  #[test]
  fn nothing_to_clear_without_completed()
   {
    let board = TaskBoard::empty();
    let view = BoardView::build(
      &board,
      &ViewLabels::default()
    );
    assert!(view.rows.is_empty());
    assert!(!view.footer.can_clear);
    assert_eq!(
      view.footer.remaining_label,
      "0 items left"
    );
  }
}
