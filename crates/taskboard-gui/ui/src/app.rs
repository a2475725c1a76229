use std::rc::Rc;

use taskboard_model::{
  BoardEvent,
  BoardView,
  TaskBoard,
  TaskId,
  ViewLabels
};
use yew::{
  Callback,
  Html,
  Reducible,
  function_component,
  html,
  use_reducer
};

use crate::components::{
  BoardFooter,
  BoardHeader,
  FilterBar,
  InputRow,
  TaskList
};

/// Snapshot held by the screen. A
/// reduction that changes nothing hands
/// back the same `Rc`, so yew skips the
/// re-render.
#[derive(Clone, PartialEq, Default)]
pub struct BoardState {
  board: TaskBoard
}

impl Reducible for BoardState {
  type Action = BoardEvent;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut board = self.board.clone();
    if board.dispatch(action) {
      Rc::new(Self {
        board
      })
    } else {
      self
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let state =
    use_reducer(BoardState::default);
  let view = BoardView::build(
    &state.board,
    &ViewLabels::default()
  );

  let on_event = {
    let state = state.clone();
    Callback::from(
      move |event: BoardEvent| {
        state.dispatch(event);
      }
    )
  };
  let on_toggle = on_event.reform(
    |id: TaskId| {
      BoardEvent::ToggleTask(id)
    }
  );
  let on_delete = on_event.reform(
    |id: TaskId| {
      BoardEvent::DeleteTask(id)
    }
  );

  html! {
      <div class="screen">
          <BoardHeader header={view.header.clone()} />
          <div class="content">
              <InputRow input={view.input.clone()} on_event={on_event.clone()} />
              <div class="panel todo-list">
                  <TaskList
                      rows={view.rows.clone()}
                      on_toggle={on_toggle}
                      on_delete={on_delete}
                  />
                  <BoardFooter footer={view.footer.clone()} on_event={on_event.clone()} />
                  <FilterBar filters={view.filters.clone()} on_event={on_event} />
              </div>
              <div class="drag-hint">{ view.hint }</div>
          </div>
      </div>
  }
}

#[cfg(test)]
mod tests {
  use std::rc::Rc;

  use taskboard_model::{
    BoardEvent,
    TaskId
  };
  use yew::Reducible;

  use super::BoardState;

  #[test]
  fn noop_reduction_keeps_the_same_snapshot()
   {
    let state =
      Rc::new(BoardState::default());
    let next = Rc::clone(&state).reduce(
      BoardEvent::ToggleTask(
        TaskId::new(999)
      )
    );
    assert!(Rc::ptr_eq(&state, &next));
  }

  #[test]
  fn changing_reduction_yields_a_new_snapshot()
   {
    let state =
      Rc::new(BoardState::default());
    let next = Rc::clone(&state).reduce(
      BoardEvent::DeleteTask(
        TaskId::new(1)
      )
    );
    assert!(!Rc::ptr_eq(&state, &next));
    assert_eq!(
      state.board.tasks().len(),
      6
    );
    assert_eq!(
      next.board.tasks().len(),
      5
    );
  }
}
