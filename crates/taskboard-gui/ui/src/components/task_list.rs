use taskboard_model::TaskId;
use taskboard_model::view::RowView;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub rows:      Vec<RowView>,
  pub on_toggle: Callback<TaskId>,
  pub on_delete: Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <div class="list">
          {
              for props.rows.iter().cloned().map(|row| html! {
                  <TaskListRow
                      key={row.id.get()}
                      row={row.clone()}
                      on_toggle={props.on_toggle.clone()}
                      on_delete={props.on_delete.clone()}
                  />
              })
          }
      </div>
  }
}
