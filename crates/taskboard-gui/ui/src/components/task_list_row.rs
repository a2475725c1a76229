use taskboard_model::TaskId;
use taskboard_model::view::RowView;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row:       RowView,
  pub on_toggle: Callback<TaskId>,
  pub on_delete: Callback<TaskId>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let id = props.row.id;
  let completed = props.row.completed;
  let on_toggle =
    props.on_toggle.clone();
  let on_delete =
    props.on_delete.clone();

  html! {
      <div class="row">
          <div class="row-content" onclick={move |_| on_toggle.emit(id)}>
              <div class={if completed { "checkbox done" } else { "checkbox" }}>
                  { if completed { "✓" } else { "" } }
              </div>
              <div class={if completed { "row-text done" } else { "row-text" }}>
                  { &props.row.text }
              </div>
          </div>
          <button
              class="delete"
              onclick={move |e: MouseEvent| {
                  e.stop_propagation();
                  on_delete.emit(id);
              }}
          >
              { "✕" }
          </button>
      </div>
  }
}
