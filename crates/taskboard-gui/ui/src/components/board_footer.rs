use taskboard_model::BoardEvent;
use taskboard_model::view::FooterView;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct BoardFooterProps {
  pub footer:   FooterView,
  pub on_event: Callback<BoardEvent>
}

#[function_component(BoardFooter)]
pub fn board_footer(
  props: &BoardFooterProps
) -> Html {
  let on_clear = props
    .on_event
    .reform(|_: MouseEvent| {
      BoardEvent::ClearCompleted
    });

  html! {
      <div class="footer">
          <span class="items-left">{ &props.footer.remaining_label }</span>
          <button
              class={if props.footer.can_clear { "clear" } else { "clear idle" }}
              onclick={on_clear}
          >
              { props.footer.clear_label }
          </button>
      </div>
  }
}
