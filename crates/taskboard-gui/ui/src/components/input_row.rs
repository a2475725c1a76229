use taskboard_model::BoardEvent;
use taskboard_model::view::InputView;
use web_sys::{
  HtmlInputElement,
  InputEvent,
  KeyboardEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct InputRowProps {
  pub input:    InputView,
  pub on_event: Callback<BoardEvent>
}

#[function_component(InputRow)]
pub fn input_row(
  props: &InputRowProps
) -> Html {
  let oninput = {
    let on_event =
      props.on_event.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        on_event.emit(
          BoardEvent::DraftChanged(
            input.value()
          )
        );
      }
    )
  };

  let onkeydown = {
    let on_event =
      props.on_event.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() == "Enter" {
          e.prevent_default();
          on_event.emit(
            BoardEvent::DraftSubmitted
          );
        }
      }
    )
  };

  html! {
      <div class="panel input-row">
          <div class="checkbox"></div>
          <input
              class="draft"
              value={props.input.draft.clone()}
              placeholder={props.input.placeholder.clone()}
              oninput={oninput}
              onkeydown={onkeydown}
          />
      </div>
  }
}
