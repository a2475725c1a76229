use taskboard_model::BoardEvent;
use taskboard_model::view::FilterOption;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  pub filters:  Vec<FilterOption>,
  pub on_event: Callback<BoardEvent>
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  html! {
      <div class="filters">
          {
              for props.filters.iter().map(|option| {
                  let filter = option.filter;
                  let on_event = props.on_event.clone();
                  html! {
                      <button
                          key={option.label}
                          class={if option.active { "filter active" } else { "filter" }}
                          onclick={move |_| on_event.emit(BoardEvent::SetFilter(filter))}
                      >
                          { option.label }
                      </button>
                  }
              })
          }
      </div>
  }
}
