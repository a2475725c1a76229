use taskboard_model::view::HeaderView;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct BoardHeaderProps {
  pub header: HeaderView
}

#[function_component(BoardHeader)]
pub fn board_header(
  props: &BoardHeaderProps
) -> Html {
  let [from, via, to] =
    props.header.gradient;
  let style = format!(
    "background: linear-gradient(135deg, \
     {from}, {via}, {to});"
  );

  html! {
      <div class="board-header" style={style}>
          <div class="title">{ &props.header.title }</div>
          <div class="icon">{ props.header.icon }</div>
      </div>
  }
}
