mod board_footer;
mod board_header;
mod filter_bar;
mod input_row;
mod task_list;
mod task_list_row;

pub use board_footer::BoardFooter;
pub use board_header::BoardHeader;
pub use filter_bar::FilterBar;
pub use input_row::InputRow;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
