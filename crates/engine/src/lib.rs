mod layout;
mod pipeline;
mod render;
mod sort;

pub use layout::{ColumnWidths, decimal_width};
pub use pipeline::*;
pub use render::{format_mtime, mode_string, render_line};
pub use sort::{compare_names, sort_by_name};
