mod multi_progress;
mod progress_style;

pub use multi_progress::{progress_group, MultiProgressNew};
pub use progress_style::ProgressStyleTemplate;
