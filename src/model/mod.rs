pub mod view;

pub use view::{format_relative_time, FilterTab, TaskCounts};
