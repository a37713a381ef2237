pub mod counter_view;
pub mod warning;
