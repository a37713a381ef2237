//! Host-independent core of the counter view: state, observers, the lazily
//! loaded secondary view and the pure render function.

pub mod counter;
pub mod lazy;
pub mod model;
pub mod view;

pub use counter::{Change, Counter, CounterError, ObserverId};
pub use lazy::{LazyError, LazyView, LoadError};
pub use model::{CounterModel, Effects, Event};
pub use view::{render, Action, Control, CountLine, Tail, View};

/// Counts strictly above this value are shown as a warning.
pub const THRESHOLD: i64 = 10;

pub const WARNING_CLASS: &str = "warning";
pub const TITLE: &str = "Testing Component";
pub const TRAILING_TEXT: &str = "Random text";
pub const INCREMENT_LABEL: &str = "+ 1";
pub const DECREMENT_LABEL: &str = "-1";
