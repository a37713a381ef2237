use std::rc::Rc;

use crate::{
    counter::Counter, lazy::LazyView, DECREMENT_LABEL, INCREMENT_LABEL, TITLE, TRAILING_TEXT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Increment,
    Decrement,
}

impl Action {
    pub fn apply(self, counter: &mut Counter) {
        match self {
            Action::Increment => counter.increment(),
            Action::Decrement => counter.decrement(),
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountLine {
    pub text: String,
    pub class: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub label: &'static str,
    pub action: Action,
}

/// What follows the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tail<V> {
    Text(&'static str),
    /// Above threshold, secondary view not loaded yet. Renders nothing.
    Placeholder,
    Secondary(Rc<V>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<V> {
    pub title: &'static str,
    pub count_line: CountLine,
    pub controls: [Control; 2],
    pub tail: Tail<V>,
}

pub fn render<V>(counter: &Counter, secondary: &LazyView<V>) -> View<V> {
    let tail = if counter.shows_secondary() {
        match secondary.get() {
            Some(view) => Tail::Secondary(view),
            None => Tail::Placeholder,
        }
    } else {
        Tail::Text(TRAILING_TEXT)
    };

    View {
        title: TITLE,
        count_line: CountLine {
            text: format!("Count: {}", counter.count()),
            class: counter.display_class(),
        },
        controls: [
            Control { label: INCREMENT_LABEL, action: Action::Increment },
            Control { label: DECREMENT_LABEL, action: Action::Decrement },
        ],
        tail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter_at(count: i64) -> Counter {
        let mut counter = Counter::new();
        for _ in 0..count.abs() {
            if count > 0 {
                counter.increment();
            } else {
                counter.decrement();
            }
        }
        counter
    }

    #[test]
    fn render0() {
        let view = render(&Counter::new(), &LazyView::<&str>::new());
        assert_eq!(view.title, "Testing Component");
        assert_eq!(view.count_line, CountLine { text: "Count: 0".to_string(), class: None });
        assert_eq!(view.controls[0].label, "+ 1");
        assert_eq!(view.controls[0].action, Action::Increment);
        assert_eq!(view.controls[1].label, "-1");
        assert_eq!(view.controls[1].action, Action::Decrement);
        assert_eq!(view.tail, Tail::Text("Random text"));
    }

    #[test]
    fn render_at_threshold() {
        let view = render(&counter_at(10), &LazyView::<&str>::new());
        assert_eq!(view.count_line, CountLine { text: "Count: 10".to_string(), class: None });
        assert_eq!(view.tail, Tail::Text("Random text"));
    }

    #[test]
    fn render_above_threshold() {
        let counter = counter_at(11);
        let mut secondary = LazyView::new();
        let view = render(&counter, &secondary);
        assert_eq!(view.count_line, CountLine {
            text: "Count: 11".to_string(),
            class: Some("warning"),
        });
        assert_eq!(view.tail, Tail::Placeholder);

        secondary.request();
        assert_eq!(render(&counter, &secondary).tail, Tail::Placeholder);

        secondary.resolve(Ok("careful")).unwrap();
        assert_eq!(render(&counter, &secondary).tail, Tail::Secondary(Rc::new("careful")));
    }

    #[test]
    fn loaded_view_hidden_below_threshold() {
        let mut secondary = LazyView::new();
        secondary.request();
        secondary.resolve(Ok("careful")).unwrap();
        assert_eq!(render(&counter_at(10), &secondary).tail, Tail::Text("Random text"));
    }

    #[test]
    fn render_negative() {
        let view = render(&counter_at(-2), &LazyView::<&str>::new());
        assert_eq!(view.count_line, CountLine { text: "Count: -2".to_string(), class: None });
    }

    #[test]
    fn actions_step_counter() {
        let mut counter = Counter::new();
        Action::Increment.apply(&mut counter);
        Action::Increment.apply(&mut counter);
        Action::Decrement.apply(&mut counter);
        assert_eq!(counter.count(), 1);
    }
}
