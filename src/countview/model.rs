use crate::{
    counter::{Change, Counter, CounterError, ObserverId},
    lazy::{LazyError, LazyView, LoadError},
    view::{render, Action, View},
};

/// Everything the host feeds back into the model.
pub enum Event<V> {
    Act(Action),
    /// Sent by the counter's observer after a step.
    Changed(Change),
    Loaded(Result<V, LoadError>),
}

/// What the host has to do after an event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Effects {
    pub render: bool,
    /// Start fetching the secondary view.
    pub fetch: bool,
}

/// Counter plus its on-demand secondary view, driven by [`Event`]s.
///
/// Acting on the counter never asks for a render by itself. The counter
/// notifies its observers, the host turns that into [`Event::Changed`], and
/// that event is what re-renders. The secondary view is requested only when a
/// change crosses the threshold upward, so a failed load is retried on the
/// next crossing and not on every step above it.
#[derive(Debug)]
pub struct CounterModel<V> {
    counter: Counter,
    secondary: LazyView<V>,
}

impl<V> CounterModel<V> {
    pub fn new() -> Self {
        CounterModel {
            counter: Counter::new(),
            secondary: LazyView::new(),
        }
    }

    pub fn subscribe(&mut self, observer: impl Fn(&Change) + 'static) -> ObserverId {
        self.counter.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> Result<(), CounterError> {
        self.counter.unsubscribe(id)
    }

    pub fn count(&self) -> i64 {
        self.counter.count()
    }

    pub fn fetches(&self) -> u32 {
        self.secondary.fetches()
    }

    pub fn view(&self) -> View<V> {
        render(&self.counter, &self.secondary)
    }

    pub fn update(&mut self, event: Event<V>) -> Result<Effects, LazyError> {
        match event {
            Event::Act(action) => {
                action.apply(&mut self.counter);
                Ok(Effects::default())
            }
            Event::Changed(change) => Ok(Effects {
                render: true,
                fetch: change.crossed_up() && self.secondary.request(),
            }),
            Event::Loaded(result) => {
                self.secondary.resolve(result)?;
                // Below the threshold the load completes silently.
                Ok(Effects {
                    render: self.counter.shows_secondary(),
                    fetch: false,
                })
            }
        }
    }
}
