use core::fmt;
use std::rc::Rc;

use crate::{THRESHOLD, WARNING_CLASS};

type Result<T> = std::result::Result<T, CounterError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterError {
    UnknownObserver(ObserverId),
}

impl fmt::Display for CounterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterError::UnknownObserver(id) => write!(f, "no observer registered as {}", id),
        }
    }
}

impl std::error::Error for CounterError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u32);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single applied transition of the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    pub previous: i64,
    pub current: i64,
}

impl Change {
    pub fn crossed_up(&self) -> bool {
        self.previous <= THRESHOLD && self.current > THRESHOLD
    }

    pub fn crossed_down(&self) -> bool {
        self.previous > THRESHOLD && self.current <= THRESHOLD
    }
}

type Observer = Rc<dyn Fn(&Change)>;

/// Counter state. The only way to change `count` is one step up or down,
/// and every step that moves the value is reported to the subscribed observers.
pub struct Counter {
    count: i64,
    next_id: u32,
    observers: Vec<(ObserverId, Observer)>,
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("count", &self.count)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Counter {
    pub fn new() -> Self {
        Counter {
            count: 0,
            next_id: 0,
            observers: Vec::new(),
        }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn increment(&mut self) -> Change {
        self.step(self.count.saturating_add(1))
    }

    pub fn decrement(&mut self) -> Change {
        self.step(self.count.saturating_sub(1))
    }

    fn step(&mut self, next: i64) -> Change {
        let change = Change {
            previous: self.count,
            current: next,
        };
        if next == self.count {
            return change;
        }
        self.count = next;
        // Snapshot so an observer can't see a half-updated registry.
        let observers: Vec<Observer> = self.observers.iter().map(|(_, o)| o.clone()).collect();
        for observer in observers {
            observer(&change);
        }
        change
    }

    pub fn display_class(&self) -> Option<&'static str> {
        if self.count > THRESHOLD {
            Some(WARNING_CLASS)
        } else {
            None
        }
    }

    pub fn shows_secondary(&self) -> bool {
        self.count > THRESHOLD
    }

    pub fn subscribe(&mut self, observer: impl Fn(&Change) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Rc::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> Result<()> {
        match self.observers.iter().position(|(e, _)| *e == id) {
            Some(index) => {
                self.observers.remove(index);
                Ok(())
            }
            None => Err(CounterError::UnknownObserver(id)),
        }
    }
}
