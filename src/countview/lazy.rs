use core::fmt;
use std::rc::Rc;

type Result<T> = std::result::Result<T, LazyError>;

/// The secondary view could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub reason: String,
}

impl LoadError {
    pub fn new(reason: impl Into<String>) -> Self {
        LoadError { reason: reason.into() }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view failed to load: {}", self.reason)
    }
}

impl std::error::Error for LoadError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LazyError {
    NotLoading,
}

impl fmt::Display for LazyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LazyError::NotLoading => write!(f, "resolved a view that was not loading"),
        }
    }
}

impl std::error::Error for LazyError {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadState<V> {
    Idle,
    Loading,
    Ready(Rc<V>),
    Failed(LoadError),
}

/// Handle to view content that is fetched on first use and then kept.
///
/// The handle does not fetch anything itself. [`LazyView::request`] tells the
/// caller when a fetch has to be started, and the caller hands the outcome back
/// through [`LazyView::resolve`]. A failed fetch may be requested again; a
/// successful one is never repeated.
#[derive(Debug)]
pub struct LazyView<V> {
    state: LoadState<V>,
    fetches: u32,
}

impl<V> LazyView<V> {
    pub fn new() -> Self {
        LazyView {
            state: LoadState::Idle,
            fetches: 0,
        }
    }

    /// Returns `true` when the caller has to start a fetch now.
    pub fn request(&mut self) -> bool {
        match self.state {
            LoadState::Idle | LoadState::Failed(_) => {
                self.state = LoadState::Loading;
                self.fetches += 1;
                true
            }
            LoadState::Loading | LoadState::Ready(_) => false,
        }
    }

    pub fn resolve(&mut self, result: std::result::Result<V, LoadError>) -> Result<()> {
        if !self.is_loading() {
            return Err(LazyError::NotLoading);
        }
        self.state = match result {
            Ok(view) => LoadState::Ready(Rc::new(view)),
            Err(err) => LoadState::Failed(err),
        };
        Ok(())
    }

    pub fn get(&self) -> Option<Rc<V>> {
        match &self.state {
            LoadState::Ready(view) => Some(view.clone()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Number of fetches started over the lifetime of this handle.
    pub fn fetches(&self) -> u32 {
        self.fetches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lazy0() {
        let lazy: LazyView<String> = LazyView::new();
        assert_eq!(lazy.state, LoadState::Idle);
        assert_eq!(lazy.get(), None);
        assert_eq!(lazy.fetches(), 0);
    }

    #[test]
    fn request_once_while_loading() {
        let mut lazy: LazyView<String> = LazyView::new();
        assert!(lazy.request());
        assert!(lazy.is_loading());
        assert!(!lazy.request());
        assert_eq!(lazy.fetches(), 1);
    }

    #[test]
    fn ready_is_cached() {
        let mut lazy = LazyView::new();
        assert!(lazy.request());
        lazy.resolve(Ok("body".to_string())).unwrap();
        assert_eq!(lazy.get().as_deref(), Some(&"body".to_string()));
        for _ in 0..5 {
            assert!(!lazy.request());
        }
        assert_eq!(lazy.fetches(), 1);
    }

    #[test]
    fn failure_allows_retry() {
        let mut lazy: LazyView<String> = LazyView::new();
        lazy.request();
        lazy.resolve(Err(LoadError::new("404"))).unwrap();
        assert_eq!(lazy.state, LoadState::Failed(LoadError::new("404")));
        assert_eq!(lazy.get(), None);

        assert!(lazy.request());
        assert!(lazy.is_loading());
        lazy.resolve(Ok("body".to_string())).unwrap();
        assert!(lazy.get().is_some());
        assert_eq!(lazy.fetches(), 2);
    }

    #[test]
    fn resolve_without_request() {
        let mut lazy: LazyView<String> = LazyView::new();
        assert_eq!(lazy.resolve(Ok("x".to_string())), Err(LazyError::NotLoading));
        assert_eq!(lazy.state, LoadState::Idle);
    }

    #[test]
    fn resolve_twice() {
        let mut lazy = LazyView::new();
        lazy.request();
        lazy.resolve(Ok(1)).unwrap();
        assert_eq!(lazy.resolve(Ok(2)), Err(LazyError::NotLoading));
        assert_eq!(lazy.get().as_deref(), Some(&1));
    }

    #[test]
    fn load_error_display() {
        assert_eq!(format!("{}", LoadError::new("timeout")), "view failed to load: timeout");
    }
}
