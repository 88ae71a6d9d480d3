use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Delays a callback until input has been quiet for `delay_ms`.
///
/// Each call cancels the pending one, so only the last call in a burst runs.
/// Used by the property search box so filtering does not rerun on every keystroke.
///
/// # Example
///
/// ```rust,ignore
/// let debouncer = use_state(|| Debouncer::new(150));
/// let oninput = {
///     let debouncer = (*debouncer).clone();
///     Callback::from(move |value: String| {
///         let query = query.clone();
///         debouncer.call(move || query.set(value));
///     })
/// };
/// ```
#[derive(Clone)]
pub struct Debouncer {
    pending: Rc<RefCell<Option<Timeout>>>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            pending: Rc::new(RefCell::new(None)),
            delay_ms,
        }
    }

    pub fn call<F>(&self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        // Dropping a Timeout cancels it
        if let Some(handle) = self.pending.borrow_mut().take() {
            drop(handle);
        }

        // A fired handle stays in place until the next call replaces it
        let handle = Timeout::new(self.delay_ms, callback);
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drops any pending callback without running it
    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}
