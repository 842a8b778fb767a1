use gloo_timers::callback::Timeout;

/// Trailing-edge debounce: only the last call within `wait_ms` runs.
pub struct Debouncer {
    wait_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms, pending: None }
    }

    pub fn call<F>(&mut self, f: F)
    where
        F: FnOnce() + 'static,
    {
        // Dropping the previous Timeout clears it.
        self.pending = Some(Timeout::new(self.wait_ms, f));
    }

    pub fn cancel(&mut self) {
        self.pending.take();
    }
}
