//! Cheaply cloneable manager handle for multi-threaded hosts.
//!
//! [`SharedTitleManager`] wraps a [`TitleManager`] in
//! `Arc<parking_lot::Mutex<…>>` and mirrors its operations with internal
//! locking, so composition always reads options, counter and history top
//! under one lock. Single-threaded hosts use [`TitleManager`] directly.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::lifecycle::{ActivationHandle, TitleRequest, UnitId, activate, deactivate};
use crate::manager::TitleManager;
use crate::options::TitleOptions;
use crate::routes::RouteEntry;
use crate::sink::TitleSink;

/// Shared handle to a [`TitleManager`]. Clones refer to the same manager.
pub struct SharedTitleManager<S: TitleSink> {
    inner: Arc<Mutex<TitleManager<S>>>,
}

impl<S: TitleSink> Clone for SharedTitleManager<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: TitleSink> SharedTitleManager<S> {
    /// Wrap an existing manager.
    pub fn new(manager: TitleManager<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    /// See [`TitleManager::set_title`].
    pub fn set_title(&self, value: Option<&str>) -> bool {
        self.inner.lock().set_title(value)
    }

    /// See [`TitleManager::set_previous_title`].
    pub fn set_previous_title(&self) {
        self.inner.lock().set_previous_title();
    }

    /// See [`TitleManager::set_notifications_counter`].
    pub fn set_notifications_counter(&self, count: u32) {
        self.inner.lock().set_notifications_counter(count);
    }

    /// See [`TitleManager::configure`].
    pub fn configure(&self, options: TitleOptions) {
        self.inner.lock().configure(options);
    }

    /// See [`TitleManager::navigate`].
    pub fn navigate(&self, chain: &[RouteEntry]) -> bool {
        self.inner.lock().navigate(chain)
    }

    /// See [`crate::lifecycle::activate`].
    pub fn activate(&self, unit: UnitId, request: TitleRequest) -> ActivationHandle {
        activate(&mut self.inner.lock(), unit, request)
    }

    /// See [`crate::lifecycle::deactivate`].
    pub fn deactivate(&self, handle: ActivationHandle) {
        deactivate(&mut self.inner.lock(), handle);
    }

    /// See [`TitleManager::release_title`].
    pub fn release_title(&self, value: &str) -> bool {
        self.inner.lock().release_title(value)
    }

    /// See [`TitleManager::clear_history`].
    pub fn clear_history(&self) {
        self.inner.lock().clear_history();
    }

    /// The requested value currently in effect, cloned out of the lock.
    pub fn current_title(&self) -> Option<String> {
        self.inner.lock().current_title().map(str::to_string)
    }

    /// The display title most recently written to the sink.
    pub fn display_title(&self) -> String {
        self.inner.lock().display_title().to_string()
    }

    /// The display title captured from the sink at startup.
    pub fn original_title(&self) -> String {
        self.inner.lock().original_title().to_string()
    }

    /// A snapshot of the composition options currently in effect.
    pub fn options(&self) -> TitleOptions {
        self.inner.lock().options().clone()
    }

    /// The current notification counter value.
    pub fn notifications_counter(&self) -> u32 {
        self.inner.lock().notifications_counter()
    }

    /// Run `f` with exclusive access to the manager.
    ///
    /// For multi-step sequences that must not interleave with other threads
    /// (e.g. inspecting the history while applying a title) and for sink
    /// access in tests.
    pub fn with<R>(&self, f: impl FnOnce(&mut TitleManager<S>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn shared() -> SharedTitleManager<MemorySink> {
        let options = TitleOptions {
            suffix: Some("MyApp".to_string()),
            ..Default::default()
        };
        SharedTitleManager::new(TitleManager::new(options, MemorySink::new("Browser")))
    }

    #[test]
    fn test_clones_share_one_manager() {
        let handle = shared();
        let other = handle.clone();
        handle.set_title(Some("Home page"));
        assert_eq!(other.display_title(), "Home page - MyApp");
        assert_eq!(other.current_title(), Some("Home page".to_string()));
    }

    #[test]
    fn test_operations_mirror_the_manager() {
        let handle = shared();
        handle.set_title(Some("Home page"));
        handle.set_notifications_counter(3);
        assert_eq!(handle.display_title(), "(3) Home page - MyApp");
        assert_eq!(handle.notifications_counter(), 3);

        handle.set_notifications_counter(0);
        handle.set_previous_title();
        assert_eq!(handle.display_title(), "MyApp");
    }

    #[test]
    fn test_lifecycle_through_the_handle() {
        let handle = shared();
        let home = handle.activate(1, TitleRequest::fixed("Home page"));
        let about = handle.activate(2, TitleRequest::fixed("About page"));
        assert_eq!(handle.display_title(), "About page - MyApp");

        handle.deactivate(about);
        assert_eq!(handle.display_title(), "Home page - MyApp");
        handle.deactivate(home);
        assert_eq!(handle.display_title(), "MyApp");
    }

    #[test]
    fn test_with_gives_exclusive_access() {
        let handle = shared();
        handle.set_title(Some("Home page"));
        let writes = handle.with(|manager| manager.sink().writes().len());
        assert_eq!(writes, 2);
    }

    #[test]
    fn test_shared_manager_crosses_threads() {
        let handle = shared();
        let worker = {
            let handle = handle.clone();
            std::thread::spawn(move || {
                handle.set_title(Some("Background page"));
            })
        };
        worker.join().unwrap();
        assert_eq!(handle.display_title(), "Background page - MyApp");
    }
}
