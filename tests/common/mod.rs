//! Common test utilities: option builders and a deferrable provider.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use std::cell::RefCell;
use std::rc::Rc;

use matview::config::RawOptions;
use matview::geometry::{MatrixSize, Window};
use matview::provider::{MatrixProvider, ResponseCallback, SequentialProvider};

/// Minimal valid options: active, a provider handle, everything else
/// defaulted.
pub fn valid_options() -> RawOptions {
    RawOptions {
        active: Some(true),
        api: Some("memory://sequential".to_string()),
        ..RawOptions::default()
    }
}

/// A provider that parks every fetch until the test resolves it, so tests
/// can complete requests out of order.
///
/// Responses are generated by an inner [`SequentialProvider`] of the same
/// dimensions, so resolved data matches what a direct fetch would return.
pub struct DeferredProvider {
    inner: SequentialProvider,
    size: Option<MatrixSize>,
    pending: RefCell<Vec<(Window, ResponseCallback)>>,
    size_queries: RefCell<u32>,
}

impl DeferredProvider {
    pub fn new(height: u32, width: u32) -> Rc<Self> {
        Rc::new(Self {
            inner: SequentialProvider::new(height, width),
            size: Some(MatrixSize { width, height }),
            pending: RefCell::new(Vec::new()),
            size_queries: RefCell::new(0),
        })
    }

    /// A provider that cannot answer a size query.
    pub fn sizeless() -> Rc<Self> {
        Rc::new(Self {
            inner: SequentialProvider::new(0, 0),
            size: None,
            pending: RefCell::new(Vec::new()),
            size_queries: RefCell::new(0),
        })
    }

    /// Number of fetches currently parked.
    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Windows of all parked fetches, oldest first.
    pub fn pending_windows(&self) -> Vec<Window> {
        self.pending.borrow().iter().map(|(w, _)| *w).collect()
    }

    /// How many times the view asked for the matrix size.
    pub fn size_query_count(&self) -> u32 {
        *self.size_queries.borrow()
    }

    /// Complete the parked fetch at `index` (0 = oldest), firing its
    /// callback with generated data.
    pub fn resolve(&self, index: usize) {
        let (window, callback) = self.pending.borrow_mut().remove(index);
        callback(self.inner.response_for(window));
    }
}

impl MatrixProvider for DeferredProvider {
    fn matrix_size(&self) -> Option<MatrixSize> {
        *self.size_queries.borrow_mut() += 1;
        self.size
    }

    fn fetch_window(&self, request: Window, on_response: ResponseCallback) {
        self.pending.borrow_mut().push((request, on_response));
    }
}
