//! The matrix viewport controller.
//!
//! [`MatrixView`] reacts to focal-position changes and overflow events,
//! derives the window that must be materialized locally and coordinates
//! at-most-one in-flight fetch against the provider. A response is applied
//! only if it belongs to the most recently requested window; stale responses
//! are discarded, never rendered.

#[cfg(target_arch = "wasm32")]
mod bindings;

#[cfg(target_arch = "wasm32")]
pub use bindings::MatrixBrowse;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::{Configuration, RawOptions};
use crate::error::Result;
use crate::geometry::{Position, Window};
use crate::overflow::OverflowDirection;
use crate::provider::{MatrixProvider, MatrixResponse};

/// Observer invoked once per applied (non-stale) response.
pub type RenderCallback = Rc<dyn Fn(&Window, &MatrixResponse)>;

/// Fetch state of a view. At most one fetch is in flight at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchPhase {
    Idle,
    Fetching,
}

/// Per-view mutable state, shared with in-flight fetch callbacks.
struct ViewState {
    phase: FetchPhase,
    /// Monotonic fetch generation. A response carries the generation of its
    /// request and is applied only if still the latest.
    generation: u64,
    focal: Position,
    /// Window most recently handed to the provider (possibly in flight).
    requested: Option<Window>,
    /// Window whose data is currently materialized.
    rendered: Option<Window>,
    data: Option<Rc<MatrixResponse>>,
    render_callback: Option<RenderCallback>,
}

/// A windowed view over a huge remote matrix.
///
/// Owns its configuration and provider reference exclusively; creating two
/// views gives two fully independent fetch pipelines.
pub struct MatrixView {
    config: Configuration,
    state: Rc<RefCell<ViewState>>,
}

impl MatrixView {
    /// Build a view from declarative options and a provider.
    ///
    /// Fail-fast: a configuration error prevents construction and no fetch
    /// is ever issued.
    pub fn new(options: RawOptions, provider: Rc<dyn MatrixProvider>) -> Result<Self> {
        let config = Configuration::new(options, provider)?;
        let focal = config.window_position()?.unwrap_or_default();
        Ok(Self {
            config,
            state: Rc::new(RefCell::new(ViewState {
                phase: FetchPhase::Idle,
                generation: 0,
                focal,
                requested: None,
                rendered: None,
                data: None,
                render_callback: None,
            })),
        })
    }

    /// The view's configuration.
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// The current focal cell.
    #[must_use]
    pub fn focal(&self) -> Position {
        self.state.borrow().focal
    }

    /// Window whose data is currently materialized, if any.
    #[must_use]
    pub fn rendered_window(&self) -> Option<Window> {
        self.state.borrow().rendered
    }

    /// Data for the rendered window, if any.
    #[must_use]
    pub fn rendered_data(&self) -> Option<Rc<MatrixResponse>> {
        self.state.borrow().data.clone()
    }

    /// True while a fetch is outstanding.
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.state.borrow().phase == FetchPhase::Fetching
    }

    /// Register the observer invoked once per applied response.
    pub fn set_render_callback(&self, callback: impl Fn(&Window, &MatrixResponse) + 'static) {
        self.state.borrow_mut().render_callback = Some(Rc::new(callback));
    }

    /// Issue the initial fetch for the configured window position.
    pub fn load(&self) -> Result<()> {
        self.rewindow()
    }

    /// Move the focal cell and re-window if the covering window changed.
    pub fn move_to(&self, focal: Position) -> Result<()> {
        self.state.borrow_mut().focal = focal;
        self.rewindow()
    }

    /// React to an overflow event: the rendered content has scrolled past
    /// the container's bound in `direction`.
    pub fn handle_overflow(&self, direction: OverflowDirection) -> Result<()> {
        if !self.config.reload_strategy().should_rewindow(direction) {
            return Ok(());
        }
        self.rewindow()
    }

    /// Recompute the window for the current focal cell and fetch it if it
    /// differs from what is rendered or already on the wire.
    fn rewindow(&self) -> Result<()> {
        if !self.config.settings().active {
            return Ok(());
        }
        let focal = self.state.borrow().focal;
        let mut window = self.config.cell_window(focal)?;
        if self.config.snap_enabled() {
            window = window.snapped_to(self.config.background_cells(), self.config.matrix_size()?);
        }
        // Negative origins are silently clamped before a request goes out;
        // the far edge is already clamped by the geometry.
        self.request(window.clamped_origin());
        Ok(())
    }

    fn request(&self, window: Window) {
        let generation = {
            let mut s = self.state.borrow_mut();
            // Identical to what is rendered, or to the window already on the
            // wire: nothing to do.
            if s.rendered == Some(window)
                || (s.phase == FetchPhase::Fetching && s.requested == Some(window))
            {
                return;
            }
            s.generation += 1;
            s.requested = Some(window);
            s.phase = FetchPhase::Fetching;
            s.generation
        };
        let state = Rc::downgrade(&self.state);
        self.config.provider().fetch_window(
            window,
            Box::new(move |response| {
                Self::apply(&state, generation, window, response);
            }),
        );
    }

    /// Apply a completed fetch unless a newer request superseded it (or the
    /// view was torn down while the fetch was in flight).
    fn apply(
        state: &Weak<RefCell<ViewState>>,
        generation: u64,
        window: Window,
        response: MatrixResponse,
    ) {
        let Some(state) = state.upgrade() else {
            return;
        };
        let (callback, payload) = {
            let mut s = state.borrow_mut();
            if s.generation != generation {
                // Stale: a newer window was requested after this one.
                return;
            }
            let payload = Rc::new(response);
            s.phase = FetchPhase::Idle;
            s.rendered = Some(window);
            s.data = Some(Rc::clone(&payload));
            (s.render_callback.clone(), payload)
        };
        // Borrow released before observer code runs.
        if let Some(callback) = callback {
            callback(&window, &payload);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::provider::SequentialProvider;

    fn options() -> RawOptions {
        RawOptions {
            active: Some(true),
            api: Some("memory://sequential".to_string()),
            ..RawOptions::default()
        }
    }

    #[test]
    fn construction_fails_fast_on_bad_options() {
        let provider = Rc::new(SequentialProvider::new(100, 100));
        let result = MatrixView::new(RawOptions::default(), provider);
        assert!(result.is_err());
    }

    #[test]
    fn inactive_view_never_fetches() {
        let provider = Rc::new(SequentialProvider::new(100, 100));
        let view = MatrixView::new(
            RawOptions {
                active: Some(false),
                ..options()
            },
            provider,
        )
        .expect("inactive is a valid configuration");
        assert!(view.move_to(Position::new(5, 5)).is_ok());
        assert_eq!(view.rendered_window(), None);
    }
}
