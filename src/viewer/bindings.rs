//! WASM bindings: the JS-facing wrapper over [`MatrixView`].
//!
//! The host page supplies the provider as two JavaScript functions and feeds
//! position changes and bounding boxes in; the core decides what to fetch.
//! Nothing here draws — rendering stays on the JS side.

use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::MatrixView;
use crate::config::RawOptions;
use crate::geometry::{MatrixSize, Position, Window};
use crate::overflow::{is_overflowing, OverflowDirection};
use crate::provider::{MatrixProvider, MatrixResponse, ResponseCallback};

/// Provider implemented by JavaScript callbacks.
///
/// `matrix_size` must synchronously return `{width, height}` (or a falsy
/// value if unknown); `fetch_window` receives `(request, callback)` and
/// invokes the callback with the JSON response object when it arrives.
struct JsProvider {
    matrix_size: Function,
    fetch_window: Function,
}

impl MatrixProvider for JsProvider {
    fn matrix_size(&self) -> Option<MatrixSize> {
        let value = self.matrix_size.call0(&JsValue::NULL).ok()?;
        serde_wasm_bindgen::from_value(value).ok()
    }

    fn fetch_window(&self, request: Window, on_response: ResponseCallback) {
        let Ok(request) = serde_wasm_bindgen::to_value(&request) else {
            return;
        };
        let callback = Closure::once_into_js(move |value: JsValue| {
            if let Ok(response) = serde_wasm_bindgen::from_value::<MatrixResponse>(value) {
                on_response(response);
            }
        });
        let Some(callback) = callback.dyn_ref::<Function>() else {
            return;
        };
        if let Err(e) = self
            .fetch_window
            .call2(&JsValue::NULL, &request, callback)
        {
            web_sys::console::error_2(&JsValue::from_str("matview fetch failed:"), &e);
        }
    }
}

/// JS-exported matrix browser: one instance per host element.
#[wasm_bindgen]
pub struct MatrixBrowse {
    view: MatrixView,
}

#[wasm_bindgen]
impl MatrixBrowse {
    /// Create a browser from a JS options object (`{active, api, windowSize,
    /// windowPosition, snapEnabled}`) and the two provider callbacks.
    #[wasm_bindgen(constructor)]
    pub fn new(
        options: JsValue,
        matrix_size: Function,
        fetch_window: Function,
    ) -> Result<MatrixBrowse, JsValue> {
        console_error_panic_hook::set_once();
        let options: RawOptions = serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let provider = Rc::new(JsProvider {
            matrix_size,
            fetch_window,
        });
        let view = MatrixView::new(options, provider)?;
        Ok(Self { view })
    }

    /// Issue the initial fetch for the configured window position.
    pub fn load(&self) -> Result<(), JsValue> {
        self.view.load().map_err(Into::into)
    }

    /// Move the focal cell; re-fetches only if the covering window changed.
    #[wasm_bindgen(js_name = moveTo)]
    pub fn move_to(&self, row: u32, col: u32) -> Result<(), JsValue> {
        self.view.move_to(Position::new(row, col)).map_err(Into::into)
    }

    /// Check one direction for overflow and re-window if it fired.
    ///
    /// `direction` is `"left"`, `"right"`, `"top"` or `"bottom"`; any other
    /// name is treated as "no overflow". Returns whether the element
    /// overflowed.
    #[wasm_bindgen(js_name = checkOverflow)]
    pub fn check_overflow(
        &self,
        element: &web_sys::DomRect,
        container: &web_sys::DomRect,
        direction: &str,
    ) -> Result<bool, JsValue> {
        let Some(direction) = OverflowDirection::parse(direction) else {
            return Ok(false);
        };
        let overflowing = is_overflowing(&element.into(), &container.into(), direction);
        if overflowing {
            self.view.handle_overflow(direction)?;
        }
        Ok(overflowing)
    }

    /// The window currently materialized, as `{row1, col1, row2, col2}` or
    /// `undefined` before the first response arrives.
    #[wasm_bindgen(js_name = renderedWindow)]
    pub fn rendered_window(&self) -> Result<JsValue, JsValue> {
        match self.view.rendered_window() {
            Some(window) => serde_wasm_bindgen::to_value(&window)
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// True while a fetch is outstanding.
    #[wasm_bindgen(js_name = isFetching)]
    pub fn is_fetching(&self) -> bool {
        self.view.is_fetching()
    }

    /// Register a JS observer called with `(window, response)` once per
    /// applied (non-stale) response.
    #[wasm_bindgen(js_name = onWindowLoaded)]
    pub fn on_window_loaded(&self, callback: Function) {
        self.view.set_render_callback(move |window, response| {
            let window = serde_wasm_bindgen::to_value(window).unwrap_or(JsValue::UNDEFINED);
            let response = serde_wasm_bindgen::to_value(response).unwrap_or(JsValue::UNDEFINED);
            if let Err(e) = callback.call2(&JsValue::NULL, &window, &response) {
                web_sys::console::error_2(&JsValue::from_str("matview observer failed:"), &e);
            }
        });
    }
}
