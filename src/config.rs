//! Viewer configuration: declarative options, validation and derived queries.
//!
//! [`RawOptions`] is the declarative configuration surface (the attribute
//! set of a host element, already lifted out of any markup model).
//! [`Configuration`] validates it once, merges defaults, binds the provider
//! and answers the derived geometry queries the viewer controller needs.

use std::cell::OnceCell;
use std::rc::Rc;

use serde::Deserialize;

use crate::error::{MatviewError, Result};
use crate::geometry::{self, MatrixSize, Position, Size, Window};
use crate::overflow::OverflowDirection;
use crate::provider::MatrixProvider;

/// Number of extra "background" cells fetched beyond the viewport's leading
/// edge. Fixed rather than user-settable to bound prefetch cost.
pub const N_BACKGROUND_CELLS: u32 = 2;

/// Default window size (`"height,width"`) when none is configured.
pub const DEFAULT_WINDOW_SIZE: &str = "10,10";

/// Default window position (`"row,col"`) when none is configured.
pub const DEFAULT_WINDOW_POSITION: &str = "0,0";

/// When an overflow event should trigger a re-window versus being absorbed
/// by the existing background margin.
///
/// One strategy ships today; [`ReloadStrategy::should_rewindow`] is the
/// dispatch seam where a debouncing or larger-threshold variant would slot
/// in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReloadStrategy {
    /// Re-window on every overflow event.
    #[default]
    EveryOverflow,
}

impl ReloadStrategy {
    /// Whether an overflow event in `direction` should trigger a re-window.
    #[must_use]
    pub fn should_rewindow(self, _direction: OverflowDirection) -> bool {
        match self {
            Self::EveryOverflow => true,
        }
    }
}

/// Declarative configuration surface for one viewer instance.
///
/// All fields are optional at this layer; [`Configuration::new`] decides
/// which are required and fails naming the offending field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOptions {
    /// Whether browsing is active for the host element. Must be explicitly
    /// set; an absent flag fails validation.
    pub active: Option<bool>,
    /// Declarative handle naming the provider (e.g. an API URI). Required.
    pub api: Option<String>,
    /// Initial window size as `"height,width"` cell counts.
    pub window_size: Option<String>,
    /// Initial window position as `"row,col"`.
    pub window_position: Option<String>,
    /// Align fetched windows to the background-margin grid.
    pub snap_enabled: Option<bool>,
}

/// Validated, immutable-after-construction settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Whether browsing is active.
    pub active: bool,
    /// Declarative provider handle.
    pub api: String,
    /// Window size string, defaults merged.
    pub window_size: Option<String>,
    /// Window position string, defaults merged.
    pub window_position: Option<String>,
    /// Snap windows to the background-margin grid.
    pub snap_enabled: bool,
}

/// Owns the validated settings and a provider reference for one viewer
/// instance, and derives the requested window from a focal position.
///
/// Per-instance by construction: there is no process-wide settings state.
pub struct Configuration {
    settings: Settings,
    provider: Rc<dyn MatrixProvider>,
    reload_strategy: ReloadStrategy,
    /// Matrix extent, fetched from the provider once and memoized for the
    /// session (single-threaded write-once).
    matrix_size: OnceCell<MatrixSize>,
}

fn validate(options: &RawOptions) -> Result<()> {
    if options.active.is_none() {
        return Err(MatviewError::InvalidConfig { field: "active" });
    }
    if options.api.as_deref().map_or(true, |s| s.trim().is_empty()) {
        return Err(MatviewError::InvalidConfig { field: "api" });
    }
    if let Some(size) = &options.window_size {
        if geometry::parse_position(size).is_err() {
            return Err(MatviewError::InvalidConfig {
                field: "windowSize",
            });
        }
    }
    if let Some(position) = &options.window_position {
        if geometry::parse_position(position).is_err() {
            return Err(MatviewError::InvalidConfig {
                field: "windowPosition",
            });
        }
    }
    Ok(())
}

impl Configuration {
    /// Validate `options`, merge defaults and bind the provider.
    ///
    /// Fails with [`MatviewError::InvalidConfig`] naming the offending
    /// field. A failure here must prevent the viewer from initializing at
    /// all; required fields never silently fall back to defaults.
    pub fn new(options: RawOptions, provider: Rc<dyn MatrixProvider>) -> Result<Self> {
        validate(&options)?;
        let settings = Settings {
            active: options.active == Some(true),
            api: options.api.unwrap_or_default(),
            window_size: options
                .window_size
                .or_else(|| Some(DEFAULT_WINDOW_SIZE.to_string())),
            window_position: options
                .window_position
                .or_else(|| Some(DEFAULT_WINDOW_POSITION.to_string())),
            snap_enabled: options.snap_enabled.unwrap_or(false),
        };
        Ok(Self {
            settings,
            provider,
            reload_strategy: ReloadStrategy::default(),
            matrix_size: OnceCell::new(),
        })
    }

    /// Read-only snapshot of the validated settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The bound provider.
    #[must_use]
    pub fn provider(&self) -> &Rc<dyn MatrixProvider> {
        &self.provider
    }

    /// Configured window size, derived from the `"height,width"` string.
    ///
    /// `None` means no size was ever configured and the caller should fall
    /// back to the natural viewport size.
    pub fn window_size(&self) -> Result<Option<Size>> {
        match &self.settings.window_size {
            Some(text) => {
                let position = geometry::parse_position(text)?;
                Ok(Some(Size {
                    height: position.row,
                    width: position.col,
                }))
            }
            None => Ok(None),
        }
    }

    /// Configured initial window position.
    pub fn window_position(&self) -> Result<Option<Position>> {
        match &self.settings.window_position {
            Some(text) => Ok(Some(geometry::parse_position(text)?)),
            None => Ok(None),
        }
    }

    /// The fixed background-margin size.
    #[must_use]
    pub fn background_cells(&self) -> u32 {
        N_BACKGROUND_CELLS
    }

    /// The configured re-window strategy.
    #[must_use]
    pub fn reload_strategy(&self) -> ReloadStrategy {
        self.reload_strategy
    }

    /// Whether fetched windows snap to the background-margin grid.
    #[must_use]
    pub fn snap_enabled(&self) -> bool {
        self.settings.snap_enabled
    }

    /// Total matrix dimensions, fetched from the provider once and memoized.
    ///
    /// Fails with [`MatviewError::ProviderUnavailable`] if the provider
    /// cannot report a size; an unresolved extent is never cached.
    pub fn matrix_size(&self) -> Result<MatrixSize> {
        if let Some(size) = self.matrix_size.get() {
            return Ok(*size);
        }
        let size = self
            .provider
            .matrix_size()
            .ok_or(MatviewError::ProviderUnavailable)?;
        Ok(*self.matrix_size.get_or_init(|| size))
    }

    /// Derive the window that must be materialized around `focal`.
    ///
    /// The one place geometry, configuration and provider state meet. Pure
    /// given fixed configuration and provider state: repeated calls with the
    /// same focal position yield identical windows.
    pub fn cell_window(&self, focal: Position) -> Result<Window> {
        let matrix = self.matrix_size()?;
        let size = self.window_size()?;
        geometry::compute_window(focal, size, self.background_cells(), Some(matrix))
    }
}
