//! Structured error types for matview.
//!
//! Every failure is local, synchronous and raised to the immediate caller;
//! nothing is swallowed and nothing retries.

/// All errors that can occur while configuring or driving a matrix view.
#[derive(Debug, thiserror::Error)]
pub enum MatviewError {
    /// Malformed `row,col` position or size string.
    #[error("malformed position string: {0:?}")]
    Format(String),

    /// Missing or contradictory configuration field.
    #[error("invalid configuration field: {field}")]
    InvalidConfig {
        /// Name of the offending field, as it appears in the options object.
        field: &'static str,
    },

    /// Window geometry requested before the matrix extent was resolved.
    #[error("matrix extent unknown")]
    UnknownExtent,

    /// Window geometry requested without a configured window size.
    #[error("window size unavailable")]
    WindowSizeUnavailable,

    /// The provider could not answer a matrix-size query.
    #[error("provider could not report the matrix size")]
    ProviderUnavailable,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatviewError>;

#[cfg(target_arch = "wasm32")]
impl From<MatviewError> for wasm_bindgen::JsValue {
    fn from(e: MatviewError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
