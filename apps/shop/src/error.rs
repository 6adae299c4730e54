//! # API Error Type
//!
//! Unified error type for shop commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  add_to_cart(product_id)                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Catalog lookup ─── CoreError::ProductNotFound ──► ApiError NOT_FOUND   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Catalog load ───── CoreError::CatalogParse ─────► ApiError INVALID_..  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ──────────────────────────────────────────────────────────►    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors are serializable so a host can show them directly:
//! ```json
//! { "code": "NOT_FOUND", "message": "Product not found: 9" }
//! ```

use serde::Serialize;
use shop_core::CoreError;

use crate::state::ConfigError;

/// API error returned from commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product id unknown to the catalog
    NotFound,

    /// Catalog data could not be parsed
    InvalidCatalog,

    /// Environment configuration is malformed
    ConfigError,

    /// Anything else (I/O at startup)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::CatalogParse(e) => {
                tracing::error!("Catalog parse failed: {}", e);
                ApiError::new(ErrorCode::InvalidCatalog, format!("Invalid catalog: {}", e))
            }
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::ProductId;

    #[test]
    fn test_not_found_from_core() {
        let err: ApiError = CoreError::ProductNotFound(ProductId::new(9)).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 9");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("Product", 9);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "NOT_FOUND", "message": "Product not found: 9" })
        );
    }

    #[test]
    fn test_display() {
        let err = ApiError::internal("boom");
        assert_eq!(err.to_string(), "[Internal] boom");
    }
}
