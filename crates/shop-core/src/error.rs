//! # Error Types
//!
//! Domain-specific error types for shop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shop-core errors (this file)                                           │
//! │  └── CoreError        - Catalog lookup and parsing failures             │
//! │                                                                         │
//! │  app errors (apps/shop)                                                 │
//! │  ├── ApiError         - What a host sees (serialized)                   │
//! │  └── ConfigError      - Malformed environment                           │
//! │                                                                         │
//! │  Flow: CoreError → ApiError → host                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart merge and cart total never fail, so they have no error variants.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this id in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Catalog JSON could not be parsed.
    #[error("Invalid catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
