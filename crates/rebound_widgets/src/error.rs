//! Widget error types

use thiserror::Error;

/// Widget-related errors
#[derive(Error, Debug)]
pub enum WidgetError {
    /// Translation factor outside the accepted (0, 1] range
    #[error("invalid overscroll translation factor: {0} (must be within (0, 1])")]
    InvalidTranslationFactor(f32),

    /// A header content view has already been attached
    #[error("refresh header content has already been attached")]
    HeaderAlreadyAttached,
}

/// Result type for widget operations
pub type Result<T> = std::result::Result<T, WidgetError>;
