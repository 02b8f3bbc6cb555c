//! Error types for recipe validation and loading.

use thiserror::Error;

/// Error codes for recipe validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// T001: Image width or height is zero
    ZeroDimension,
    /// T002: A size parameter (lattice, tile, cell) is zero
    ZeroParameter,
    /// T003: Image dimension is not a multiple of a lattice or tile dimension
    NotDivisible,
    /// T004: Dimensions cannot be split into the 4x4 Wang tile grid
    WangAlignment,
    /// T005: Cells per row must be a power of two
    NotPowerOfTwo,
    /// T006: Image buffer has the wrong number of channels
    ChannelMismatch,
    /// T007: Range minimum is greater than its maximum
    InvalidRange,
    /// T008: Lattice would fall back to box filtering at the base level
    MipFallbackAtBase,
    /// T009: Parameter is not a finite number
    NonFiniteValue,
    /// T010: Image dimension exceeds the supported maximum
    ImageTooLarge,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "T001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::ZeroDimension => "T001",
            ErrorCode::ZeroParameter => "T002",
            ErrorCode::NotDivisible => "T003",
            ErrorCode::WangAlignment => "T004",
            ErrorCode::NotPowerOfTwo => "T005",
            ErrorCode::ChannelMismatch => "T006",
            ErrorCode::InvalidRange => "T007",
            ErrorCode::MipFallbackAtBase => "T008",
            ErrorCode::NonFiniteValue => "T009",
            ErrorCode::ImageTooLarge => "T010",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional recipe path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Path to the offending recipe field (e.g., "generator.lattice_width").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a recipe path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(path) = &self.path {
            write!(f, " (at {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Errors from loading a recipe document.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid recipe JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
