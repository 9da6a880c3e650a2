use thiserror::Error;

/// Errors reported by the stroke engine.
///
/// None of these are fatal; the engine state is left untouched whenever one
/// is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The brush colour string could not be parsed
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),

    /// Brush thickness must be a positive, finite number
    #[error("invalid brush thickness: {0}")]
    InvalidThickness(f32),

    /// Density scale must be a positive, finite number
    #[error("invalid density scale: {0}")]
    InvalidScale(f32),

    /// Extend or commit was called with no stroke in progress
    #[error("no stroke in progress")]
    NoActiveStroke,
}

pub type EngineResult<T> = Result<T, EngineError>;
