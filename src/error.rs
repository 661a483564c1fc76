use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while decoding or encoding audio
#[derive(Error, Debug)]
pub enum PipelineError {
    /// File extension is not one of the accepted audio formats
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),

    /// Audio data could not be decoded
    #[error("corrupt {format} file: {reason}")]
    CorruptFile { format: &'static str, reason: String },

    /// Input signal has zero peak amplitude, normalization is undefined
    #[error("{stage}: input signal is silent (zero peak amplitude)")]
    DegenerateInput { stage: &'static str },

    /// A pipeline parameter is outside its valid range
    #[error("invalid parameter {name} = {value}: {reason}")]
    Parameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Unexpected numeric failure (NaN/Inf propagation)
    #[error("{stage}: numeric failure: {reason}")]
    InternalComputation { stage: &'static str, reason: String },

    /// Failed to write an output artifact
    #[error("failed to encode output audio: {0}")]
    Encode(#[from] hound::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
