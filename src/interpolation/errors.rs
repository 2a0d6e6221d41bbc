use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: t has {t_len} elements, x has {x_len}")]
    UnequalLength { t_len: usize, x_len: usize },

    #[error("non-finite value in input at index {index}")]
    NonFinite { index: usize },

    #[error("non-finite sample: t = {t}, x = {x}")]
    NonFiniteSample { t: f64, x: f64 },

    #[error("insufficient points: got {got}, need at least {need}")]
    InsufficientPoints { got: usize, need: usize },

    #[error("maximum order must be at least 1")]
    InvalidOrder,

    #[error("index {index} out of range for {len} samples")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("algorithm has not been prepared with a sample set")]
    NotPrepared,

    #[error("empty sample set")]
    EmptyInput,

    #[error("{algorithm} interpolation does not support {operation}")]
    Unsupported {
        algorithm: &'static str,
        operation: &'static str,
    },
}
