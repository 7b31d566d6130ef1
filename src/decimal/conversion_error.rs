use thiserror::Error;

/// The reason a `d32` could not be projected onto a native numeric type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    #[error("overflow: value is too large to be represented as {target}")]
    Overflow { target: &'static str },

    #[error("underflow: value is too small to be represented as {target}")]
    Underflow { target: &'static str },

    #[error("NaN cannot be represented as {target}")]
    NotANumber { target: &'static str },
}

impl ConversionError {
    /// Name of the type the conversion was aiming for.
    pub fn target(&self) -> &'static str {
        match *self {
            ConversionError::Overflow { target }
            | ConversionError::Underflow { target }
            | ConversionError::NotANumber { target } => target,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
