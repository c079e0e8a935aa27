//! Error types for rampgen

use thiserror::Error;

/// Main error type for rampgen operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to persist ramp `{name}`: {source}")]
    Persist {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid ramp batch: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid batch configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid buffer dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

/// A rule violated by one entry of a ramp batch.
///
/// Every variant carries the position of the offending entry in the batch so
/// the source configuration can be corrected directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("duplicate ramp name `{name}` (entry {index})")]
    DuplicateName { index: usize, name: String },

    #[error("ramp `{name}` (entry {index}) has invalid size {width}x{height}; width and height must be within 1..=2048")]
    InvalidSize {
        index: usize,
        name: String,
        width: i64,
        height: i64,
    },

    #[error("ramp `{name}` (entry {index}) has uninitialized data: no gradients")]
    MissingGradients { index: usize, name: String },

    #[error("ramp at entry {index} has an empty name")]
    EmptyName { index: usize },

    #[error("ramp name `{name}` (entry {index}) is not a plain file name")]
    InvalidName { index: usize, name: String },

    #[error("ramp `{name}` (entry {index}): gradient {gradient} has no {channel} keys")]
    EmptyGradient {
        index: usize,
        name: String,
        gradient: usize,
        channel: &'static str,
    },

    #[error("ramp `{name}` (entry {index}) blends {count} gradients but has no remap curve")]
    MissingRemapCurve {
        index: usize,
        name: String,
        count: usize,
    },
}

impl ValidationError {
    /// Position of the offending entry in the batch.
    pub fn index(&self) -> usize {
        match self {
            Self::DuplicateName { index, .. }
            | Self::InvalidSize { index, .. }
            | Self::MissingGradients { index, .. }
            | Self::EmptyName { index }
            | Self::InvalidName { index, .. }
            | Self::EmptyGradient { index, .. }
            | Self::MissingRemapCurve { index, .. } => *index,
        }
    }

    /// Name of the offending entry, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::EmptyName { .. } => None,
            Self::DuplicateName { name, .. }
            | Self::InvalidSize { name, .. }
            | Self::MissingGradients { name, .. }
            | Self::InvalidName { name, .. }
            | Self::EmptyGradient { name, .. }
            | Self::MissingRemapCurve { name, .. } => Some(name),
        }
    }
}

/// Result type alias for rampgen operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_entry() {
        let err = ValidationError::InvalidSize {
            index: 3,
            name: "toon".into(),
            width: 2049,
            height: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("toon"));
        assert!(msg.contains("2049x5"));
        assert_eq!(err.index(), 3);
        assert_eq!(err.name(), Some("toon"));
    }

    #[test]
    fn validation_wraps_into_error() {
        let err: Error = ValidationError::EmptyName { index: 0 }.into();
        assert!(matches!(err, Error::Validation(ValidationError::EmptyName { index: 0 })));
        assert!(err.to_string().starts_with("Invalid ramp batch"));
    }
}
