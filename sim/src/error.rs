use thiserror::Error;

/// Construction-time rejection of a configuration. Runtime stepping never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be finite")]
    NonFinite { name: &'static str },
    #[error("{name} must be > 0 (got {value})")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must be >= 0 (got {value})")]
    Negative { name: &'static str, value: f32 },
    #[error("{name}: min {min} is greater than max {max}")]
    InvertedRange { name: &'static str, min: f32, max: f32 },
    #[error("{name}: range [{min}, {max}] must contain 0")]
    RangeExcludesZero { name: &'static str, min: f32, max: f32 },
    #[error("{name} must lie in {expected} (got {value})")]
    OutOfRange { name: &'static str, expected: &'static str, value: f32 },
    #[error("{name} must be a non-zero vector")]
    ZeroVector { name: &'static str },
    #[error("wave component {index}: {source}")]
    Wave {
        index: usize,
        #[source]
        source: Box<ConfigError>,
    },
}

pub(crate) fn finite(name: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() { Ok(value) } else { Err(ConfigError::NonFinite { name }) }
}

pub(crate) fn positive(name: &'static str, value: f32) -> Result<f32, ConfigError> {
    finite(name, value)?;
    if value > 0.0 { Ok(value) } else { Err(ConfigError::NonPositive { name, value }) }
}

pub(crate) fn non_negative(name: &'static str, value: f32) -> Result<f32, ConfigError> {
    finite(name, value)?;
    if value >= 0.0 { Ok(value) } else { Err(ConfigError::Negative { name, value }) }
}
