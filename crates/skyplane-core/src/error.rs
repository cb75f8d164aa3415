use thiserror::Error;

/// Reasons the orientation stream cannot drive the plane.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SensorError {
    #[error("orientation sensor is not available on this device")]
    Unsupported,
    #[error("permission to read motion sensors was denied")]
    PermissionDenied,
    #[error("no orientation samples received within {waited_ms} ms")]
    Silent { waited_ms: u64 },
    #[error("sensor subscription failed: {0}")]
    Subscribe(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("unknown control mode `{0}` (expected `single-axis` or `two-axis`)")]
    UnknownMode(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("`{key}` out of range: {reason}")]
    OutOfRange { key: &'static str, reason: &'static str },
}
