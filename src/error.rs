//! Crate Error Type
//!
//! Wraps the errors of the native layers. The timer itself never fails.

use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::timer::driver::DriverError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    #[error("Timer error: {0}")]
    Driver(#[from] DriverError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_layer_errors() {
        let invalid = ConfigError::Invalid("timer.frame_interval_ms must be greater than 0".into());
        let err: Error = invalid.into();
        assert_eq!(
            err.to_string(),
            "Config error: Invalid configuration: timer.frame_interval_ms must be greater than 0"
        );

        let err: Error = DriverError::Stopped.into();
        assert_eq!(err.to_string(), "Timer error: timer driver has stopped");
    }
}
