use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ControlError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DialkitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Control(#[from] ControlError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("slider.upper must exceed slider.lower".into());
        assert_eq!(
            err.to_string(),
            "config validation error: slider.upper must exceed slider.lower"
        );
    }

    #[test]
    fn control_error_display() {
        let err = ControlError::InvalidArgument("bounds have zero width".into());
        assert_eq!(err.to_string(), "invalid argument: bounds have zero width");
    }

    #[test]
    fn dialkit_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: DialkitError = config_err.into();
        assert!(matches!(err, DialkitError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn dialkit_error_from_control() {
        let control_err = ControlError::InvalidArgument("track width is 0".into());
        let err: DialkitError = control_err.into();
        assert!(matches!(err, DialkitError::Control(_)));
        assert_eq!(err.to_string(), "invalid argument: track width is 0");
    }

    #[test]
    fn dialkit_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DialkitError = io_err.into();
        assert!(matches!(err, DialkitError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
