use thiserror::Error;

pub type Result<T> = std::result::Result<T, DemoError>;

/// Coarse classification used by callers that only care about the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    Overflow,
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Overflow => "overflow",
            ErrorKind::Unknown => "unknown",
        }
    }
}

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("{message}")]
    Overflow { message: String },

    #[error("{message}")]
    Unknown { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl DemoError {
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn overflow<S: Into<String>>(message: S) -> Self {
        Self::Overflow {
            message: message.into(),
        }
    }

    pub fn unknown<S: Into<String>>(message: S) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// Build an error of the given kind; used where the kind is only known at runtime.
    pub fn from_kind<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        match kind {
            ErrorKind::InvalidArgument => Self::invalid_argument(message),
            ErrorKind::Overflow => Self::overflow(message),
            ErrorKind::Unknown => Self::unknown(message),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DemoError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            DemoError::Overflow { .. } => ErrorKind::Overflow,
            DemoError::Unknown { .. } | DemoError::Io(_) | DemoError::Config(_) => {
                ErrorKind::Unknown
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_display_bare_message() {
        let err = DemoError::invalid_argument("Input numbers cannot be NaN.");
        assert_eq!(err.to_string(), "Input numbers cannot be NaN.");

        let err = DemoError::overflow("Input numbers cannot be infinite.");
        assert_eq!(err.to_string(), "Input numbers cannot be infinite.");
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            DemoError::invalid_argument("x").kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(DemoError::overflow("x").kind(), ErrorKind::Overflow);
        assert_eq!(DemoError::unknown("x").kind(), ErrorKind::Unknown);

        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: DemoError = io_err.into();
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert!(err.to_string().contains("pipe closed"));

        let err: DemoError = config::ConfigError::Message("bad value".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_from_kind_round_trips_kind() {
        for kind in [
            ErrorKind::InvalidArgument,
            ErrorKind::Overflow,
            ErrorKind::Unknown,
        ] {
            let err = DemoError::from_kind(kind, "message");
            assert_eq!(err.kind(), kind);
            assert_eq!(err.to_string(), "message");
        }
    }

    #[test]
    fn test_kind_as_str() {
        assert_eq!(ErrorKind::InvalidArgument.as_str(), "invalid_argument");
        assert_eq!(ErrorKind::Overflow.as_str(), "overflow");
        assert_eq!(ErrorKind::Unknown.as_str(), "unknown");
    }
}
