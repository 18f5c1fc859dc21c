//! Error types for the switch crate.

use thiserror::Error;

/// Boxed error raised by a caller-supplied predicate or result function.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when building or dispatching a switch.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// Error raised by a predicate or result function.
    ///
    /// The engine never rewrites these: the message and source are the ones
    /// the caller's function produced.
    #[error(transparent)]
    Callback(BoxError),
}

impl SwitchError {
    /// Wraps an arbitrary error raised inside a caller function.
    pub fn callback<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        SwitchError::Callback(error.into())
    }

    /// Creates a callback error from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        let message: String = message.into();
        SwitchError::Callback(message.into())
    }

    /// Returns the underlying callback error, if this is one.
    pub fn as_callback(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            SwitchError::Callback(err) => Some(err.as_ref()),
            _ => None,
        }
    }

    /// Attempts to downcast a callback error to a concrete type.
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.as_callback().and_then(|err| err.downcast_ref::<E>())
    }
}

/// Result type for switch operations.
pub type Result<T> = std::result::Result<T, SwitchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("missing key {0}")]
    struct MissingKey(String);

    #[test]
    fn callback_display_is_verbatim() {
        let err = SwitchError::msg("Cannot read property 'isTrue' of undefined");
        assert_eq!(
            err.to_string(),
            "Cannot read property 'isTrue' of undefined"
        );
    }

    #[test]
    fn callback_downcast() {
        let err = SwitchError::callback(MissingKey("bar".into()));
        let inner = err.downcast_ref::<MissingKey>().unwrap();
        assert_eq!(inner.0, "bar");
        assert_eq!(err.to_string(), "missing key bar");
    }

    #[test]
    fn invalid_regex_converts() {
        let err: SwitchError = regex::Regex::new("(").unwrap_err().into();
        assert!(matches!(err, SwitchError::InvalidRegex(_)));
        assert!(err.as_callback().is_none());
        assert!(err.to_string().starts_with("invalid regex pattern"));
    }
}
