use crate::api::error::ApiError;
use log::LevelFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a dashboard-section load failure. Load failures degrade the
    /// section to its default state, so most are only warnings.
    pub fn classify_load_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Non-critical: Temporary server issues
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: Auth failures, malformed responses
            ApiError::Http { status, .. } if *status == 401 => LogLevel::Error,
            ApiError::Http { status, .. } if *status == 403 => LogLevel::Error,
            ApiError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }

    /// Classify a user-triggered action failure (start module, submit quiz).
    /// These always surface a blocking alert, so they log at error level.
    pub fn classify_action_error(&self, _error: &ApiError) -> LogLevel {
        LogLevel::Error
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_load_error_levels() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_load_error(&http(429)), LogLevel::Debug);
        assert_eq!(classifier.classify_load_error(&http(503)), LogLevel::Warn);
        assert_eq!(classifier.classify_load_error(&http(401)), LogLevel::Error);
        assert_eq!(classifier.classify_load_error(&http(403)), LogLevel::Error);
        assert_eq!(classifier.classify_load_error(&http(404)), LogLevel::Warn);
    }

    #[test]
    fn test_action_error_is_always_error() {
        let classifier = ErrorClassifier::new();
        assert_eq!(
            classifier.classify_action_error(&http(503)),
            LogLevel::Error
        );
    }
}
