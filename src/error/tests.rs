//! Tests for error handling system

#[cfg(test)]
mod tests {
    use super::super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_error_severity() {
        // Test warning level errors
        assert_eq!(
            MetriscopeError::PlotRender {
                path: PathBuf::from("plots/scatter.png"),
                message: "no backend".to_string(),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            }
            .severity(),
            ErrorSeverity::Warning
        );

        // Test error level errors
        assert_eq!(
            MetriscopeError::Io {
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            }
            .severity(),
            ErrorSeverity::Error
        );

        assert_eq!(
            MetriscopeError::missing_column("Estrelas", "data.csv").severity(),
            ErrorSeverity::Error
        );

        // Test critical level errors
        assert_eq!(
            MetriscopeError::Config {
                message: "Invalid config".to_string(),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            }
            .severity(),
            ErrorSeverity::Critical
        );

        assert_eq!(
            MetriscopeError::DataFileNotFound {
                path: PathBuf::from("missing.csv"),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            }
            .severity(),
            ErrorSeverity::Critical
        );
    }

    #[test]
    fn test_is_critical() {
        assert!(MetriscopeError::config_error("Invalid config").is_critical());
        assert!(!MetriscopeError::io_error(io::Error::new(io::ErrorKind::NotFound, "x"))
            .is_critical());
        assert!(!MetriscopeError::plot_render("a.png", "boom").is_critical());
    }

    #[test]
    fn test_user_message() {
        let err = MetriscopeError::missing_column("Média CBO", "data.csv");
        let message = err.user_message();
        assert!(message.contains("Média CBO"));
        assert!(message.contains("data.csv"));
        assert!(message.contains("[columns]"));

        let err = MetriscopeError::DataFileNotFound {
            path: PathBuf::from("nowhere.csv"),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        };
        assert!(err.user_message().contains("nowhere.csv"));
    }

    #[test]
    fn test_suggestions() {
        let err = MetriscopeError::missing_column("LOC", "data.csv");
        assert!(err.suggestion().is_some());

        let err = MetriscopeError::analysis_error("boom");
        assert!(err.suggestion().is_none());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: MetriscopeError = io_err.into();
        assert!(matches!(err, MetriscopeError::Io { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = MetriscopeError::missing_column("Anos", "repos.csv");
        assert_eq!(err.to_string(), "Column 'Anos' not found in repos.csv");
    }
}
