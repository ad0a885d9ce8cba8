//! Harness errors
//!
//! Failures of the harness itself, as opposed to the [`Failure`]s the
//! demonstrations raise and handle.
//!
//! [`Failure`]: crate::core::cases::Failure

use thiserror::Error;

/// Why a run stopped before completing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    /// A recoverable failure no frame handled reached the top level
    #[error("uncaught failure in {case}: {category}")]
    Uncaught {
        case: &'static str,
        category: &'static str,
    },

    /// Produced output differs from the case's fixture
    #[error("fixture mismatch in {case} at line {line}: expected {expected:?}, got {actual:?}")]
    FixtureMismatch {
        case: &'static str,
        /// 1-based
        line: usize,
        expected: Option<String>,
        actual: Option<String>,
    },

    /// `--case` named something the catalog does not have
    #[error("unknown case: {0}")]
    UnknownCase(String),
}

impl DemoError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DemoError::Uncaught { .. } => 1,
            DemoError::FixtureMismatch { .. } | DemoError::UnknownCase(_) => 2,
        }
    }

    /// Short machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            DemoError::Uncaught { .. } => "uncaught",
            DemoError::FixtureMismatch { .. } => "fixture_mismatch",
            DemoError::UnknownCase(_) => "unknown_case",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncaught_message_names_category() {
        let err = DemoError::Uncaught {
            case: "unhandled_failure",
            category: "SquareRootError::OutOfBounds",
        };
        assert_eq!(
            err.to_string(),
            "uncaught failure in unhandled_failure: SquareRootError::OutOfBounds"
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(DemoError::UnknownCase("x".into()).exit_code(), 2);
        let mismatch = DemoError::FixtureMismatch {
            case: "c",
            line: 1,
            expected: Some("a".into()),
            actual: None,
        };
        assert_eq!(mismatch.exit_code(), 2);
        assert_eq!(mismatch.kind(), "fixture_mismatch");
    }
}
