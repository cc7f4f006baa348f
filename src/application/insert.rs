//! Insert text use case

use crate::domain::error::InsertError;

use super::ports::TextInserter;

/// Which strategy completed the insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertMethod {
    /// Direct write through the accessibility tree, verified.
    Accessibility,
    /// Clipboard plus synthesized paste keystroke, unverified.
    ClipboardPaste,
}

/// Output of a successful insertion.
#[derive(Debug, Clone)]
pub struct InsertOutput {
    /// The strategy that completed.
    pub method: InsertMethod,
    /// Why the accessibility strategy was passed over, when it was.
    pub accessibility_error: Option<InsertError>,
}

/// One-shot insertion use case: the only composition point of the two
/// strategies and the single entry point callers invoke.
pub struct InsertTextUseCase<P, F>
where
    P: TextInserter,
    F: TextInserter,
{
    primary: P,
    fallback: F,
}

impl<P, F> InsertTextUseCase<P, F>
where
    P: TextInserter,
    F: TextInserter,
{
    /// Create the use case from a primary and a fallback strategy
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    /// Insert `text` into the focused application.
    ///
    /// The primary strategy runs first; any failure, regardless of
    /// kind, hands over to the fallback. Nothing is retried beyond that
    /// single handoff, and only a fallback failure is surfaced.
    pub async fn insert(&self, text: &str) -> Result<InsertOutput, InsertError> {
        let primary_error = match self.primary.insert(text).await {
            Ok(()) => {
                return Ok(InsertOutput {
                    method: InsertMethod::Accessibility,
                    accessibility_error: None,
                })
            }
            Err(e) => e,
        };

        match self.fallback.insert(text).await {
            Ok(()) => Ok(InsertOutput {
                method: InsertMethod::ClipboardPaste,
                accessibility_error: Some(primary_error),
            }),
            Err(fallback_error) => {
                // The surfaced error is the fallback's; the primary
                // failure would otherwise be lost on this path.
                eprintln!("Warning: direct insertion had failed first: {}", primary_error);
                Err(fallback_error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedInserter {
        result: Result<(), InsertError>,
        calls: AtomicUsize,
    }

    impl ScriptedInserter {
        fn ok() -> Self {
            Self {
                result: Ok(()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(error: InsertError) -> Self {
            Self {
                result: Err(error),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextInserter for ScriptedInserter {
        async fn insert(&self, _text: &str) -> Result<(), InsertError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn primary_success_skips_the_fallback() {
        let use_case = InsertTextUseCase::new(ScriptedInserter::ok(), ScriptedInserter::ok());

        let output = use_case.insert("text").await.unwrap();
        assert_eq!(output.method, InsertMethod::Accessibility);
        assert!(output.accessibility_error.is_none());
        assert_eq!(use_case.fallback.calls(), 0);
    }

    #[tokio::test]
    async fn every_primary_failure_kind_triggers_the_fallback() {
        let failures = [
            InsertError::PermissionNotGranted,
            InsertError::UnsettableElement {
                role: "AXComboBox".to_string(),
            },
            InsertError::UnsettableApp,
            InsertError::CannotComplete,
            InsertError::ApiDisabled,
            InsertError::GeneralFailure,
        ];

        for failure in failures {
            let use_case = InsertTextUseCase::new(
                ScriptedInserter::failing(failure.clone()),
                ScriptedInserter::ok(),
            );

            let output = use_case.insert("text").await.unwrap();
            assert_eq!(output.method, InsertMethod::ClipboardPaste);
            assert_eq!(output.accessibility_error, Some(failure));
            assert_eq!(use_case.fallback.calls(), 1);
        }
    }

    #[tokio::test]
    async fn both_failing_surfaces_the_fallback_error() {
        let use_case = InsertTextUseCase::new(
            ScriptedInserter::failing(InsertError::UnsettableApp),
            ScriptedInserter::failing(InsertError::FailToCopyPaste(
                "clipboard locked".to_string(),
            )),
        );

        let err = use_case.insert("text").await.unwrap_err();
        assert_eq!(
            err,
            InsertError::FailToCopyPaste("clipboard locked".to_string())
        );
    }

    #[tokio::test]
    async fn no_retries_beyond_the_single_handoff() {
        let use_case = InsertTextUseCase::new(
            ScriptedInserter::failing(InsertError::UnsettableApp),
            ScriptedInserter::failing(InsertError::FailToCopyPaste("locked".to_string())),
        );

        let _ = use_case.insert("text").await;
        assert_eq!(use_case.primary.calls(), 1);
        assert_eq!(use_case.fallback.calls(), 1);
    }
}
