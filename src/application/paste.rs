//! Clipboard-and-paste fallback insertion

use async_trait::async_trait;

use crate::domain::error::InsertError;

use super::ports::{Clipboard, PasteKeystroke, TextInserter};

/// Inserts text by placing it on the clipboard and synthesizing the
/// paste shortcut.
///
/// This is the fallback strategy: it works against applications the
/// accessibility write cannot reach, but it is fire-and-forget. Nothing
/// can read back whether the target application actually pasted, and
/// the synthesized key code names a physical key position, so a
/// non-QWERTY layout may paste the wrong character or nothing at all.
pub struct PasteInsertion<C, K> {
    clipboard: C,
    keystroke: K,
}

impl<C, K> PasteInsertion<C, K>
where
    C: Clipboard,
    K: PasteKeystroke,
{
    /// Create the strategy over a clipboard and a paste keystroke adapter
    pub fn new(clipboard: C, keystroke: K) -> Self {
        Self {
            clipboard,
            keystroke,
        }
    }
}

#[async_trait]
impl<C, K> TextInserter for PasteInsertion<C, K>
where
    C: Clipboard,
    K: PasteKeystroke,
{
    async fn insert(&self, text: &str) -> Result<(), InsertError> {
        self.clipboard.set_text(text).await?;
        self.keystroke.send_paste().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct RecordingClipboard {
        content: Mutex<Option<String>>,
        fail: bool,
    }

    impl RecordingClipboard {
        fn new() -> Self {
            Self {
                content: Mutex::new(None),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                content: Mutex::new(None),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl Clipboard for RecordingClipboard {
        async fn set_text(&self, text: &str) -> Result<(), InsertError> {
            if self.fail {
                return Err(InsertError::FailToCopyPaste("clipboard locked".to_string()));
            }
            *self.content.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    struct CountingKeystroke {
        sent: AtomicUsize,
    }

    impl CountingKeystroke {
        fn new() -> Self {
            Self {
                sent: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PasteKeystroke for CountingKeystroke {
        async fn send_paste(&self) -> Result<(), InsertError> {
            self.sent.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn clipboard_holds_the_exact_text_after_success() {
        let strategy = PasteInsertion::new(RecordingClipboard::new(), CountingKeystroke::new());

        // No trimming or escaping, byte for byte.
        let text = "  line one\nline two\t\n";
        strategy.insert(text).await.unwrap();

        assert_eq!(
            strategy.clipboard.content.lock().unwrap().as_deref(),
            Some(text)
        );
        assert_eq!(strategy.keystroke.sent.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn clipboard_failure_skips_the_keystroke() {
        let strategy = PasteInsertion::new(RecordingClipboard::failing(), CountingKeystroke::new());

        let err = strategy.insert("text").await.unwrap_err();
        assert_eq!(
            err,
            InsertError::FailToCopyPaste("clipboard locked".to_string())
        );
        assert_eq!(strategy.keystroke.sent.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn keystroke_failure_propagates() {
        struct FailingKeystroke;

        #[async_trait]
        impl PasteKeystroke for FailingKeystroke {
            async fn send_paste(&self) -> Result<(), InsertError> {
                Err(InsertError::FailToCopyPaste("no event source".to_string()))
            }
        }

        let strategy = PasteInsertion::new(RecordingClipboard::new(), FailingKeystroke);
        let err = strategy.insert("text").await.unwrap_err();
        assert!(matches!(err, InsertError::FailToCopyPaste(_)));
    }
}
