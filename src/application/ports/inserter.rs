//! Text insertion strategy interface

use async_trait::async_trait;

use crate::domain::error::InsertError;

/// Port implemented by every insertion strategy.
///
/// The coordinator composes two of these: the accessibility strategy as
/// primary and the clipboard strategy as fallback.
#[async_trait]
pub trait TextInserter: Send + Sync {
    /// Insert `text` into the application that holds keyboard focus.
    async fn insert(&self, text: &str) -> Result<(), InsertError>;
}
