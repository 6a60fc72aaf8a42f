mod error;
mod model;
mod rest;

pub use error::StoreError;
pub use model::{ENTRY_SELECT, Entry, KEYWORD_SELECT, Keyword, KeywordAssociation, LayoutRef};
pub use rest::{RestConnector, RestStore};

use async_trait::async_trait;

/// Read-only queries against the external store.
#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn list_entries(&self) -> Result<Vec<Entry>, StoreError>;

    /// `None` when no entry has this id. The id is passed through unvalidated.
    async fn find_entry(&self, id: &str) -> Result<Option<Entry>, StoreError>;

    async fn entry_keywords(&self, entry_id: &str) -> Result<Vec<KeywordAssociation>, StoreError>;
}

/// Builds a fresh store handle; called once per request.
pub trait Connector: Send + Sync {
    fn connect(&self) -> Result<Box<dyn EntryStore>, StoreError>;
}

/// Collapses a filtered result to the single row it is expected to hold.
pub(crate) fn single<T>(mut rows: Vec<T>) -> Result<Option<T>, StoreError> {
    match rows.len() {
        0 | 1 => Ok(rows.pop()),
        n => Err(StoreError::Query(format!(
            "JSON object requested, multiple ({n}) rows returned"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row() {
        assert_eq!(single::<u8>(vec![]), Ok(None));
        assert_eq!(single(vec![3]), Ok(Some(3)));
        assert!(matches!(single(vec![1, 2]), Err(StoreError::Query(_))));
    }
}
