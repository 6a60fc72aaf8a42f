//! Test utilities.
//!
//! This module is only available when the `testutil` feature is enabled.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::store::{
    Connector, Entry, EntryStore, Keyword, KeywordAssociation, LayoutRef, StoreError,
};

#[derive(Debug, Default)]
struct Rows {
    entries: Vec<Entry>,
    keywords: HashMap<String, Vec<KeywordAssociation>>,
    failure: Option<String>,
}

/// In-memory stand-in for the hosted store.
///
/// Every [`Connector::connect`] call hands out a store sharing the same rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryConnector {
    rows: Arc<Rows>,
}

impl MemoryConnector {
    pub fn new(entries: Vec<Entry>, keywords: Vec<(i64, KeywordAssociation)>) -> Self {
        let mut by_entry: HashMap<String, Vec<KeywordAssociation>> = HashMap::new();
        for (entry_id, association) in keywords {
            by_entry
                .entry(entry_id.to_string())
                .or_default()
                .push(association);
        }
        Self {
            rows: Arc::new(Rows {
                entries,
                keywords: by_entry,
                failure: None,
            }),
        }
    }

    /// A store whose every query fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            rows: Arc::new(Rows {
                failure: Some(message.to_string()),
                ..Rows::default()
            }),
        }
    }

    /// Two entries; entry 42 has two keywords, entry 7 has none.
    pub fn sample() -> Self {
        Self::new(
            vec![
                entry(42, "Hello", "Hola", Some("sunset.css")),
                entry(7, "Sea", "Mar", None),
            ],
            vec![
                (42, keyword(1, "greeting", "Greeting", "Saludo")),
                (42, keyword(2, "casual", "Casual", "Informal")),
            ],
        )
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.rows.failure {
            Some(message) => Err(StoreError::Query(message.clone())),
            None => Ok(()),
        }
    }
}

pub fn entry(id: i64, en: &str, es: &str, css: Option<&str>) -> Entry {
    Entry {
        id: Some(id),
        entry_en: Some(en.to_string()),
        entry_es: Some(es.to_string()),
        layout: css.map(|name| LayoutRef {
            css_file_name: Some(name.to_string()),
        }),
    }
}

pub fn keyword(keyword_id: i64, code: &str, en: &str, es: &str) -> KeywordAssociation {
    KeywordAssociation {
        keyword_id: Some(keyword_id),
        keywords: Keyword {
            keyword: Some(code.to_string()),
            label_en: Some(en.to_string()),
            label_es: Some(es.to_string()),
        },
    }
}

#[async_trait]
impl EntryStore for MemoryConnector {
    async fn list_entries(&self) -> Result<Vec<Entry>, StoreError> {
        self.check()?;
        Ok(self.rows.entries.clone())
    }

    async fn find_entry(&self, id: &str) -> Result<Option<Entry>, StoreError> {
        self.check()?;
        let rows = self
            .rows
            .entries
            .iter()
            .filter(|e| e.id.is_some_and(|entry_id| entry_id.to_string() == id))
            .cloned()
            .collect();
        crate::store::single(rows)
    }

    async fn entry_keywords(&self, entry_id: &str) -> Result<Vec<KeywordAssociation>, StoreError> {
        self.check()?;
        Ok(self.rows.keywords.get(entry_id).cloned().unwrap_or_default())
    }
}

impl Connector for MemoryConnector {
    fn connect(&self) -> Result<Box<dyn EntryStore>, StoreError> {
        Ok(Box::new(self.clone()))
    }
}
