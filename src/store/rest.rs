use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::conf::StoreConfig;

use super::{
    Connector, ENTRY_SELECT, Entry, EntryStore, KEYWORD_SELECT, KeywordAssociation, StoreError,
    single,
};

/// Error body returned by PostgREST, e.g.
/// `{"code":"42P01","message":"relation \"entries\" does not exist",...}`.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Store handle talking to the PostgREST interface of the hosted database.
pub struct RestStore {
    client: Client,
    config: StoreConfig,
}

impl RestStore {
    pub fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// `GET {table}?select=...` with an optional `column=eq.value` filter.
    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
        filter: Option<(&str, &str)>,
    ) -> Result<Vec<T>, StoreError> {
        let mut query = vec![("select", columns.to_string())];
        if let Some((column, value)) = filter {
            query.push((column, format!("eq.{value}")));
        }

        let url = self.config.table_url(table);
        debug!("querying {url} with {query:?}");
        let response = self
            .client
            .get(&url)
            .query(&query)
            .header("apikey", &self.config.key)
            .bearer_auth(&self.config.key)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(StoreError::Query(error_message(status, &body)));
        }
        serde_json::from_slice(&body).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(err) = serde_json::from_slice::<ErrorBody>(body) {
        return err.message;
    }
    let text = String::from_utf8_lossy(body).trim().to_string();
    if !text.is_empty() {
        return text;
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}

#[async_trait]
impl EntryStore for RestStore {
    async fn list_entries(&self) -> Result<Vec<Entry>, StoreError> {
        self.select("entries", ENTRY_SELECT, None).await
    }

    async fn find_entry(&self, id: &str) -> Result<Option<Entry>, StoreError> {
        let rows = self.select("entries", ENTRY_SELECT, Some(("id", id))).await?;
        single(rows)
    }

    async fn entry_keywords(&self, entry_id: &str) -> Result<Vec<KeywordAssociation>, StoreError> {
        self.select("entrykeywords", KEYWORD_SELECT, Some(("entry_id", entry_id)))
            .await
    }
}

/// Hands out a new [`RestStore`] for every request.
pub struct RestConnector {
    config: StoreConfig,
}

impl RestConnector {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }
}

impl Connector for RestConnector {
    fn connect(&self) -> Result<Box<dyn EntryStore>, StoreError> {
        Ok(Box::new(RestStore::connect(&self.config)?))
    }
}
