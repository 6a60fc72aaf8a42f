use serde::{Deserialize, Serialize};

/// Connection settings for the hosted store.
///
/// `url` and `key` default to empty; an unset value is not rejected here and
/// shows up later as a failed store call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub key: String,
    #[serde(default = "StoreConfig::default_rest_path")]
    pub rest_path: String,
}

impl StoreConfig {
    fn default_rest_path() -> String {
        String::from("/rest/v1")
    }

    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.key.is_empty()
    }

    /// Full URL of a table endpoint, e.g. `https://x.supabase.co/rest/v1/entries`.
    pub fn table_url(&self, table: &str) -> String {
        let base = self.url.trim_end_matches('/');
        match self.rest_path.trim_matches('/') {
            "" => format!("{base}/{table}"),
            path => format!("{base}/{path}/{table}"),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            key: String::new(),
            rest_path: Self::default_rest_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(url: &str, rest_path: &str) -> StoreConfig {
        StoreConfig {
            url: url.to_string(),
            key: "anon".to_string(),
            rest_path: rest_path.to_string(),
        }
    }

    #[test]
    fn test_table_url_joins_rest_path() {
        let conf = store("https://abc.supabase.co/", "/rest/v1");
        assert_eq!(
            conf.table_url("entries"),
            "https://abc.supabase.co/rest/v1/entries"
        );
    }

    #[test]
    fn test_table_url_without_rest_path() {
        let conf = store("http://127.0.0.1:3000", "");
        assert_eq!(conf.table_url("entrykeywords"), "http://127.0.0.1:3000/entrykeywords");
    }

    #[test]
    fn test_unset_store_is_not_configured() {
        assert!(!StoreConfig::default().is_configured());
        assert!(store("http://db", "/rest/v1").is_configured());
    }
}
