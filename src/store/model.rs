//! Row shapes returned by the store, serialised unchanged to HTTP clients.
//!
//! Every column except the embedded keyword is nullable here and relayed as
//! JSON `null`. A value of the wrong type is a decode error.

use serde::{Deserialize, Serialize};

/// Columns selected for an entry, with its layout embedded.
pub const ENTRY_SELECT: &str = "id,entry_en,entry_es,layout(css_file_name)";

/// Columns selected for an entry's keywords; `!inner` drops associations
/// whose keyword row is missing.
pub const KEYWORD_SELECT: &str = "keyword_id,keywords!inner(keyword,label_en,label_es)";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: Option<i64>,
    pub entry_en: Option<String>,
    pub entry_es: Option<String>,
    pub layout: Option<LayoutRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutRef {
    pub css_file_name: Option<String>,
}

/// One row of `entrykeywords` joined to its keyword.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordAssociation {
    pub keyword_id: Option<i64>,
    pub keywords: Keyword,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Keyword {
    pub keyword: Option<String>,
    pub label_en: Option<String>,
    pub label_es: Option<String>,
}
