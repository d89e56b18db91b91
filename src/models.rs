//! Quotation Models
//!
//! Persisted shapes for saved quotations. Field names follow the stored JSON
//! (camelCase); every field defaults when absent so older or hand-edited
//! records still load.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Fresh unique token for quotations and list entries
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Today's date as `YYYY-MM-DD` (UTC)
pub fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Current instant as an RFC 3339 UTC timestamp
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Ids were written as numbers by older builds and as strings since
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Project details shown at the top of the quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientInfo {
    pub name: String,
    /// `YYYY-MM-DD`
    pub date: String,
}

impl Default for ClientInfo {
    fn default() -> Self {
        Self { name: String::new(), date: today() }
    }
}

/// A page charge as entered: either a number or the raw text of the input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Charge {
    Number(f64),
    Text(String),
}

impl Default for Charge {
    fn default() -> Self {
        Charge::Number(0.0)
    }
}

impl<'de> Deserialize<'de> for Charge {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => Charge::Number(n.as_f64().unwrap_or(0.0)),
            Value::String(s) => Charge::Text(s),
            _ => Charge::default(),
        })
    }
}

impl Charge {
    /// Numeric value for totals. Blank or non-numeric text counts as 0.
    pub fn amount(&self) -> f64 {
        match self {
            Charge::Number(n) if n.is_finite() => *n,
            Charge::Number(_) => 0.0,
            Charge::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return 0.0;
                }
                s.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
            }
        }
    }

    /// Text to put back into the charge input
    pub fn as_input(&self) -> String {
        match self {
            Charge::Number(n) => n.to_string(),
            Charge::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for Charge {
    fn from(n: f64) -> Self {
        Charge::Number(n)
    }
}

impl From<&str> for Charge {
    fn from(s: &str) -> Self {
        Charge::Text(s.to_string())
    }
}

/// One priced row of the quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub name: String,
    pub charge: Charge,
}

impl Default for LineItem {
    fn default() -> Self {
        Self { id: new_id(), name: String::new(), charge: Charge::default() }
    }
}

impl LineItem {
    pub fn new(name: impl Into<String>, charge: impl Into<Charge>) -> Self {
        Self { id: new_id(), name: name.into(), charge: charge.into() }
    }
}

/// An unpriced add-on included with the quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeItem {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub description: String,
}

impl Default for FreeItem {
    fn default() -> Self {
        Self { id: new_id(), description: String::new() }
    }
}

impl FreeItem {
    pub fn new(description: impl Into<String>) -> Self {
        Self { id: new_id(), description: description.into() }
    }
}

/// Read-only view of the quotation being composed, handed to preview/export
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSnapshot {
    pub client_info: ClientInfo,
    pub pages: Vec<LineItem>,
    pub free_items: Vec<FreeItem>,
    pub terms: Vec<String>,
    pub total: f64,
}

impl QuoteSnapshot {
    /// Free items with something to show
    pub fn visible_free_items(&self) -> impl Iterator<Item = &FreeItem> {
        self.free_items.iter().filter(|item| !item.description.trim().is_empty())
    }
}

/// What the user asks to save: a name plus the current form snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct QuotationDraft {
    pub name: String,
    pub snapshot: QuoteSnapshot,
}

/// A saved quotation (matches the persisted JSON record)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Quotation {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub name: String,
    pub client_info: ClientInfo,
    pub pages: Vec<LineItem>,
    pub free_items: Vec<FreeItem>,
    pub terms: Vec<String>,
    /// Sum of page charges when saved; not recomputed on load
    pub total: f64,
    /// RFC 3339 save time
    pub date: String,
}

impl Quotation {
    /// Build a record from a draft with the given id and timestamp
    pub fn from_draft(draft: QuotationDraft, id: String, date: String) -> Self {
        let QuotationDraft { name, snapshot } = draft;
        Self {
            id,
            name,
            client_info: snapshot.client_info,
            pages: snapshot.pages,
            free_items: snapshot.free_items,
            terms: snapshot.terms,
            total: snapshot.total,
            date,
        }
    }

    /// Assign fresh ids to the record and any entries that arrived without one
    pub fn fill_missing_ids(&mut self) {
        if self.id.is_empty() {
            self.id = new_id();
        }
        for page in self.pages.iter_mut().filter(|p| p.id.is_empty()) {
            page.id = new_id();
        }
        for item in self.free_items.iter_mut().filter(|i| i.id.is_empty()) {
            item.id = new_id();
        }
    }
}
