//! Source-side record types, one per JSON dump.
//!
//! Each type deserializes one line of its newline-delimited source. Required
//! fields mirror the fields every line carries; fields the dumps omit or set
//! to `null` for some lines are optional with a default, so their absence
//! expands to zero rows instead of failing the line.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One line of the business dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub business_id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub stars: f64,
    pub is_open: i64,
    #[serde(default)]
    pub categories: Option<String>,
    #[serde(default)]
    pub attributes: Option<Map<String, Value>>,
    #[serde(default)]
    pub hours: Option<BTreeMap<String, String>>,
}

/// One line of the user dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    pub name: String,
    pub yelping_since: String,
    #[serde(rename = "tipcount")]
    pub tip_count: i32,
    pub fans: i32,
    pub average_stars: f64,
    pub funny: i32,
    pub useful: i32,
    pub cool: i32,
    #[serde(default)]
    pub friends: Option<String>,
}

/// One line of the tip dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipRecord {
    pub user_id: String,
    pub business_id: String,
    pub date: String,
    pub likes: i32,
    pub text: String,
}

/// One line of the check-in dump. `date` joins every check-in timestamp for
/// the business with `", "`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinRecord {
    pub business_id: String,
    #[serde(default)]
    pub date: Option<String>,
}
