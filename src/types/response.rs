// src/types/response.rs
//! Response shapes produced by the ranking service

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::fmt;

/// Resume fields the upload endpoint echoes back after extraction.
const EXTRACTED_FIELDS: [&str; 8] = [
    "name",
    "email",
    "phone",
    "skills",
    "experience",
    "degree",
    "university",
    "cgpa",
];

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    #[serde(flatten)]
    pub extracted: Map<String, Value>,
}

impl UploadResponse {
    /// Known extracted fields in a stable order, scalars rendered as text.
    pub fn extracted_fields(&self) -> Vec<(&'static str, String)> {
        EXTRACTED_FIELDS
            .iter()
            .filter_map(|key| {
                self.extracted
                    .get(*key)
                    .and_then(scalar_to_text)
                    .map(|value| (*key, value))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl MatchResponse {
    /// Candidates in service order; `None` when absent or empty.
    pub fn into_ranked(self) -> Option<Vec<Candidate>> {
        self.candidates.filter(|list| !list.is_empty())
    }
}

/// One applicant as ranked by the service. Field names follow the
/// match endpoint exactly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Candidate {
    #[serde(rename = "Name", deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(rename = "Email", deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(rename = "Phone", deserialize_with = "lenient_text")]
    pub phone: String,
    #[serde(rename = "Skills")]
    pub skills: Skills,
    #[serde(rename = "Match Score")]
    pub match_score: f64,
}

/// Skills arrive either as a list or as one comma-joined string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Skills {
    List(Vec<String>),
    Joined(String),
}

impl fmt::Display for Skills {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skills::List(items) => write!(f, "{}", items.join(", ")),
            Skills::Joined(text) => write!(f, "{}", text),
        }
    }
}

fn scalar_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// Spreadsheet-backed services turn all-digit phone columns into numbers.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(String::new()),
        other => scalar_to_text(&other)
            .ok_or_else(|| serde::de::Error::custom(format!("expected text, got {}", other))),
    }
}
