use std::fs;
use std::path::Path;

use serde_json::{Map, Number, Value};

use crate::types::{AppError, AppResult};

/// Precomputed set statistics as written by the upstream data generator
/// (`src/data/setInfo.json`).
///
/// Every field is optional at every level. Accessors take a key path and
/// fall back to zero, an empty string or an empty list, so a sparse document
/// renders as zeros rather than failing.
#[derive(Debug, Clone, Default)]
pub struct StatisticsDocument {
    root: Map<String, Value>,
}

impl StatisticsDocument {
    /// Read and parse the statistics file at `path`.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::InputNotFound(path.to_path_buf()));
        }

        let malformed = |reason: String| AppError::MalformedInput {
            path: path.to_path_buf(),
            reason,
        };
        let contents = fs::read_to_string(path).map_err(|e| malformed(e.to_string()))?;
        Self::from_json(&contents).map_err(malformed)
    }

    /// Parse a document from JSON text. The root must be an object.
    pub fn from_json(contents: &str) -> Result<Self, String> {
        let value: Value = serde_json::from_str(contents).map_err(|e| e.to_string())?;
        Self::try_from(value)
    }

    fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.root.get(*first)?;
        for key in rest {
            current = current.as_object()?.get(*key)?;
        }
        Some(current)
    }

    /// Non-negative integer at `path`, or 0.
    pub fn count(&self, path: &[&str]) -> u64 {
        self.lookup(path).and_then(as_count).unwrap_or(0)
    }

    /// Number at `path` exactly as written in the document, or 0.
    pub fn number(&self, path: &[&str]) -> Number {
        match self.lookup(path) {
            Some(Value::Number(n)) => n.clone(),
            _ => Number::from(0u64),
        }
    }

    /// String at `path`, or "".
    pub fn text(&self, path: &[&str]) -> &str {
        self.lookup(path).and_then(Value::as_str).unwrap_or("")
    }

    /// Key/count pairs of the object at `path`, in document order.
    pub fn entries(&self, path: &[&str]) -> Vec<(&str, u64)> {
        self.lookup(path)
            .and_then(Value::as_object)
            .map(|object| {
                object
                    .iter()
                    .map(|(key, value)| (key.as_str(), as_count(value).unwrap_or(0)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Names of the set mechanics. Entries are either `{ "name": .. }`
    /// objects or bare strings; anything else is skipped.
    pub fn mechanic_names(&self) -> Vec<&str> {
        let Some(Value::Array(items)) = self.lookup(&["mechanics"]) else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(name.as_str()),
                Value::Object(fields) => fields.get("name").and_then(Value::as_str),
                _ => None,
            })
            .filter(|name| !name.trim().is_empty())
            .collect()
    }

    /// Card count used as the denominator for density figures.
    /// Never 0: an absent, unparsable or zero `cardCount` yields 1.
    pub fn denominator(&self) -> u64 {
        self.count(&["cardCount"]).max(1)
    }
}

impl TryFrom<Value> for StatisticsDocument {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, String> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(format!(
                "expected an object at the top level, found {}",
                kind(&other)
            )),
        }
    }
}

/// Counts arrive as integers, floats or numeric strings; the generator
/// writes `cardCount` as text.
fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        _ => None,
    }
}

fn truncate(f: f64) -> Option<u64> {
    (f.is_finite() && f >= 0.0).then(|| f.trunc() as u64)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
