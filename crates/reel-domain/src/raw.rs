//! Raw provider rows as extracted from source files

use serde_json::Value;
use std::collections::HashMap;

/// One provider row before normalization.
///
/// Field names vary per provider, so lookups are case-insensitive: keys are
/// lowercased on insert. Null values and blank strings count as absent, the
/// same way an empty CSV cell does.
#[derive(Clone, Debug, Default)]
pub struct RawRecord {
    fields: HashMap<String, Value>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field value. The key is stored lowercased.
    pub fn insert(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_lowercase(), value);
    }

    /// Look up a field by name, case-insensitively.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(&key.to_lowercase())
    }

    /// Return the value of the first alias that is present and usable.
    ///
    /// Null values and blank strings are skipped, so a later alias can still
    /// supply the field.
    pub fn first_of(&self, aliases: &[&str]) -> Option<&Value> {
        aliases
            .iter()
            .filter_map(|alias| self.get(alias))
            .find(|value| !is_absent(value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, Value)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(&key, value);
        }
        record
    }
}

/// Whether a raw value counts as missing
fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
