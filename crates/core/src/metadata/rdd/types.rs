use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One record of a remote data document. The payload shape is owned by the
/// upstream document; only the nested `docs.hidden` flag is interpreted here.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct RddEntry(Value);

impl RddEntry {
    pub fn new(value: Value) -> Self {
        RddEntry(value)
    }

    /// Entries flagged `docs.hidden: true` are excluded from published
    /// output. Any other shape of the flag counts as visible.
    pub fn is_hidden(&self) -> bool {
        self.0
            .get("docs")
            .and_then(|docs| docs.get("hidden"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }
}

/// The parsed form of a remote data document: a list of entries.
pub type RddDocument = Vec<RddEntry>;
