// Navigation timing snapshot (raw browser `performance.timing` values)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::IsEmpty;

/// Named navigation timestamps on a common clock (ms), kept exactly as received so the
/// snapshot re-serializes unchanged into `timingValues`. Numbers are read as `f64` only
/// when a span is computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimingSnapshot(Map<String, Value>);

impl TimingSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Numeric timestamp for a browser field such as `fetchStart`; `None` when the field is
    /// missing or not a number.
    pub fn get(&self, field: &str) -> Option<f64> {
        self.0.get(field).and_then(Value::as_f64)
    }

    /// The value exactly as the browser sent it.
    pub fn raw(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// `end - start`, or `None` when either field is missing or non-numeric.
    pub fn span(&self, start: &str, end: &str) -> Option<f64> {
        Some(self.get(end)? - self.get(start)?)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for TimingSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<Map<String, Value>> for TimingSnapshot {
    fn from(raw: Map<String, Value>) -> Self {
        Self(raw)
    }
}

impl IsEmpty for TimingSnapshot {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}
