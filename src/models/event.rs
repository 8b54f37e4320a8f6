// Inbound raw performance event and the outbound stats event built from it

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CalculatedStats, ResourceEntry, TimingSnapshot};

/// Outbound field names that always win over same-named payload fields.
pub const RESERVED_FIELDS: [&str; 4] = [
    "calculatedStats",
    "timingValues",
    "resourceEntries",
    "tags",
];

/// Raw browser-only performance event. Every field may be missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfEvent {
    #[serde(default)]
    pub timing: Option<TimingSnapshot>,
    #[serde(default)]
    pub resource_entries: Option<Vec<ResourceEntry>>,
    #[serde(default)]
    pub first_paint: Option<f64>,
    /// Arbitrary fields copied onto the outbound event.
    #[serde(default)]
    pub payload: Option<Map<String, Value>>,
    /// Opaque; forwarded as-is.
    #[serde(default)]
    pub tags: Option<Value>,
}

/// Stats event published on the outbound channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfStatsEvent {
    /// Pass-through payload fields, minus any `RESERVED_FIELDS` keys.
    #[serde(flatten)]
    pub payload: Map<String, Value>,
    pub calculated_stats: CalculatedStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing_values: Option<TimingSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_entries: Option<Vec<ResourceEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
}

impl PerfStatsEvent {
    /// Payload value by key (reserved names are never stored here).
    pub fn payload_field(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}
