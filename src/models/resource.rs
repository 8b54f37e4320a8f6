// Resource timing entries and their coarse type classification

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// One `PerformanceResourceTiming` record. Only `name` and `duration` feed the stats;
/// every other field is carried along untouched. `duration` stays a JSON number so an
/// integer duration re-serializes as an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub name: String,
    pub duration: Number,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceEntry {
    /// Non-finite durations have no JSON form and are stored as 0.
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration: Number::from_f64(duration).unwrap_or_else(|| Number::from(0)),
            extra: Map::new(),
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration.as_f64().unwrap_or_default()
    }

    pub fn resource_type(&self) -> Option<ResourceType> {
        ResourceType::classify(&self.name)
    }
}

/// Resource bucket used for `resources_avg_load_time`; serializes lowercase (e.g. "image").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Css,
    Js,
    Image,
}

impl ResourceType {
    /// Classify by the text after the last `.` in `name` (the whole name if there is none).
    /// Matching is by prefix, so `app.js?v=3` is `Js` and `data.json` is `Js` too.
    pub fn classify(name: &str) -> Option<Self> {
        let ext = name.rsplit('.').next().unwrap_or(name);
        if ext.starts_with("css") {
            Some(ResourceType::Css)
        } else if ext.starts_with("js") {
            Some(ResourceType::Js)
        } else if ["png", "svg", "jpg"].iter().any(|p| ext.starts_with(p)) {
            Some(ResourceType::Image)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Css => "css",
            ResourceType::Js => "js",
            ResourceType::Image => "image",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
