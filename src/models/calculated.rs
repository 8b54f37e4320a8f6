// Calculated stats: flat metric map plus per-resource-type average load time

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ResourceType;

/// Named duration metric; serializes to its snake_case wire name (e.g. "full_page_load").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Time spent following redirects.
    RedirectionTime,
    /// Initial navigation until the first response byte.
    TimeToFirstByte,
    /// Initial request until all blocking assets are loaded.
    DomContentLoaded,
    /// Initial request until every asset is loaded.
    FullPageLoad,
    Dns,
    TcpConnectionTime,
    /// Full HTML response round trip as seen by the browser.
    BrowserRequestTime,
    BrowserRequestFirstByte,
    /// First byte to last byte of the HTML response.
    BrowserRequestResponseTime,
    /// Parsing the HTML into a DOM tree plus blocking resources.
    DomInteractiveTime,
    /// Parsed HTML until all assets are loaded.
    TotalResourceLoadTime,
    /// Parsed HTML until all blocking assets are loaded.
    TotalBlockingResourceLoadTime,
    FirstPaintTime,
}

impl Metric {
    /// Timing-derived metrics with their `(start, end)` field pair; value is `end - start`.
    pub const TIMING_SPANS: [(Metric, &'static str, &'static str); 12] = [
        (Metric::RedirectionTime, "navigationStart", "fetchStart"),
        (Metric::TimeToFirstByte, "navigationStart", "responseStart"),
        (Metric::DomContentLoaded, "fetchStart", "domContentLoadedEventEnd"),
        (Metric::FullPageLoad, "fetchStart", "loadEventEnd"),
        (Metric::Dns, "domainLookupStart", "domainLookupEnd"),
        (Metric::TcpConnectionTime, "connectStart", "connectEnd"),
        (Metric::BrowserRequestTime, "requestStart", "responseEnd"),
        (Metric::BrowserRequestFirstByte, "requestStart", "responseStart"),
        (Metric::BrowserRequestResponseTime, "responseStart", "responseEnd"),
        (Metric::DomInteractiveTime, "responseEnd", "domInteractive"),
        (Metric::TotalResourceLoadTime, "responseEnd", "loadEventStart"),
        (
            Metric::TotalBlockingResourceLoadTime,
            "responseEnd",
            "domContentLoadedEventStart",
        ),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::RedirectionTime => "redirection_time",
            Metric::TimeToFirstByte => "time_to_first_byte",
            Metric::DomContentLoaded => "dom_content_loaded",
            Metric::FullPageLoad => "full_page_load",
            Metric::Dns => "dns",
            Metric::TcpConnectionTime => "tcp_connection_time",
            Metric::BrowserRequestTime => "browser_request_time",
            Metric::BrowserRequestFirstByte => "browser_request_first_byte",
            Metric::BrowserRequestResponseTime => "browser_request_response_time",
            Metric::DomInteractiveTime => "dom_interactive_time",
            Metric::TotalResourceLoadTime => "total_resource_load_time",
            Metric::TotalBlockingResourceLoadTime => "total_blocking_resource_load_time",
            Metric::FirstPaintTime => "first_paint_time",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat stats map. Any non-empty timing snapshot yields all twelve timing keys; a metric
/// whose operands were missing is `None` and serializes as `null`.
/// `resources_avg_load_time` is absent (not empty) when there were no resource entries, and
/// present but possibly empty when there were.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatedStats {
    #[serde(flatten)]
    pub metrics: BTreeMap<Metric, Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources_avg_load_time: Option<BTreeMap<ResourceType, i64>>,
}

impl CalculatedStats {
    /// Value of a metric; `None` when it was not produced or had a missing operand.
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.metrics.get(&metric).copied().flatten()
    }

    pub fn contains(&self, metric: Metric) -> bool {
        self.metrics.contains_key(&metric)
    }

    /// Truncated mean duration for a resource type, if any entry of that type was seen.
    pub fn avg_load_time(&self, resource_type: ResourceType) -> Option<i64> {
        self.resources_avg_load_time
            .as_ref()?
            .get(&resource_type)
            .copied()
    }

    /// True when neither timing nor resource stats were produced.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty() && self.resources_avg_load_time.is_none()
    }
}
