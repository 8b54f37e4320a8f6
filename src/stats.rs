// Turn raw navigation/resource timing into CalculatedStats, and build the outbound event.

use std::collections::BTreeMap;

use crate::models::{
    CalculatedStats, IsEmpty, Metric, PerfEvent, PerfStatsEvent, RESERVED_FIELDS, ResourceEntry,
    ResourceType, TimingSnapshot,
};

/// Derive page-load and resource metrics. Pure: same inputs, same output, inputs untouched.
///
/// Empty `timing` skips every timing metric (including `first_paint_time`); empty
/// `resource_entries` skips `resources_avg_load_time` entirely.
pub fn compute_stats(
    timing: Option<&TimingSnapshot>,
    resource_entries: Option<&[ResourceEntry]>,
    first_paint: Option<f64>,
) -> CalculatedStats {
    let mut stats = CalculatedStats::default();

    if let Some(timing) = timing.filter(|t| !t.is_empty_value()) {
        stats.metrics = timing_metrics(timing);
        if let Some(fp) = first_paint.filter(|fp| is_truthy(*fp)) {
            stats.metrics.insert(Metric::FirstPaintTime, Some(fp));
        }
    }

    if let Some(entries) = resource_entries.filter(|e| !e.is_empty_value()) {
        stats.resources_avg_load_time = Some(resource_averages(entries));
    }

    stats
}

/// Every timing metric gets a key. No clamping: clock anomalies upstream show up as
/// negative spans, and a missing or non-numeric operand gives `None`.
fn timing_metrics(timing: &TimingSnapshot) -> BTreeMap<Metric, Option<f64>> {
    Metric::TIMING_SPANS
        .iter()
        .map(|&(metric, start, end)| {
            let value = timing.span(start, end);
            if value.is_none() {
                tracing::trace!(metric = %metric, start, end, "timing operand missing; metric is null");
            }
            (metric, value)
        })
        .collect()
}

/// Mean duration per resource type, truncated toward zero. Unclassified entries are dropped.
fn resource_averages(entries: &[ResourceEntry]) -> BTreeMap<ResourceType, i64> {
    let mut durations: BTreeMap<ResourceType, Vec<f64>> = BTreeMap::new();
    for entry in entries {
        if let Some(resource_type) = entry.resource_type() {
            durations
                .entry(resource_type)
                .or_default()
                .push(entry.duration_ms());
        }
    }
    durations
        .into_iter()
        .filter_map(|(resource_type, values)| {
            mean(&values).map(|avg| (resource_type, avg.trunc() as i64))
        })
        .collect()
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn is_truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

/// Build the outbound event: payload fields, then the reserved computed/raw fields on top.
pub fn map_perf_event(event: &PerfEvent) -> PerfStatsEvent {
    let calculated_stats = compute_stats(
        event.timing.as_ref(),
        event.resource_entries.as_deref(),
        event.first_paint,
    );

    let mut payload = event.payload.clone().unwrap_or_default();
    payload.retain(|key, _| !RESERVED_FIELDS.contains(&key.as_str()));

    PerfStatsEvent {
        payload,
        calculated_stats,
        timing_values: event.timing.clone(),
        resource_entries: event.resource_entries.clone(),
        tags: event.tags.clone(),
    }
}
