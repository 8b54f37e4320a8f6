// Shared test helpers: in-process event bus double and timing fixtures

#![allow(dead_code)]

use perf_stats_emitter::bus::{BusEvent, EventBus, Handler};
use perf_stats_emitter::models::{ResourceEntry, TimingSnapshot};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Synchronous single-process bus: `publish` runs every subscriber in subscription order
/// and records what was published.
pub struct LocalBus<C> {
    handlers: Mutex<HashMap<String, Vec<Handler<C>>>>,
    published: Mutex<Vec<(String, BusEvent, C)>>,
}

impl<C: Clone + Send + Sync + 'static> LocalBus<C> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            handlers: Mutex::new(HashMap::new()),
            published: Mutex::new(Vec::new()),
        })
    }

    /// Everything published on `channel`, in order.
    pub fn published_on(&self, channel: &str) -> Vec<(BusEvent, C)> {
        self.published
            .lock()
            .unwrap()
            .iter()
            .filter(|(ch, _, _)| ch == channel)
            .map(|(_, e, c)| (e.clone(), c.clone()))
            .collect()
    }

    pub fn subscriber_count(&self, channel: &str) -> usize {
        self.handlers
            .lock()
            .unwrap()
            .get(channel)
            .map_or(0, Vec::len)
    }
}

impl<C: Clone + Send + Sync + 'static> EventBus for LocalBus<C> {
    type Context = C;

    fn subscribe(&self, channel: &str, handler: Handler<C>) {
        self.handlers
            .lock()
            .unwrap()
            .entry(channel.to_string())
            .or_default()
            .push(handler);
    }

    fn publish(&self, channel: &str, event: BusEvent, ctx: C) {
        self.published
            .lock()
            .unwrap()
            .push((channel.to_string(), event.clone(), ctx.clone()));
        // Release the lock before dispatch so handlers can publish.
        let handlers = self
            .handlers
            .lock()
            .unwrap()
            .get(channel)
            .cloned()
            .unwrap_or_default();
        for handler in handlers {
            handler(&event, &ctx);
        }
    }
}

/// Every navigation timing field the stats read, with distinct spacing so each metric differs.
pub fn full_timing() -> TimingSnapshot {
    [
        ("navigationStart", 1000.0),
        ("fetchStart", 1010.0),
        ("domainLookupStart", 1012.0),
        ("domainLookupEnd", 1020.0),
        ("connectStart", 1020.0),
        ("connectEnd", 1050.0),
        ("requestStart", 1051.0),
        ("responseStart", 1100.0),
        ("responseEnd", 1180.0),
        ("domInteractive", 1400.0),
        ("domContentLoadedEventStart", 1450.0),
        ("domContentLoadedEventEnd", 1460.0),
        ("loadEventStart", 1900.0),
        ("loadEventEnd", 1910.0),
    ]
    .into_iter()
    .collect()
}

pub fn entries(items: &[(&str, f64)]) -> Vec<ResourceEntry> {
    items
        .iter()
        .map(|(name, duration)| ResourceEntry::new(*name, *duration))
        .collect()
}
