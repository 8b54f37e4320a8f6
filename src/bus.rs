// Injected publish/subscribe capability and the event envelope it carries.

use std::sync::Arc;

use crate::models::{PerfEvent, PerfStatsEvent};

/// Default inbound channel for raw browser-only timing events.
pub const RAW_STATS_CHANNEL: &str = "browser-performance-emitter:stats:browser-only";

/// Default outbound channel for computed stats events.
pub const STATS_CHANNEL: &str = "browser-performance-emitter:stats";

/// What travels on the bus: the raw event coming in, or the stats event going out.
#[derive(Debug, Clone, PartialEq)]
pub enum BusEvent {
    Raw(PerfEvent),
    Stats(PerfStatsEvent),
}

impl From<PerfEvent> for BusEvent {
    fn from(event: PerfEvent) -> Self {
        BusEvent::Raw(event)
    }
}

impl From<PerfStatsEvent> for BusEvent {
    fn from(event: PerfStatsEvent) -> Self {
        BusEvent::Stats(event)
    }
}

/// Subscription callback: `(event, context)`. Runs to completion inside `publish`.
pub type Handler<C> = Arc<dyn Fn(&BusEvent, &C) + Send + Sync>;

/// Event bus supplied by the host. Delivery is expected to be synchronous and FIFO per
/// subscriber; the context value is opaque and owned by the bus.
pub trait EventBus: Send + Sync {
    type Context: Clone + 'static;

    fn subscribe(&self, channel: &str, handler: Handler<Self::Context>);

    fn publish(&self, channel: &str, event: BusEvent, ctx: Self::Context);
}

