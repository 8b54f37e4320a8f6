// Event bridge: raw browser-only timing event in, stats event out, context passed through.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use crate::bus::{BusEvent, EventBus, Handler};
use crate::config::EmitterConfig;
use crate::error::EmitterError;
use crate::models::PerfEvent;
use crate::stats::map_perf_event;

/// Subscribed to the inbound channel for its whole life; one outbound publish per raw event.
pub struct PerformanceEmitter<B: EventBus + 'static> {
    bridge: Option<Arc<Bridge<B>>>,
    inbound: String,
    outbound: String,
}

/// State shared with the subscription handler. Holds the bus weakly: the bus owns the
/// handler, so a strong reference here would be a cycle.
struct Bridge<B: EventBus> {
    bus: Weak<B>,
    outbound: String,
    emitted_total: AtomicU64,
}

impl<B: EventBus> Bridge<B> {
    fn forward(&self, event: &PerfEvent, ctx: &B::Context) {
        let Some(bus) = self.bus.upgrade() else {
            tracing::debug!(channel = %self.outbound, "event bus dropped; stats not published");
            return;
        };
        let stats = map_perf_event(event);
        let metrics_count = stats.calculated_stats.metrics.len();
        bus.publish(&self.outbound, BusEvent::Stats(stats), ctx.clone());
        let emitted_total = self.emitted_total.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(
            operation = "publish_stats",
            channel = %self.outbound,
            metrics_count,
            emitted_total,
            "Performance stats published"
        );
    }
}

impl<B: EventBus + 'static> PerformanceEmitter<B> {
    /// Subscribe to `config.channels.inbound` on `bus`.
    ///
    /// A missing bus is an error when `config.validation.require_bus` is set; otherwise the
    /// emitter is created detached and never publishes.
    pub fn attach(bus: Option<Arc<B>>, config: &EmitterConfig) -> Result<Self, EmitterError> {
        let inbound = config.channels.inbound.clone();
        let outbound = config.channels.outbound.clone();
        if inbound.is_empty() || outbound.is_empty() {
            return Err(EmitterError::InvalidChannel(
                "channel names must be non-empty".into(),
            ));
        }
        if inbound == outbound {
            return Err(EmitterError::InvalidChannel(format!(
                "inbound and outbound channels are both {inbound:?}"
            )));
        }

        let Some(bus) = bus else {
            if config.validation.require_bus {
                return Err(EmitterError::MissingBus);
            }
            tracing::warn!(
                channel = %inbound,
                "no event bus supplied; performance emitter is detached"
            );
            return Ok(Self {
                bridge: None,
                inbound,
                outbound,
            });
        };

        let bridge = Arc::new(Bridge {
            bus: Arc::downgrade(&bus),
            outbound: outbound.clone(),
            emitted_total: AtomicU64::new(0),
        });
        let handler_bridge = bridge.clone();
        let handler: Handler<B::Context> =
            Arc::new(move |event: &BusEvent, ctx: &B::Context| match event {
                BusEvent::Raw(event) => handler_bridge.forward(event, ctx),
                BusEvent::Stats(_) => {
                    tracing::debug!("ignoring stats event delivered on the raw stats channel");
                }
            });
        bus.subscribe(&inbound, handler);
        tracing::debug!(inbound = %inbound, outbound = %outbound, "performance emitter attached");

        Ok(Self {
            bridge: Some(bridge),
            inbound,
            outbound,
        })
    }

    pub fn is_attached(&self) -> bool {
        self.bridge.is_some()
    }

    /// Stats events published so far.
    pub fn emitted_total(&self) -> u64 {
        self.bridge
            .as_ref()
            .map_or(0, |b| b.emitted_total.load(Ordering::Relaxed))
    }

    pub fn inbound_channel(&self) -> &str {
        &self.inbound
    }

    pub fn outbound_channel(&self) -> &str {
        &self.outbound
    }
}
