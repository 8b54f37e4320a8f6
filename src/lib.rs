// Browser performance stats: raw navigation/resource timing in, normalized stats event out.

pub mod bus;
pub mod config;
pub mod emitter;
pub mod error;
pub mod models;
pub mod stats;
pub mod telemetry;

pub use bus::{BusEvent, EventBus, Handler, RAW_STATS_CHANNEL, STATS_CHANNEL};
pub use config::EmitterConfig;
pub use emitter::PerformanceEmitter;
pub use error::EmitterError;
pub use stats::{compute_stats, map_perf_event};
