// Domain models: inbound browser telemetry, computed stats, outbound event

mod calculated;
mod event;
mod resource;
mod timing;

pub use calculated::{CalculatedStats, Metric};
pub use event::{PerfEvent, PerfStatsEvent, RESERVED_FIELDS};
pub use resource::{ResourceEntry, ResourceType};
pub use timing::TimingSnapshot;

/// Single emptiness predicate for optional telemetry fields.
/// `None`, zero-length sequences and zero-key mappings are empty.
pub trait IsEmpty {
    fn is_empty_value(&self) -> bool;
}

impl<T: IsEmpty> IsEmpty for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(IsEmpty::is_empty_value)
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T> IsEmpty for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for serde_json::Map<String, serde_json::Value> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}
