//! Record filtering.

use crate::domain::{FilterSelection, FlightRecord};

impl FilterSelection {
    /// True when `record` satisfies every non-wildcard predicate.
    pub fn matches(&self, record: &FlightRecord) -> bool {
        self.airport.is_none_or(|a| record.airport == a)
            && self.airline.is_none_or(|a| record.airline == a)
            && self.movement.is_none_or(|m| record.movement == m)
            && self.status.is_none_or(|s| record.status == s)
            && self.date_range.contains(record.date)
    }
}

/// Stable filter: keeps matching records in their base order.
///
/// An empty selection yields a full copy of `base`.
pub fn apply_filters(base: &[FlightRecord], selection: &FilterSelection) -> Vec<FlightRecord> {
    base.iter()
        .filter(|r| selection.matches(r))
        .cloned()
        .collect()
}
