use crate::schema::{Slot, SlotHourError};

/// Inclusive bounds on the start hour of a slot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FilterRange {
    pub start: i32,
    pub end: i32,
}
impl Default for FilterRange {
    fn default() -> Self {
        Self { start: 0, end: 99 }
    }
}
impl FilterRange {
    pub fn contains(self, hour: i32) -> bool {
        self.start <= hour && hour <= self.end
    }
}

/// Keeps the slots starting within `range`, preserving their order.
///
/// `start > end` is not rejected; nothing matches then.
/// A slot whose time has no leading hour fails the whole call.
pub fn filter_slots(slots: &[Slot], range: FilterRange) -> Result<Vec<Slot>, SlotHourError> {
    let mut ret = vec![];
    for slot in slots {
        if range.contains(slot.time().hour()?) {
            ret.push(slot.clone());
        }
    }
    Ok(ret)
}
