use chrono::NaiveDate;
use derive_more::{AsRef, Display, From, Into};
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use typed_builder::TypedBuilder;

/// One open booking opportunity found on a calendar page.
#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, CopyGetters, Getters, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Slot {
    #[getset(get_copy = "pub")]
    date: NaiveDate,
    #[getset(get = "pub")]
    #[builder(setter(into))]
    place: String,
    #[getset(get = "pub")]
    #[builder(setter(into))]
    activity: String,
    #[getset(get = "pub")]
    #[builder(setter(into))]
    time: SlotTime,
    #[getset(get = "pub")]
    #[builder(setter(into))]
    court: String,
}

/// Start time exactly as printed by the site, e.g. `18:00`.
#[derive(Clone, PartialEq, Eq, Debug, From, AsRef, Display, Serialize, Deserialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct SlotTime(String);
impl From<&str> for SlotTime {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[derive(PartialEq, Eq, Debug, Error)]
#[error("Slot time {0:?} does not start with an hour")]
pub struct SlotHourError(pub SlotTime);

impl SlotTime {
    /// The integer formed by (at most) the first two characters.
    pub fn hour(&self) -> Result<i32, SlotHourError> {
        let end = self.0.char_indices().nth(2).map_or(self.0.len(), |x| x.0);
        self.0[..end]
            .trim()
            .parse()
            .map_err(|_| SlotHourError(self.clone()))
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug, From, AsRef, Display)]
#[as_ref(forward)]
pub struct SportId(String);

#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, From, AsRef, Display)]
#[as_ref(forward)]
pub struct PlaceKey(String);

/// First path segment of a venue's pages, e.g. `tapiolanpadel`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, From, AsRef, Display)]
#[as_ref(forward)]
pub struct VenuePath(String);

/// 1-based position of an activity tab on the venue calendar.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, From, Into, Display)]
pub struct ActivityId(usize);

/// Everything the operator picked; fixed once polling starts.
#[derive(Clone, Debug, TypedBuilder, CopyGetters, Getters)]
pub struct SelectionContext {
    #[getset(get = "pub")]
    venue_name: String,
    #[getset(get = "pub")]
    venue_path: VenuePath,
    #[getset(get_copy = "pub")]
    activity_id: ActivityId,
    #[getset(get = "pub")]
    activity_label: String,
    #[getset(get_copy = "pub")]
    lookahead_days: u32,
}

impl SelectionContext {
    /// Venue name as it appears in the `Place` column.
    pub fn place(&self) -> String {
        self.venue_name.replace(',', "")
    }
}
