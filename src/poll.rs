use std::{convert::Infallible, time::Duration};

use chrono::NaiveDate;
use log::info;
use tokio::time::sleep;

use crate::{
    fetch::{fetch_window, SlotSource},
    filter::{filter_slots, FilterRange},
    schema::{SelectionContext, Slot},
};

/// A new result is shown only if it changed and is not empty.
/// Slots running out is therefore never reported.
pub fn should_redisplay(previous: &[Slot], new: &[Slot]) -> bool {
    !new.is_empty() && new != previous
}

/// The filtered result of the last poll.
#[derive(Debug, Default)]
pub struct PollState {
    previous: Vec<Slot>,
}
impl PollState {
    /// Remembers `new` and hands it back if it should be shown.
    pub fn update(&mut self, new: Vec<Slot>) -> Option<&[Slot]> {
        let show = should_redisplay(&self.previous, &new);
        self.previous = new;
        show.then_some(self.previous.as_slice())
    }
}

/// Fetches the whole window and narrows it to `range`.
pub async fn fetch_filtered<S: SlotSource>(
    source: &mut S,
    context: &SelectionContext,
    range: FilterRange,
    today: NaiveDate,
) -> anyhow::Result<Vec<Slot>> {
    let slots = fetch_window(source, context, today).await?;
    let filtered = filter_slots(&slots, range)?;
    info!("{} open slots, {} in range", slots.len(), filtered.len());
    Ok(filtered)
}

pub struct Poller<'a, S> {
    pub source: &'a mut S,
    pub context: &'a SelectionContext,
    pub range: FilterRange,
    pub state: PollState,
}

impl<S: SlotSource> Poller<'_, S> {
    pub async fn poll_once(
        &mut self,
        today: NaiveDate,
        show: &mut impl FnMut(&[Slot]),
    ) -> anyhow::Result<()> {
        let new = fetch_filtered(&mut *self.source, self.context, self.range, today).await?;
        match self.state.update(new) {
            Some(slots) => show(slots),
            None => info!("Nothing new to show"),
        }
        Ok(())
    }

    /// Polls until an error occurs. Errors are not retried.
    pub async fn run(
        &mut self,
        interval: Duration,
        mut today: impl FnMut() -> NaiveDate,
        mut show: impl FnMut(&[Slot]),
    ) -> anyhow::Result<Infallible> {
        loop {
            self.poll_once(today(), &mut show).await?;
            sleep(interval).await;
        }
    }
}
