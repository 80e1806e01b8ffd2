use chrono::{Days, NaiveDate};
use log::debug;

use crate::schema::{SelectionContext, Slot};

/// What one calendar page said about one day.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DayFetch {
    Slots(Vec<Slot>),
    /// The venue has no calendar for this day; later days are not asked for.
    NoCalendar,
}

/// Where slots come from.
#[allow(async_fn_in_trait)]
pub trait SlotSource {
    async fn fetch_day(
        &mut self,
        context: &SelectionContext,
        date: NaiveDate,
    ) -> anyhow::Result<DayFetch>;
}

/// The dates of the lookahead window, starting at `today`.
pub fn window(today: NaiveDate, lookahead_days: u32) -> impl Iterator<Item = NaiveDate> {
    (0..lookahead_days).map_while(move |offset| today.checked_add_days(Days::new(offset.into())))
}

/// Fetches every day of the window into a fresh list.
pub async fn fetch_window<S: SlotSource>(
    source: &mut S,
    context: &SelectionContext,
    today: NaiveDate,
) -> anyhow::Result<Vec<Slot>> {
    let mut slots = vec![];
    for date in window(today, context.lookahead_days()) {
        match source.fetch_day(context, date).await? {
            DayFetch::Slots(found) => {
                debug!("{date}: {} open slots", found.len());
                slots.extend(found);
            }
            DayFetch::NoCalendar => {
                debug!("{date}: no calendar, stopping here");
                break;
            }
        }
    }
    Ok(slots)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeMap;

    use anyhow::anyhow;
    use chrono::NaiveDate;
    use itertools::Itertools;

    use super::{fetch_window, window, DayFetch, SlotSource};
    use crate::schema::{ActivityId, SelectionContext, Slot};

    /// Serves canned days and records what was asked for.
    #[derive(Default)]
    pub struct FakeSource {
        pub days: BTreeMap<NaiveDate, DayFetch>,
        pub requested: Vec<NaiveDate>,
    }
    impl SlotSource for FakeSource {
        async fn fetch_day(
            &mut self,
            _context: &SelectionContext,
            date: NaiveDate,
        ) -> anyhow::Result<DayFetch> {
            self.requested.push(date);
            self.days
                .get(&date)
                .cloned()
                .ok_or_else(|| anyhow!("Unexpected request for {date}"))
        }
    }

    pub fn context(lookahead_days: u32) -> SelectionContext {
        SelectionContext::builder()
            .venue_name("Arena A, Espoo".to_owned())
            .venue_path("arenaa".to_owned().into())
            .activity_id(ActivityId::from(2))
            .activity_label("Padel".to_owned())
            .lookahead_days(lookahead_days)
            .build()
    }

    pub fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    pub fn slot(day: u32, time: &str) -> Slot {
        Slot::builder()
            .date(date(day))
            .place("Arena A Espoo")
            .activity("Padel")
            .time(time)
            .court("Kenttä 1")
            .build()
    }

    #[test]
    fn window_dates() {
        assert_eq!(
            window(date(30), 3).collect_vec(),
            [
                date(30),
                date(31),
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
            ]
        );
        assert_eq!(window(date(30), 0).count(), 0);
    }

    #[tokio::test]
    async fn concatenates_days_in_order() {
        let mut source = FakeSource::default();
        source
            .days
            .insert(date(10), DayFetch::Slots(vec![slot(10, "09:00")]));
        source.days.insert(date(11), DayFetch::Slots(vec![]));
        source
            .days
            .insert(date(12), DayFetch::Slots(vec![slot(12, "18:00")]));
        let slots = fetch_window(&mut source, &context(3), date(10))
            .await
            .unwrap();
        assert_eq!(slots, [slot(10, "09:00"), slot(12, "18:00")]);
        assert_eq!(source.requested, [date(10), date(11), date(12)]);
    }

    #[tokio::test]
    async fn stops_at_missing_calendar() {
        let mut source = FakeSource::default();
        source
            .days
            .insert(date(10), DayFetch::Slots(vec![slot(10, "09:00")]));
        source.days.insert(date(11), DayFetch::NoCalendar);
        let slots = fetch_window(&mut source, &context(5), date(10))
            .await
            .unwrap();
        assert_eq!(slots, [slot(10, "09:00")]);
        assert_eq!(source.requested, [date(10), date(11)]);
    }

    #[tokio::test]
    async fn errors_propagate() {
        let mut source = FakeSource::default();
        assert!(fetch_window(&mut source, &context(1), date(10))
            .await
            .is_err());
    }
}
