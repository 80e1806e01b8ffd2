use anyhow::Context;
use chrono::NaiveDate;
use log::debug;
use scraper::Html;
use serde::Serialize;
use url::Url;

use crate::{
    config::Config,
    fetch::{DayFetch, SlotSource},
    menu::Menu,
    parser::{
        calendar::{self, parse_activity_tabs, parse_open_slots},
        front_page::{self, FrontPage},
        venue_list,
    },
    schema::{ActivityId, PlaceKey, SelectionContext, Slot, SportId, VenuePath},
};

pub struct PlayClient {
    client: reqwest::Client,
    base_url: Url,
}

#[derive(Debug, Serialize)]
struct FacilitySearchForm<'a> {
    #[serde(rename = "FacilitySearchForm[search_sport_id]")]
    sport_id: &'a str,
    #[serde(rename = "FacilitySearchForm[search_place_key]")]
    place_key: &'a str,
}

#[derive(Debug, Serialize)]
struct BookingCalForm {
    #[serde(rename = "BookingCalForm[p_laji]")]
    activity_id: usize,
    #[serde(rename = "BookingCalForm[p_location]", skip_serializing_if = "Option::is_none")]
    location: Option<u8>,
    #[serde(rename = "BookingCalForm[p_pvm]", skip_serializing_if = "Option::is_none")]
    date: Option<String>,
}
impl BookingCalForm {
    fn tabs() -> Self {
        Self {
            activity_id: 1,
            location: None,
            date: None,
        }
    }

    fn day(activity_id: ActivityId, date: NaiveDate) -> Self {
        Self {
            activity_id: activity_id.into(),
            location: Some(1),
            date: Some(date.format("%Y-%m-%d").to_string()),
        }
    }
}

impl PlayClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder().connection_verbose(true);
        if let Some(user_agent) = config.user_agent() {
            builder = builder.user_agent(user_agent);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url().clone(),
        })
    }

    fn get(&self, path: &str) -> anyhow::Result<reqwest::RequestBuilder> {
        Ok(self.client.get(self.base_url.join(path)?))
    }

    async fn get_html(&self, request: reqwest::RequestBuilder) -> anyhow::Result<Html> {
        let response = request.send().await?;
        debug!("GET {}: {}", response.url(), response.status());
        let text = response.error_for_status()?.text().await?;
        Ok(Html::parse_document(&text))
    }

    pub async fn front_page(&self) -> anyhow::Result<FrontPage> {
        let html = self.get_html(self.get("booking/booking-front")?).await?;
        front_page::parse(&html)
    }

    /// Venues offering `sport`, narrowed to `place` unless it is empty.
    pub async fn venues(
        &self,
        sport: &SportId,
        place: &PlaceKey,
    ) -> anyhow::Result<Menu<VenuePath>> {
        let form = FacilitySearchForm {
            sport_id: sport.as_ref(),
            place_key: place.as_ref(),
        };
        let html = self
            .get_html(self.get("booking/booking-front")?.query(&form))
            .await?;
        let venues = venue_list::parse(&html);
        debug!("Found {} venues", venues.len());
        Ok(venues)
    }

    pub async fn activities(&self, venue: &VenuePath) -> anyhow::Result<Menu<ActivityId>> {
        let html = self
            .get_html(self.get(&calendar_path(venue))?.query(&BookingCalForm::tabs()))
            .await?;
        parse_activity_tabs(&html).with_context(|| format!("While reading venue {venue}"))
    }

    pub async fn day(
        &self,
        context: &SelectionContext,
        date: NaiveDate,
    ) -> anyhow::Result<DayFetch> {
        let form = BookingCalForm::day(context.activity_id(), date);
        let html = self
            .get_html(self.get(&calendar_path(context.venue_path()))?.query(&form))
            .await?;
        let Some(open) = parse_open_slots(&html) else {
            return Ok(DayFetch::NoCalendar);
        };
        let place = context.place();
        Ok(DayFetch::Slots(
            open.into_iter()
                .map(|calendar::OpenSlot { court, time }| {
                    Slot::builder()
                        .date(date)
                        .place(place.clone())
                        .activity(context.activity_label().clone())
                        .time(time)
                        .court(court)
                        .build()
                })
                .collect(),
        ))
    }
}

impl SlotSource for PlayClient {
    async fn fetch_day(
        &mut self,
        context: &SelectionContext,
        date: NaiveDate,
    ) -> anyhow::Result<DayFetch> {
        self.day(context, date).await
    }
}

fn calendar_path(venue: &VenuePath) -> String {
    format!("{venue}/booking/booking-calendar")
}
