use anyhow::Context;
use log::warn;
use play_slots_utils::selector;
use scraper::{ElementRef, Html, Node};

use crate::{
    menu::{Menu, MenuEntry},
    schema::{ActivityId, SlotTime},
};

/// Activity tabs of a venue calendar. Tabs are numbered from 1 in page order.
pub fn parse_activity_tabs(html: &Html) -> anyhow::Result<Menu<ActivityId>> {
    let tabs = html
        .select(selector!("div#w0.tabs__items"))
        .next()
        .context("Activity tabs were not found on the booking calendar")?;
    Ok(tabs
        .text()
        .collect::<String>()
        .split_whitespace()
        .enumerate()
        .map(|(i, label)| MenuEntry::new(label, ActivityId::from(i + 1)))
        .collect())
}

/// An available cell of the calendar table.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OpenSlot {
    pub court: String,
    pub time: SlotTime,
}

/// `None` if the page has no calendar table at all.
pub fn parse_open_slots(html: &Html) -> Option<Vec<OpenSlot>> {
    let table = html.select(selector!("table")).next()?;
    Some(
        table
            .select(selector!("td.s-avail a[href]"))
            .filter_map(parse_slot_link)
            .collect(),
    )
}

// <a href="...">Kenttä 1<br>18:00<br>60 min</a>
fn parse_slot_link(a: ElementRef) -> Option<OpenSlot> {
    let mut texts = a.children().filter_map(|node| match node.value() {
        Node::Text(text) => Some(text.trim()),
        _ => None,
    });
    match (texts.next(), texts.next()) {
        (Some(court), Some(time)) => Some(OpenSlot {
            court: court.to_owned(),
            time: time.into(),
        }),
        _ => {
            warn!("Skipping a slot link with unexpected contents: {:?}", a.html());
            None
        }
    }
}
