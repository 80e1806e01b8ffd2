use play_slots_utils::selector;
use scraper::{ElementRef, Html};

use crate::{
    menu::{Menu, MenuEntry},
    schema::VenuePath,
};

/// Venue cards of a search result page. A page without cards is an empty menu.
pub fn parse(html: &Html) -> Menu<VenuePath> {
    html.select(selector!("article div.card__info a"))
        .filter_map(parse_card_link)
        .collect()
}

fn parse_card_link(a: ElementRef) -> Option<MenuEntry<VenuePath>> {
    // `/tapiolanpadel/booking/...` -> `tapiolanpadel`
    let path = a.attr("href")?.split('/').nth(1)?.to_owned();
    let name = a.text().collect::<String>().trim().to_owned();
    Some(MenuEntry::new(name, path.into()))
}

/// City names are what follows the first `", "` in venue names.
/// Lowercased, deduplicated and sorted.
pub fn cities_of(venues: &Menu<VenuePath>) -> Vec<String> {
    let mut cities: Vec<String> = venues
        .entries()
        .iter()
        .filter_map(|venue| venue.label().split(", ").nth(1))
        .map(|city| city.to_lowercase())
        .collect();
    cities.sort();
    cities.dedup();
    cities
}
