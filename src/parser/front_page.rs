use anyhow::bail;
use play_slots_utils::selector;
use scraper::{ElementRef, Html};

use crate::{
    menu::{Menu, MenuEntry},
    schema::{PlaceKey, SportId},
};

/// Search options offered on `/booking/booking-front`.
#[derive(Debug)]
pub struct FrontPage {
    pub sports: Menu<SportId>,
    /// Single venues from the place selector. Not offered as a menu; the
    /// city search covers them, but they are valid place keys for the form.
    pub facilities: Menu<PlaceKey>,
    pub cities: Menu<PlaceKey>,
}

pub fn parse(html: &Html) -> anyhow::Result<FrontPage> {
    let sports: Menu<SportId> = html
        .select(selector!(
            r#"select#facilitysearchform-search_sport_id option[title=" "]"#
        ))
        .filter_map(|option| {
            let id = option.attr("value")?.to_owned();
            Some(MenuEntry::new(option_text(option), id.into()))
        })
        .collect();
    if sports.is_empty() {
        bail!("No sports were found in the search form");
    }
    let facilities = html
        .select(selector!(r#"optgroup[label="Kentät ja hallit"] option"#))
        .filter_map(parse_place_option)
        .collect();
    let cities = html
        .select(selector!(r#"optgroup[label="Kaupungit"] option"#))
        .filter_map(parse_place_option)
        .collect();
    Ok(FrontPage {
        sports,
        facilities,
        cities,
    })
}

fn option_text(option: ElementRef) -> String {
    option.text().collect::<String>().to_lowercase()
}

fn parse_place_option(option: ElementRef) -> Option<MenuEntry<PlaceKey>> {
    let id = option.attr("value")?.to_lowercase();
    Some(MenuEntry::new(option_text(option), id.into()))
}
