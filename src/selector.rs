use std::io::stdout;

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use inquire::{validator::Validation, CustomType, Text};
use log::{info, warn};

use crate::{
    api::PlayClient,
    menu::{Menu, MenuEntry, MenuError},
    parser::venue_list::cities_of,
    schema::{PlaceKey, SelectionContext, VenuePath},
};

pub fn clear_console() -> anyhow::Result<()> {
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

fn check_choice(choice: usize, len: usize) -> Validation {
    if (1..=len).contains(&choice) {
        Validation::Valid
    } else {
        Validation::Invalid(MenuError::OutOfRange(choice, len).to_string().into())
    }
}

/// Prints `menu` and asks for a position until a valid one is typed.
pub fn choose<'m, Id>(
    menu: &'m Menu<Id>,
    heading: &str,
    prompt: &str,
) -> anyhow::Result<&'m MenuEntry<Id>> {
    if menu.is_empty() {
        return Err(MenuError::Empty.into());
    }
    println!("\n{heading}");
    println!("{}", menu.render());
    let len = menu.len();
    let choice = CustomType::<usize>::new(prompt)
        .with_error_message("Please type a number")
        .with_validator(move |&choice: &usize| Ok(check_choice(choice, len)))
        .prompt()?;
    Ok(menu.get(choice)?)
}

/// Cities found in venue names, resolved to place keys of the search form.
pub fn city_menu(venues: &Menu<VenuePath>, cities: &Menu<PlaceKey>) -> Menu<PlaceKey> {
    cities_of(venues)
        .into_iter()
        .map(|city| {
            let key = match cities.find_by_label(&city) {
                Some(entry) => entry.id().clone(),
                None => {
                    warn!("City {city:?} is not in the search form; searching without a place");
                    PlaceKey::default()
                }
            };
            MenuEntry::new(city, key)
        })
        .collect()
}

/// Walks the operator through sport, city, venue, activity and window.
pub async fn select(client: &PlayClient) -> anyhow::Result<SelectionContext> {
    let front = client.front_page().await?;
    let sport = choose(
        &front.sports,
        "Select your activity. Provide a number.",
        "Activity #:",
    )?;
    clear_console()?;

    let all_venues = client.venues(sport.id(), &PlaceKey::default()).await?;
    let cities = city_menu(&all_venues, &front.cities);
    let city = choose(&cities, "Select city. Provide a number.", "City #:")?;
    clear_console()?;

    let venues = client.venues(sport.id(), city.id()).await?;
    let venue = choose(&venues, "Select venue. Provide a number.", "Venue #:")?;

    let activities = client.activities(venue.id()).await?;
    let activity = choose(
        &activities,
        "Select activity according to your initial selection.",
        "Activity #:",
    )?;

    let lookahead_days = CustomType::<u32>::new("# of days:")
        .with_help_message("Number of days to look ahead, starting today")
        .with_error_message("Please type a non-negative number")
        .prompt()?;

    let context = SelectionContext::builder()
        .venue_name(venue.label().clone())
        .venue_path(venue.id().clone())
        .activity_id(*activity.id())
        .activity_label(activity.label().clone())
        .lookahead_days(lookahead_days)
        .build();
    info!("Selected {context:?}");
    Ok(context)
}

pub fn opts_in(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Asks whether to keep polling after the first report.
pub fn ask_polling() -> anyhow::Result<bool> {
    let answer = Text::new("Pool for results upon changes? (Y/N):").prompt()?;
    Ok(opts_in(&answer))
}
