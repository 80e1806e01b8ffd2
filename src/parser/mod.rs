pub mod calendar;
pub mod front_page;
pub mod venue_list;
