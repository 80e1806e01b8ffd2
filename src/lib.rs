pub mod api;
pub mod config;
pub mod fetch;
pub mod filter;
pub mod menu;
pub mod parser;
pub mod poll;
pub mod present;
pub mod schema;
pub mod selector;
