use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use log::info;
use play_slots::{
    api::PlayClient,
    config::{Config, DEFAULT_CONFIG_PATH},
    filter::FilterRange,
    poll::{fetch_filtered, PollState, Poller},
    present::print_report,
    selector::{ask_polling, clear_console, select},
};

/// Finds open slots on play.fi booking calendars.
#[derive(Parser)]
struct Opts {
    /// Earliest start hour to show, inclusive
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    start: i32,
    /// Latest start hour to show, inclusive
    #[arg(short, long, default_value_t = 99, allow_negative_numbers = true)]
    end: i32,
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config_path: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    let config = Config::load(&opts.config_path)?;
    let range = FilterRange {
        start: opts.start,
        end: opts.end,
    };
    let mut client = PlayClient::new(&config)?;

    clear_console()?;
    let context = select(&client).await?;
    let today = || Local::now().date_naive();

    let slots = fetch_filtered(&mut client, &context, range, today()).await?;
    print_report(&slots);

    if !ask_polling()? {
        return Ok(());
    }
    info!("Polling every {:?}", config.poll_interval());
    let mut poller = Poller {
        source: &mut client,
        context: &context,
        range,
        state: PollState::default(),
    };
    match poller.run(config.poll_interval(), today, print_report).await? {}
}
