use clap::Parser;

use calendar_embed::container::{Container, Message, Task};
use calendar_embed::layout::PageLayout;
use calendar_embed::messaging::{ChannelDispatch, Notification};
use calendar_embed::{api, config};

mod cli;

/// Stands in for the rendering host: runs one full mount cycle against a
/// real API endpoint and prints what the sandbox would receive.
fn main() {
    env_logger::builder().init();

    let cli = cli::Cli::parse();
    let session = cli.session.map_or_else(config::Session::debug, |path| {
        config::init(path).expect("Could not load the session file")
    });

    let client = api::Client::new(session.config.api_url.clone());
    let (dispatch, notifications) = ChannelDispatch::unbounded();
    let mut container = Container::new(session, dispatch, PageLayout::default());

    if let Some(Task::FetchCalendarList {
        ticket,
        workspace_id,
    }) = container.update(Message::Mount)
    {
        let result = client.calendar_list(workspace_id);
        container.update(Message::CalendarListLoaded(ticket, result));
    }

    match container.view() {
        Some(view) => println!("{}", view.data_config),
        None => log::warn!("Calendar view unavailable"),
    }

    container.update(Message::Unmount);

    while let Ok(Notification::AddFlashMsg { msg, kind }) = notifications.try_recv() {
        eprintln!("[{kind:?}] {msg}");
    }
}
