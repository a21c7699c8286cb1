//! Interactive event browsing
//!
//! Plain lines are treated as search input and debounced; lines starting
//! with `:` are commands applied immediately.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

use super::events::handle_events_list;
use crate::services::OrderBy;
use crate::state::{AppContext, FilterState, SearchDebouncer, Selection};
use crate::utils::errors::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    Next,
    Previous,
    Page(u32),
    ToggleFree,
    TogglePaid,
    Organization(Selection),
    Cluster(Selection),
    Order(Option<OrderBy>),
    Clear,
    Refresh,
    Help,
    Quit,
    Unknown(String),
}

impl BrowseCommand {
    pub fn parse(line: &str) -> Self {
        let Some(command) = line.trim().strip_prefix(':') else {
            return BrowseCommand::Search(line.trim_end_matches(['\r', '\n']).to_string());
        };

        let mut parts = command.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or("").to_ascii_lowercase();
        let arg = parts.next().unwrap_or("").trim();

        match name.as_str() {
            "next" | "n" => BrowseCommand::Next,
            "prev" | "previous" | "p" => BrowseCommand::Previous,
            "page" => match arg.parse::<u32>() {
                Ok(page) => BrowseCommand::Page(page),
                Err(_) => BrowseCommand::Unknown(line.trim().to_string()),
            },
            "free" => BrowseCommand::ToggleFree,
            "paid" => BrowseCommand::TogglePaid,
            "org" => BrowseCommand::Organization(Selection::parse(arg)),
            "cluster" => BrowseCommand::Cluster(Selection::parse(arg)),
            "order" => match arg.parse::<OrderBy>() {
                Ok(order) => BrowseCommand::Order(Some(order)),
                Err(_) if arg.is_empty() || arg.eq_ignore_ascii_case("none") => BrowseCommand::Order(None),
                Err(_) => BrowseCommand::Unknown(line.trim().to_string()),
            },
            "clear" => BrowseCommand::Clear,
            "refresh" | "r" => BrowseCommand::Refresh,
            "help" | "h" | "?" => BrowseCommand::Help,
            "quit" | "q" | "exit" => BrowseCommand::Quit,
            _ => BrowseCommand::Unknown(line.trim().to_string()),
        }
    }
}

/// What the loop should do after applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseOutcome {
    Reload,
    Message(&'static str),
    Debounced,
    Quit,
}

pub const HELP: &str = "Type to search. Commands: :next :prev :page <n> :free :paid :org <id|all> :cluster <id|all> :order <asc|desc|none> :clear :refresh :quit";

/// Apply a command to the filter state
pub fn apply(command: BrowseCommand, filters: &mut FilterState, debouncer: &mut SearchDebouncer) -> BrowseOutcome {
    match command {
        BrowseCommand::Search(text) => {
            debouncer.push(text);
            BrowseOutcome::Debounced
        }
        BrowseCommand::Next => {
            if filters.next_page() {
                BrowseOutcome::Reload
            } else {
                BrowseOutcome::Message("Already on the last page.")
            }
        }
        BrowseCommand::Previous => {
            if filters.previous_page() {
                BrowseOutcome::Reload
            } else {
                BrowseOutcome::Message("Already on the first page.")
            }
        }
        BrowseCommand::Page(page) => {
            if filters.go_to_page(page) {
                BrowseOutcome::Reload
            } else {
                BrowseOutcome::Message("No such page.")
            }
        }
        BrowseCommand::ToggleFree => {
            filters.toggle_free();
            BrowseOutcome::Reload
        }
        BrowseCommand::TogglePaid => {
            filters.toggle_paid();
            BrowseOutcome::Reload
        }
        BrowseCommand::Organization(selection) => reload_if(filters.set_organization(selection)),
        BrowseCommand::Cluster(selection) => reload_if(filters.set_organization_parent(selection)),
        BrowseCommand::Order(order) => reload_if(filters.set_order_by(order)),
        BrowseCommand::Clear => {
            debouncer.cancel();
            filters.clear();
            BrowseOutcome::Reload
        }
        BrowseCommand::Refresh => BrowseOutcome::Reload,
        BrowseCommand::Help => BrowseOutcome::Message(HELP),
        BrowseCommand::Quit => BrowseOutcome::Quit,
        BrowseCommand::Unknown(_) => BrowseOutcome::Message("Unknown command. Type :help for help."),
    }
}

fn reload_if(changed: bool) -> BrowseOutcome {
    if changed {
        BrowseOutcome::Reload
    } else {
        BrowseOutcome::Message("Filter unchanged.")
    }
}

/// Run the browse loop until `:quit` or end of input
pub async fn run_browse<R, W>(ctx: &AppContext, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (mut debouncer, mut committed) = SearchDebouncer::new(ctx.settings.search_debounce());
    let mut filters = FilterState::new();
    let mut lines = input.lines();

    write_page(&mut output, &handle_events_list(ctx, &mut filters).await).await?;
    write_page(&mut output, HELP).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match apply(BrowseCommand::parse(&line), &mut filters, &mut debouncer) {
                    BrowseOutcome::Reload => {
                        write_page(&mut output, &handle_events_list(ctx, &mut filters).await).await?;
                    }
                    BrowseOutcome::Message(message) => write_page(&mut output, message).await?,
                    BrowseOutcome::Debounced => {}
                    BrowseOutcome::Quit => break,
                }
            }
            Some(text) = committed.recv() => {
                if filters.set_search(text) {
                    write_page(&mut output, &handle_events_list(ctx, &mut filters).await).await?;
                }
            }
        }
    }

    info!("Leaving browse mode");
    Ok(())
}

async fn write_page<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n\n").await?;
    output.flush().await?;
    Ok(())
}
