//! Home page: featured events

use tracing::debug;

use super::cards;
use crate::models::{Event, Paginated};
use crate::state::{AppContext, QueryState};

pub async fn load_featured(ctx: &AppContext) -> QueryState<Paginated<Event>> {
    debug!("Loading featured events");
    QueryState::from_result("featured_events", ctx.services.event_service.featured().await)
}

pub fn render_home(state: &QueryState<Paginated<Event>>, ctx: &AppContext) -> String {
    let mut out = String::from("Featured Events\n===============\n\n");
    match state {
        QueryState::Loading => out.push_str("Loading featured events..."),
        QueryState::Failed(_) => out.push_str("Failed to load featured events."),
        QueryState::Ready(page) if page.is_empty() => {
            out.push_str("No featured events right now. Check back soon!")
        }
        QueryState::Ready(page) => {
            out.push_str(&cards::render_cards(&page.data, ctx.display_offset()));
            out.push_str("\n\nView all events: adto-client events");
        }
    }
    out
}

/// Handle the `home` command
pub async fn handle_home(ctx: &AppContext) -> String {
    let state = load_featured(ctx).await;
    render_home(&state, ctx)
}
