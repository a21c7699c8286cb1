//! Event detail page with ticket and announcement tabs

use chrono::Utc;
use tracing::debug;

use crate::models::{Event, EventAnnouncement, Paginated, Ticket};
use crate::state::{AppContext, QueryState};
use crate::utils::helpers;

/// Everything the detail page shows
#[derive(Debug, Clone)]
pub struct EventDetails {
    pub event: QueryState<Event>,
    pub tickets: QueryState<Paginated<Ticket>>,
    pub announcements: QueryState<Vec<EventAnnouncement>>,
}

/// Load the event and its tabs; the three requests run concurrently
pub async fn load_event_details(ctx: &AppContext, event_id: &str) -> EventDetails {
    debug!(event_id = event_id, "Loading event details");
    let services = &ctx.services;

    let (event, tickets, announcements) = futures::join!(
        services.event_service.get(event_id),
        services.ticket_service.for_event(event_id),
        services.announcement_service.for_event(event_id),
    );

    EventDetails {
        event: QueryState::from_result("event", event),
        tickets: QueryState::from_result("tickets", tickets),
        announcements: QueryState::from_result("announcements", announcements),
    }
}

fn render_not_found() -> String {
    "Event Not Found\nThe event you're looking for doesn't exist or has been removed.\nBack to Events: adto-client events"
        .to_string()
}

fn render_header(event: &Event, ctx: &AppContext) -> String {
    let offset = ctx.display_offset();
    let mut badges = vec![if event.is_registration_open {
        "[Registration Open]".to_string()
    } else {
        "[Registration Closed]".to_string()
    }];
    badges.push(format!("[{}]", event.organization_label()));
    if !event.is_open_to_outsiders {
        badges.push("[Members Only]".to_string());
    }

    let mut out = format!("{}\n{}\n", badges.join(" "), event.name);
    out.push_str(&"=".repeat(event.name.chars().count()));
    out.push('\n');
    if let Some(description) = event.description.as_deref().filter(|d| !d.trim().is_empty()) {
        out.push_str(description);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&format!(
        "When:   {} - {}\n",
        helpers::format_timestamp(event.date_start, offset),
        helpers::format_timestamp(event.date_end, offset)
    ));
    out.push_str(&format!(
        "Where:  {}\n",
        event.location.as_deref().unwrap_or("Location TBA")
    ));
    out.push_str(&format!("Price:  {}\n", event.price_label()));
    out.push_str(&format!(
        "Registered: {} / capacity {} ({} attended)\n",
        event.registration_count(),
        event.total_capacity(),
        event.attended_count()
    ));
    out.push_str(&format!(
        "Registration deadline: {}\n",
        helpers::format_timestamp(event.registration_deadline(), offset)
    ));
    out
}

fn render_ticket_categories(event: &Event, ctx: &AppContext) -> String {
    let mut out = String::from("\nTicket Categories\n-----------------\n");
    if event.ticket_categories.is_empty() {
        out.push_str("No ticket categories available.\n");
        return out;
    }

    let now = Utc::now();
    for category in &event.ticket_categories {
        let status = if event.is_registration_open && category.is_open_at(now) {
            format!("register: adto-client register {} {}", event.id, category.id)
        } else {
            "Registration Closed".to_string()
        };
        out.push_str(&format!(
            "* {} ({}) - {} | capacity {}\n",
            category.name,
            category.id,
            category.price_label(),
            category.capacity
        ));
        if let Some(description) = category.description.as_deref().filter(|d| !d.is_empty()) {
            out.push_str(&format!("    {}\n", description));
        }
        if let Some(deadline) = category.registration_deadline {
            out.push_str(&format!(
                "    deadline {}\n",
                helpers::format_timestamp(deadline, ctx.display_offset())
            ));
        }
        out.push_str(&format!("    {}\n", status));
    }
    out
}

fn render_tickets_tab(tickets: &QueryState<Paginated<Ticket>>) -> String {
    let mut out = String::from("\nTickets\n-------\n");
    match tickets {
        QueryState::Loading => out.push_str("Loading tickets...\n"),
        QueryState::Failed(_) => out.push_str("Failed to load tickets.\n"),
        QueryState::Ready(page) if page.is_empty() => out.push_str("No tickets issued yet.\n"),
        QueryState::Ready(page) => {
            for ticket in &page.data {
                out.push_str(&format!("* {} ({})\n", ticket.category_name(), ticket.id));
            }
        }
    }
    out
}

fn render_announcements_tab(announcements: &QueryState<Vec<EventAnnouncement>>, ctx: &AppContext) -> String {
    let mut out = String::from("\nAnnouncements\n-------------\n");
    match announcements {
        QueryState::Loading => out.push_str("Loading announcements...\n"),
        QueryState::Failed(_) => out.push_str("Failed to load announcements.\n"),
        QueryState::Ready(list) if list.is_empty() => out.push_str("No announcements yet.\n"),
        QueryState::Ready(list) => {
            for announcement in list {
                out.push_str(&format!("# {}\n", announcement.title));
                if let Some(updated_at) = announcement.updated_at {
                    out.push_str(&format!(
                        "  updated {}\n",
                        helpers::format_timestamp(updated_at, ctx.display_offset())
                    ));
                }
                out.push_str(&format!("  {}\n", helpers::truncate_text(&announcement.content, 280)));
            }
        }
    }
    out
}

pub fn render_event_details(details: &EventDetails, ctx: &AppContext) -> String {
    let event = match &details.event {
        QueryState::Loading => return "Loading event...".to_string(),
        QueryState::Failed(_) => return render_not_found(),
        QueryState::Ready(event) if !event.is_published => return render_not_found(),
        QueryState::Ready(event) => event,
    };

    let mut out = render_header(event, ctx);
    out.push_str(&render_ticket_categories(event, ctx));
    out.push_str(&render_tickets_tab(&details.tickets));
    out.push_str(&render_announcements_tab(&details.announcements, ctx));
    out
}

/// Handle the `event <id>` command
pub async fn handle_event_details(ctx: &AppContext, event_id: &str) -> String {
    if event_id.trim().is_empty() {
        return "No event id provided.".to_string();
    }
    let details = load_event_details(ctx, event_id).await;
    render_event_details(&details, ctx)
}
