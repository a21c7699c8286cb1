//! Events listing page with filter bar and pagination

use tracing::debug;

use super::cards;
use crate::models::{Event, Paginated};
use crate::services::FilterOptions;
use crate::state::{AppContext, FilterState, PriceFilter, QueryState, Selection};
use crate::utils::helpers;

/// Fetch the page of events the filters point at and record its metadata
pub async fn load_events(ctx: &AppContext, filters: &mut FilterState) -> QueryState<Paginated<Event>> {
    let params = filters.to_query(ctx.page_size());
    debug!(page = filters.page(), "Loading events page");

    let result = ctx.services.event_service.list_published(&params).await;
    if let Ok(page) = &result {
        filters.sync_pages(&page.meta);
    }
    QueryState::from_result("events", result)
}

pub async fn load_filter_options(ctx: &AppContext) -> QueryState<FilterOptions> {
    QueryState::from_result(
        "filter_options",
        ctx.services.organization_service.filter_options().await,
    )
}

fn selection_label<'a>(selection: &'a Selection, names: impl Fn(&str) -> Option<&'a str>) -> String {
    match selection {
        Selection::All => "All".to_string(),
        Selection::Id(id) => names(id).unwrap_or(id).to_string(),
    }
}

/// One-line summary of the active filters
pub fn render_filter_bar(filters: &FilterState, options: Option<&FilterOptions>) -> String {
    let organization = selection_label(filters.organization(), |id| {
        options?.organizations.iter().find(|o| o.id == id).map(|o| o.short_name())
    });
    let cluster = selection_label(filters.organization_parent(), |id| {
        options?
            .organization_parents
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
    });
    let price = match filters.price_filter() {
        PriceFilter::All => "All",
        PriceFilter::Free => "Free",
        PriceFilter::Paid => "Paid",
    };
    let search = if filters.search().trim().is_empty() {
        "-".to_string()
    } else {
        format!("\"{}\"", filters.search().trim())
    };

    format!(
        "Search: {} | Cluster: {} | Organization: {} | Price: {} [{}] Free [{}] Paid",
        search,
        cluster,
        organization,
        price,
        if filters.free() { "x" } else { " " },
        if filters.paid() { "x" } else { " " },
    )
}

/// Render the listing for the current state
pub fn render_events_page(
    filters: &FilterState,
    events: &QueryState<Paginated<Event>>,
    options: Option<&FilterOptions>,
    ctx: &AppContext,
) -> String {
    let mut out = String::from("All Events\n==========\n");
    out.push_str(&render_filter_bar(filters, options));
    out.push_str("\n\n");

    match events {
        QueryState::Loading => out.push_str("Loading events..."),
        QueryState::Failed(_) => out.push_str("Failed to load events."),
        QueryState::Ready(page) if page.is_empty() => {
            if filters.is_filtered() {
                out.push_str("No events found\nTry adjusting your search or browse all events.");
            } else {
                out.push_str("There are currently no events.");
            }
        }
        QueryState::Ready(page) => {
            out.push_str(&cards::render_cards(&page.data, ctx.display_offset()));
            out.push_str("\n\n");
            let pagination = filters.pagination();
            out.push_str(&format!(
                "{} {} {}",
                if pagination.has_previous() { "< Previous" } else { "  (first)" },
                helpers::create_pagination_info(
                    pagination.current_page(),
                    pagination.total_pages(),
                    page.meta.total_items,
                ),
                if pagination.has_next() { "Next >" } else { "(last)" },
            ));
        }
    }
    out
}

/// Handle the `events` command: fetch events and filter options together
pub async fn handle_events_list(ctx: &AppContext, filters: &mut FilterState) -> String {
    let options_future = load_filter_options(ctx);
    let params = filters.to_query(ctx.page_size());
    let events_future = ctx.services.event_service.list_published(&params);

    let (options, events) = futures::join!(options_future, events_future);
    if let Ok(page) = &events {
        filters.sync_pages(&page.meta);
    }
    let events = QueryState::from_result("events", events);

    render_events_page(filters, &events, options.data(), ctx)
}

/// Render the organization and cluster choices for the filter dropdowns.
///
/// With a cluster selected, only its organizations are listed.
pub fn render_filter_options(options: &QueryState<FilterOptions>, cluster: &Selection) -> String {
    let options = match options {
        QueryState::Loading => return "Loading organizations...".to_string(),
        QueryState::Failed(_) => return "Failed to load organizations.".to_string(),
        QueryState::Ready(options) => options,
    };

    let mut out = String::from("Clusters\n--------\n  all  All clusters\n");
    for parent in &options.organization_parents {
        out.push_str(&format!("  {}  {}\n", parent.id, parent.name));
    }
    out.push_str("\nOrganizations\n-------------\n  all  All organizations\n");
    for org in options.organizations_in(cluster.id()) {
        match org.acronym.as_deref().filter(|a| !a.is_empty()) {
            Some(acronym) => out.push_str(&format!("  {}  {} ({})\n", org.id, org.name, acronym)),
            None => out.push_str(&format!("  {}  {}\n", org.id, org.name)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Organization, OrganizationParent};

    fn org(id: &str, name: &str, acronym: Option<&str>, parent: &str) -> Organization {
        Organization {
            id: id.to_string(),
            name: name.to_string(),
            acronym: acronym.map(str::to_string),
            description: None,
            organization_parent_id: Some(parent.to_string()),
        }
    }

    fn options() -> QueryState<FilterOptions> {
        QueryState::Ready(FilterOptions {
            organizations: vec![
                org("org-1", "Computer Studies Society", Some("CSS"), "cluster-1"),
                org("org-2", "Music Society", None, "cluster-2"),
            ],
            organization_parents: vec![OrganizationParent {
                id: "cluster-1".to_string(),
                name: "Computer Studies Cluster".to_string(),
                description: None,
                organizations: Vec::new(),
            }],
        })
    }

    #[test]
    fn test_filter_options_narrowed_by_cluster() {
        let all = render_filter_options(&options(), &Selection::All);
        assert!(all.contains("  org-1  Computer Studies Society (CSS)"));
        assert!(all.contains("  org-2  Music Society"));

        let narrowed = render_filter_options(&options(), &Selection::Id("cluster-1".to_string()));
        assert!(narrowed.contains("  cluster-1  Computer Studies Cluster"));
        assert!(narrowed.contains("org-1"));
        assert!(!narrowed.contains("Music Society"));
    }

    #[test]
    fn test_filter_options_failure() {
        let failed: QueryState<FilterOptions> = QueryState::Failed("boom".to_string());
        assert_eq!(render_filter_options(&failed, &Selection::All), "Failed to load organizations.");
    }
}
