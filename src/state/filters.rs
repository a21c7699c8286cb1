//! Event list filter state
//!
//! Holds what the user picked in the filter bar and turns it into the
//! query parameters sent to the events endpoint. Every effective change
//! sends the listing back to page one.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pagination::Pagination;
use crate::models::PageMeta;
use crate::services::{EventQueryParams, OrderBy, PriceCategory};
use crate::utils::logging;

/// A dropdown choice: everything, or one specific identifier
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    All,
    Id(String),
}

impl Selection {
    /// `"all"` (any case) or blank input clears the filter
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Selection::All
        } else {
            Selection::Id(trimmed.to_string())
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Id(id) => Some(id),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "all"),
            Selection::Id(id) => write!(f, "{}", id),
        }
    }
}

/// Price filter derived from the free/paid checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceFilter {
    All,
    Free,
    Paid,
}

impl PriceFilter {
    /// Both or neither checked means no filter
    pub fn from_toggles(free: bool, paid: bool) -> Self {
        match (free, paid) {
            (true, false) => PriceFilter::Free,
            (false, true) => PriceFilter::Paid,
            _ => PriceFilter::All,
        }
    }

    pub fn as_param(&self) -> Option<PriceCategory> {
        match self {
            PriceFilter::All => None,
            PriceFilter::Free => Some(PriceCategory::Free),
            PriceFilter::Paid => Some(PriceCategory::Paid),
        }
    }
}

impl fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceFilter::All => write!(f, "all"),
            PriceFilter::Free => write!(f, "free"),
            PriceFilter::Paid => write!(f, "paid"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    search: String,
    organization: Selection,
    organization_parent: Selection,
    free: bool,
    paid: bool,
    registration_open_only: bool,
    order_by: Option<OrderBy>,
    pagination: Pagination,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn organization(&self) -> &Selection {
        &self.organization
    }

    pub fn organization_parent(&self) -> &Selection {
        &self.organization_parent
    }

    pub fn free(&self) -> bool {
        self.free
    }

    pub fn paid(&self) -> bool {
        self.paid
    }

    pub fn price_filter(&self) -> PriceFilter {
        PriceFilter::from_toggles(self.free, self.paid)
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn page(&self) -> u32 {
        self.pagination.current_page()
    }

    /// Whether anything narrows the listing
    pub fn is_filtered(&self) -> bool {
        !self.search.trim().is_empty()
            || self.organization != Selection::All
            || self.organization_parent != Selection::All
            || self.price_filter() != PriceFilter::All
            || self.registration_open_only
    }

    /// Commit search text (normally the debounced value)
    pub fn set_search(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        // trailing spaces do not change the query
        if text.trim() == self.search.trim() {
            return false;
        }
        logging::log_filter_change("search", &text, 1);
        self.search = text;
        self.changed();
        true
    }

    pub fn set_organization(&mut self, selection: Selection) -> bool {
        if selection == self.organization {
            return false;
        }
        logging::log_filter_change("organization", &selection.to_string(), 1);
        self.organization = selection;
        self.changed();
        true
    }

    pub fn set_organization_parent(&mut self, selection: Selection) -> bool {
        if selection == self.organization_parent {
            return false;
        }
        logging::log_filter_change("organization_parent", &selection.to_string(), 1);
        self.organization_parent = selection;
        self.changed();
        true
    }

    pub fn set_free(&mut self, checked: bool) -> bool {
        if checked == self.free {
            return false;
        }
        self.free = checked;
        logging::log_filter_change("price", &self.price_filter().to_string(), 1);
        self.changed();
        true
    }

    pub fn set_paid(&mut self, checked: bool) -> bool {
        if checked == self.paid {
            return false;
        }
        self.paid = checked;
        logging::log_filter_change("price", &self.price_filter().to_string(), 1);
        self.changed();
        true
    }

    pub fn toggle_free(&mut self) {
        self.set_free(!self.free);
    }

    pub fn toggle_paid(&mut self) {
        self.set_paid(!self.paid);
    }

    pub fn set_registration_open_only(&mut self, only_open: bool) -> bool {
        if only_open == self.registration_open_only {
            return false;
        }
        self.registration_open_only = only_open;
        self.changed();
        true
    }

    pub fn set_order_by(&mut self, order_by: Option<OrderBy>) -> bool {
        if order_by == self.order_by {
            return false;
        }
        self.order_by = order_by;
        self.changed();
        true
    }

    /// Reset every filter and return to page one
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn next_page(&mut self) -> bool {
        self.pagination.next()
    }

    pub fn previous_page(&mut self) -> bool {
        self.pagination.previous()
    }

    /// Jump to a known page; returns whether the page changed
    pub fn go_to_page(&mut self, page: u32) -> bool {
        self.pagination.go_to(page)
    }

    /// Request a specific page; the next response's metadata corrects it
    pub fn start_at_page(&mut self, page: u32) {
        self.pagination = Pagination::at_page(page);
    }

    /// Record page metadata from the last response
    pub fn sync_pages(&mut self, meta: &PageMeta) {
        self.pagination.sync(meta);
    }

    /// Query parameters for the events endpoint
    pub fn to_query(&self, limit: u32) -> EventQueryParams {
        let search = self.search.trim();
        EventQueryParams {
            page: Some(self.pagination.current_page()),
            limit: Some(limit),
            is_registration_open: self.registration_open_only.then_some(true),
            organization_id: self.organization.id().map(str::to_string),
            organization_parent_id: self.organization_parent.id().map(str::to_string),
            search_filter: (!search.is_empty()).then(|| search.to_string()),
            order_by: self.order_by,
            price: self.price_filter().as_param(),
            ..EventQueryParams::default()
        }
    }

    fn changed(&mut self) {
        self.pagination.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::query::ToQueryPairs;

    fn on_page_three() -> FilterState {
        let mut filters = FilterState::new();
        filters.sync_pages(&PageMeta { current_page: 3, total_pages: 5, total_items: 45 });
        assert_eq!(filters.page(), 3);
        filters
    }

    #[test]
    fn test_whitespace_only_search_change_keeps_page() {
        let mut filters = FilterState::new();
        assert!(filters.set_search("jazz"));
        filters.sync_pages(&PageMeta { current_page: 3, total_pages: 5, total_items: 45 });

        assert!(!filters.set_search("jazz "));
        assert_eq!(filters.page(), 3);
        assert_eq!(filters.to_query(9).search_filter.as_deref(), Some("jazz"));

        assert!(filters.set_search("jazz band"));
        assert_eq!(filters.page(), 1);
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!(Selection::parse("all"), Selection::All);
        assert_eq!(Selection::parse(" ALL "), Selection::All);
        assert_eq!(Selection::parse(""), Selection::All);
        assert_eq!(Selection::parse("org-7"), Selection::Id("org-7".to_string()));
    }

    #[test]
    fn test_price_toggles_collapse() {
        let mut filters = FilterState::new();
        assert_eq!(filters.price_filter(), PriceFilter::All);

        filters.toggle_free();
        assert_eq!(filters.price_filter(), PriceFilter::Free);
        filters.toggle_paid();
        assert_eq!(filters.price_filter(), PriceFilter::All);

        filters.toggle_free();
        assert_eq!(filters.price_filter(), PriceFilter::Paid);
        filters.toggle_paid();
        assert_eq!(filters.price_filter(), PriceFilter::All);
    }

    #[test]
    fn test_both_toggles_on_then_off_is_unfiltered() {
        let mut filters = FilterState::new();
        filters.set_free(true);
        filters.set_paid(true);
        assert_eq!(filters.to_query(9).price, None);
        filters.set_free(false);
        filters.set_paid(false);
        assert_eq!(filters.to_query(9).price, None);
    }

    #[test]
    fn test_changes_reset_page() {
        let mut filters = on_page_three();
        assert!(filters.set_search("music"));
        assert_eq!(filters.page(), 1);

        let mut filters = on_page_three();
        filters.set_organization(Selection::parse("org-1"));
        assert_eq!(filters.page(), 1);

        let mut filters = on_page_three();
        filters.set_organization_parent(Selection::parse("cluster-2"));
        assert_eq!(filters.page(), 1);

        let mut filters = on_page_three();
        filters.toggle_paid();
        assert_eq!(filters.page(), 1);
    }

    #[test]
    fn test_unchanged_value_keeps_page() {
        let mut filters = on_page_three();
        assert!(!filters.set_organization(Selection::All));
        assert!(!filters.set_search(""));
        assert_eq!(filters.page(), 3);
    }

    #[test]
    fn test_start_at_page() {
        let mut filters = FilterState::new();
        filters.start_at_page(4);
        assert_eq!(filters.to_query(9).page, Some(4));
        assert!(!filters.next_page());
        filters.start_at_page(0);
        assert_eq!(filters.page(), 1);
    }

    #[test]
    fn test_all_clears_selection() {
        let mut filters = FilterState::new();
        filters.set_organization(Selection::parse("org-1"));
        assert_eq!(filters.to_query(9).organization_id.as_deref(), Some("org-1"));
        filters.set_organization(Selection::parse("all"));
        assert_eq!(filters.to_query(9).organization_id, None);
    }

    #[test]
    fn test_to_query() {
        let mut filters = FilterState::new();
        filters.set_search("  career fair ");
        filters.set_organization_parent(Selection::parse("cluster-1"));
        filters.set_free(true);
        filters.set_registration_open_only(true);

        assert_eq!(
            filters.to_query(9).to_query_string(),
            "?page=1&limit=9&isRegistrationOpen=true&organizationParentId=cluster-1&searchFilter=career+fair&price=free"
        );
        assert!(filters.is_filtered());

        filters.clear();
        assert!(!filters.is_filtered());
        assert_eq!(filters.to_query(9).to_query_string(), "?page=1&limit=9");
    }
}
