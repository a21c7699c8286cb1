//! Test data helpers for creating Events API payloads

use adto_client::forms::RegistrationForm;
use serde_json::{json, Value};

/// A published event with one ticket category per price
pub fn test_event(id: &str, name: &str, prices: &[f64]) -> Value {
    let categories: Vec<Value> = prices
        .iter()
        .enumerate()
        .map(|(i, price)| {
            json!({
                "id": format!("{}-tc{}", id, i + 1),
                "name": format!("Tier {}", i + 1),
                "price": price,
                "capacity": 50,
                "registrationDeadline": "2099-01-01T00:00:00Z"
            })
        })
        .collect();

    json!({
        "id": id,
        "name": name,
        "description": format!("{} for the whole campus", name),
        "dateStart": "2099-06-15T01:00:00Z",
        "dateEnd": "2099-06-15T09:00:00Z",
        "isPublished": true,
        "isRegistrationOpen": true,
        "isRegistrationRequired": true,
        "isOpenToOutsiders": false,
        "org": { "id": "org-1", "name": "Computer Studies Society", "acronym": "CSS" },
        "ticketCategories": categories,
        "registrations": []
    })
}

/// A `{data, meta}` list envelope
pub fn test_events_page(events: Vec<Value>, current_page: u32, total_pages: u32, total_items: u64) -> Value {
    json!({
        "data": events,
        "meta": {
            "currentPage": current_page,
            "totalPages": total_pages,
            "totalItems": total_items
        }
    })
}

pub fn test_organizations() -> Value {
    json!([
        { "id": "org-1", "name": "Computer Studies Society", "acronym": "CSS", "organizationParentId": "cluster-1" },
        { "id": "org-2", "name": "Music Society", "organizationParentId": "cluster-2" }
    ])
}

pub fn test_organization_parents() -> Value {
    json!({ "data": [
        { "id": "cluster-1", "name": "Computer Studies Cluster" },
        { "id": "cluster-2", "name": "Humanities and Letters Cluster" }
    ]})
}

pub fn test_registration_form() -> RegistrationForm {
    RegistrationForm {
        full_name: "Juan Dela Cruz".to_string(),
        school_email: "jdcruz@addu.edu.ph".to_string(),
        cluster: "Computer Studies Cluster".to_string(),
        course: "BS Information Technology".to_string(),
        year_level: "3".to_string(),
        data_privacy_consent: true,
    }
}
