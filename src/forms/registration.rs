//! Event registration form
//!
//! Client-side validation runs before anything is sent; a form that fails
//! validation never reaches the network.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::{CreateRegistrationRequest, Event, Registration};
use crate::services::RegistrationService;
use crate::utils::errors::{AdtoError, Result, GENERIC_REGISTRATION_FAILURE};
use crate::utils::helpers;
use crate::utils::logging;

use super::programs;

/// Year levels offered by the form
pub const YEAR_LEVELS: std::ops::RangeInclusive<u8> = 1..=5;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)+$")
            .expect("email pattern is valid")
    })
}

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Values entered by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub full_name: String,
    pub school_email: String,
    pub cluster: String,
    pub course: String,
    pub year_level: String,
    pub data_privacy_consent: bool,
}

impl RegistrationForm {
    /// Pick a cluster; a previously chosen course is cleared when it changes
    pub fn set_cluster(&mut self, cluster: impl Into<String>) {
        let cluster = cluster.into();
        if cluster.trim() != self.cluster.trim() {
            self.course.clear();
        }
        self.cluster = cluster;
    }

    /// Validate every field, collecting all failures
    pub fn validate(&self, school_email_domain: &str) -> std::result::Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.full_name.trim().chars().count() < 2 {
            errors.push(FieldError::new("fullName", "Full name must be at least 2 characters."));
        }

        let email = self.school_email.trim();
        if !email_pattern().is_match(email) {
            errors.push(FieldError::new("schoolEmail", "Please enter a valid email address."));
        } else if !email.to_ascii_lowercase().ends_with(&school_email_domain.to_ascii_lowercase()) {
            errors.push(FieldError::new(
                "schoolEmail",
                format!("Please use your school email ({}).", school_email_domain),
            ));
        }

        let cluster = self.cluster.trim();
        match programs::programs_for(cluster) {
            None => errors.push(FieldError::new("cluster", "Please select a cluster.")),
            Some(_) if self.course.trim().is_empty() => {
                errors.push(FieldError::new("course", "Please select a course."))
            }
            Some(_) if !programs::offers(cluster, &self.course) => errors.push(FieldError::new(
                "course",
                format!("Please select a course offered by {}.", cluster),
            )),
            Some(_) => {}
        }

        if parse_year_level(&self.year_level).is_none() {
            errors.push(FieldError::new("yearLevel", "Please select your year level."));
        }

        if !self.data_privacy_consent {
            errors.push(FieldError::new(
                "dataPrivacyConsent",
                "You must agree to the Data Privacy Policy to proceed.",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and build the request body for an event ticket category
    pub fn to_request(
        &self,
        school_email_domain: &str,
        event_id: &str,
        ticket_category_id: &str,
    ) -> Result<CreateRegistrationRequest> {
        self.validate(school_email_domain).map_err(|errors| {
            AdtoError::Validation(errors.into_iter().map(|e| e.message).collect())
        })?;

        Ok(CreateRegistrationRequest {
            full_name: self.full_name.trim().to_string(),
            school_email: self.school_email.trim().to_ascii_lowercase(),
            cluster_id: self.cluster.trim().to_string(),
            course: self.course.trim().to_string(),
            year_level: self.year_level.trim().to_string(),
            event_id: event_id.to_string(),
            ticket_category_id: ticket_category_id.to_string(),
        })
    }
}

fn parse_year_level(value: &str) -> Option<u8> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|level| YEAR_LEVELS.contains(level))
}

/// `(value, label)` pairs for the year level dropdown
pub fn year_level_options() -> Vec<(String, String)> {
    YEAR_LEVELS
        .map(|level| (level.to_string(), helpers::year_level_label(level)))
        .collect()
}

/// Check that an event still takes registrations for a category
pub fn ensure_registrable(event: &Event, ticket_category_id: &str, now: DateTime<Utc>) -> Result<()> {
    if !event.is_registration_open {
        return Err(AdtoError::InvalidInput(format!(
            "Registration for {} is closed",
            event.name
        )));
    }

    let category = event.find_ticket_category(ticket_category_id).ok_or_else(|| AdtoError::NotFound {
        resource: "Ticket category",
        id: ticket_category_id.to_string(),
    })?;

    if !category.is_open_at(now) {
        return Err(AdtoError::InvalidInput(format!(
            "The registration deadline for {} has passed",
            category.name
        )));
    }

    Ok(())
}

/// Outcome shown to the user after a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl Notification {
    pub fn from_outcome(outcome: &Result<Registration>) -> Self {
        match outcome {
            Ok(_) => Self {
                kind: NotificationKind::Success,
                title: "Registration Successful!".to_string(),
                description: "Your registration has been submitted. Check your email for confirmation."
                    .to_string(),
            },
            Err(e) => Self {
                kind: NotificationKind::Error,
                title: "Registration Failed".to_string(),
                description: e.user_message(GENERIC_REGISTRATION_FAILURE),
            },
        }
    }
}

/// Submits registrations, refusing a second submit while one is in flight
#[derive(Debug, Clone)]
pub struct RegistrationSubmitter {
    service: RegistrationService,
    school_email_domain: String,
    submitting: Arc<AtomicBool>,
}

/// Clears the in-flight flag however the submission ends
struct SubmittingGuard(Arc<AtomicBool>);

impl Drop for SubmittingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl RegistrationSubmitter {
    pub fn new(service: RegistrationService, school_email_domain: impl Into<String>) -> Self {
        Self {
            service,
            school_email_domain: school_email_domain.into(),
            submitting: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether the submit control should be disabled
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Validate and submit a registration for one ticket category
    pub async fn submit(
        &self,
        form: &RegistrationForm,
        event_id: &str,
        ticket_category_id: &str,
    ) -> Result<Registration> {
        let request = form.to_request(&self.school_email_domain, event_id, ticket_category_id)?;

        if self.submitting.swap(true, Ordering::SeqCst) {
            warn!(event_id = event_id, "Ignoring duplicate registration submit");
            return Err(AdtoError::AlreadySubmitting);
        }
        let _guard = SubmittingGuard(Arc::clone(&self.submitting));

        logging::log_user_action("register", Some(event_id));
        let registration = self.service.create(&request).await?;
        info!(registration_id = %registration.id, "Registration created");
        Ok(registration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const DOMAIN: &str = "@addu.edu.ph";

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            full_name: "Juan Dela Cruz".to_string(),
            school_email: "jdcruz@addu.edu.ph".to_string(),
            cluster: "Computer Studies Cluster".to_string(),
            course: "BS Computer Science".to_string(),
            year_level: "2".to_string(),
            data_privacy_consent: true,
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid_form().validate(DOMAIN).is_ok());

        let mut form = valid_form();
        form.school_email = "JDCruz@ADDU.EDU.PH".to_string();
        assert!(form.validate(DOMAIN).is_ok());
    }

    #[test]
    fn test_rejects_non_school_email() {
        let mut form = valid_form();
        form.school_email = "juan@gmail.com".to_string();
        let errors = form.validate(DOMAIN).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "schoolEmail");
        assert!(errors[0].message.contains(DOMAIN));
    }

    #[test]
    fn test_collects_all_errors() {
        let form = RegistrationForm {
            full_name: " J ".to_string(),
            school_email: "not-an-email".to_string(),
            cluster: String::new(),
            course: String::new(),
            year_level: "7".to_string(),
            data_privacy_consent: false,
        };
        let fields: Vec<&str> = form.validate(DOMAIN).unwrap_err().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["fullName", "schoolEmail", "cluster", "yearLevel", "dataPrivacyConsent"]);
    }

    #[test]
    fn test_course_must_belong_to_cluster() {
        let mut form = valid_form();
        form.course = "BS Nursing".to_string();
        let errors = form.validate(DOMAIN).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "course");
        assert_eq!(errors[0].message, "Please select a course offered by Computer Studies Cluster.");

        form.course = "  ".to_string();
        let errors = form.validate(DOMAIN).unwrap_err();
        assert_eq!(errors[0].message, "Please select a course.");
    }

    #[test]
    fn test_unknown_cluster_rejected() {
        let mut form = valid_form();
        form.cluster = "cluster-1".to_string();
        let errors = form.validate(DOMAIN).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "cluster");
    }

    #[test]
    fn test_changing_cluster_clears_course() {
        let mut form = valid_form();
        form.set_cluster("Computer Studies Cluster");
        assert_eq!(form.course, "BS Computer Science");

        form.set_cluster("School of Nursing");
        assert!(form.course.is_empty());
        assert_eq!(form.validate(DOMAIN).unwrap_err()[0].field, "course");
    }

    #[test]
    fn test_to_request() {
        let request = valid_form().to_request(DOMAIN, "evt-1", "tc-1").unwrap();
        assert_eq!(request.event_id, "evt-1");
        assert_eq!(request.ticket_category_id, "tc-1");
        assert_eq!(request.year_level, "2");
        assert_eq!(request.cluster_id, "Computer Studies Cluster");
        assert_eq!(request.course, "BS Computer Science");

        let mut form = valid_form();
        form.data_privacy_consent = false;
        assert_matches!(form.to_request(DOMAIN, "evt-1", "tc-1"), Err(AdtoError::Validation(_)));
    }

    #[test]
    fn test_year_level_options() {
        let options = year_level_options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], ("1".to_string(), "1st Year".to_string()));
    }

    #[test]
    fn test_notification_messages() {
        let ok = Notification::from_outcome(&Err(AdtoError::AlreadySubmitting));
        assert_eq!(ok.kind, NotificationKind::Error);

        let err = Notification::from_outcome(&Err(AdtoError::Api(
            crate::utils::errors::ApiError::ServiceUnavailable,
        )));
        assert_eq!(err.title, "Registration Failed");
        assert_eq!(err.description, GENERIC_REGISTRATION_FAILURE);
    }
}
