//! Registration submission flow

use chrono::Utc;
use tracing::{info, warn};

use crate::forms::{ensure_registrable, Notification, RegistrationForm, RegistrationSubmitter};
use crate::models::Registration;
use crate::state::AppContext;
use crate::utils::errors::Result;

/// Build a submitter bound to the configured school email domain
pub fn submitter(ctx: &AppContext) -> RegistrationSubmitter {
    RegistrationSubmitter::new(
        ctx.services.registration_service.clone(),
        ctx.settings.registration.school_email_domain.clone(),
    )
}

/// Validate locally, confirm the event still takes registrations, then submit
pub async fn register(
    ctx: &AppContext,
    submitter: &RegistrationSubmitter,
    form: &RegistrationForm,
    event_id: &str,
    ticket_category_id: &str,
) -> Result<Registration> {
    // local validation first so a bad form never costs a request
    form.to_request(&ctx.settings.registration.school_email_domain, event_id, ticket_category_id)?;

    let event = ctx.services.event_service.get(event_id).await?;
    ensure_registrable(&event, ticket_category_id, Utc::now())?;

    submitter.submit(form, event_id, ticket_category_id).await
}

/// Handle the `register` command and turn the outcome into a notification
pub async fn handle_registration(
    ctx: &AppContext,
    form: &RegistrationForm,
    event_id: &str,
    ticket_category_id: &str,
) -> Notification {
    let submitter = submitter(ctx);
    let outcome = register(ctx, &submitter, form, event_id, ticket_category_id).await;

    match &outcome {
        Ok(registration) => info!(registration_id = %registration.id, "Registration completed"),
        Err(e) => warn!(error = %e, severity = %e.severity(), "Registration failed"),
    }
    Notification::from_outcome(&outcome)
}

pub fn render_notification(notification: &Notification) -> String {
    format!("{}\n{}", notification.title, notification.description)
}
