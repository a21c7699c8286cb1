//! Forms module
//!
//! User-facing forms and their client-side validation

pub mod programs;
pub mod registration;

pub use registration::{
    ensure_registrable, year_level_options, FieldError, Notification, NotificationKind,
    RegistrationForm, RegistrationSubmitter,
};
