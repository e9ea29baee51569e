use cabinet_core::models::{Appointment, Patient};
use jiff::civil;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("calendar provider error: {0}")]
pub struct CalendarError(pub String);

/// Event payload handed to the external calendar collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub summary: String,
    pub description: String,
    pub start: civil::DateTime,
    pub end: civil::DateTime,
}

/// External calendar collaborator. Implementations wrap a concrete provider
/// (e.g. Google Calendar); the core only ever degrades to a warning when one
/// of these calls fails.
pub trait CalendarSync {
    fn is_configured(&self) -> bool;

    /// Create an event, returning the provider's event id.
    fn create_event(&self, event: &CalendarEvent) -> Result<String, CalendarError>;

    /// Update an existing event, returning its (possibly re-issued) id.
    fn update_event(&self, event_id: &str, event: &CalendarEvent) -> Result<String, CalendarError>;

    /// Delete an event. Returns false if the provider no longer knows it.
    fn delete_event(&self, event_id: &str) -> Result<bool, CalendarError>;
}

/// Build the calendar payload for an appointment.
pub fn appointment_event(patient: &Patient, appointment: &Appointment) -> CalendarEvent {
    CalendarEvent {
        summary: format!("Séance - {}", patient.display_name()),
        description: format!(
            "Type: {}\nDurée: {} minutes\nNotes: {}",
            appointment.therapy_type.as_deref().unwrap_or("Consultation"),
            appointment.duration_minutes,
            appointment.notes.as_deref().unwrap_or("Aucune note"),
        ),
        start: appointment.start(),
        end: appointment.end(),
    }
}
