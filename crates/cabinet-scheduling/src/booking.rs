use cabinet_core::models::{Appointment, AppointmentStatus, Patient};
use cabinet_core::store::AppointmentStore;
use jiff::civil;
use serde::Deserialize;
use uuid::Uuid;

use crate::calendar::{CalendarSync, appointment_event};
use crate::error::SchedulingError;
use crate::slots::is_slot_taken;

/// Parse a form-style date (`2026-03-14`).
pub fn parse_date(input: &str) -> Result<civil::Date, SchedulingError> {
    civil::Date::strptime("%Y-%m-%d", input)
        .map_err(|_| SchedulingError::InvalidDate(input.to_string()))
}

/// Parse a form-style time (`14:30`).
pub fn parse_time(input: &str) -> Result<civil::Time, SchedulingError> {
    civil::Time::strptime("%H:%M", input)
        .map_err(|_| SchedulingError::InvalidTime(input.to_string()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub patient_id: Uuid,
    pub date: civil::Date,
    pub time: civil::Time,
    #[serde(default = "default_duration")]
    pub duration_minutes: i64,
    #[serde(default)]
    pub appointment_type: Option<String>,
    #[serde(default)]
    pub therapy_type: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_duration() -> i64 {
    60
}

/// What happened on the calendar side of a booking. Calendar failures never
/// fail the local operation; they are reported here for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarOutcome {
    Synced(String),
    Skipped,
    Failed(String),
}

#[derive(Debug)]
pub struct BookingOutcome {
    pub appointment: Appointment,
    pub calendar: CalendarOutcome,
}

/// Book an appointment.
///
/// Re-checks that no non-cancelled appointment occupies the exact
/// (date, time) before inserting, the same occupancy rule the slot listing
/// uses. After a successful insert, the calendar sync is best-effort.
pub fn book_appointment(
    store: &mut dyn AppointmentStore,
    calendar: Option<&dyn CalendarSync>,
    patient: &Patient,
    request: BookingRequest,
) -> Result<BookingOutcome, SchedulingError> {
    let existing = store.on_date(request.date)?;
    if is_slot_taken(&existing, request.time) {
        return Err(SchedulingError::SlotTaken {
            date: request.date,
            time: request.time,
        });
    }

    let now = jiff::Timestamp::now();
    let mut appointment = Appointment {
        id: Uuid::new_v4(),
        patient_id: request.patient_id,
        date: request.date,
        time: request.time,
        duration_minutes: request.duration_minutes,
        appointment_type: request.appointment_type,
        therapy_type: request.therapy_type,
        status: AppointmentStatus::Scheduled,
        notes: request.notes,
        reminder_sent: false,
        calendar_event_id: None,
        created_at: now,
        updated_at: now,
    };
    store.insert(&appointment)?;
    tracing::info!(appointment_id = %appointment.id, date = %appointment.date, time = %appointment.time, "appointment booked");

    let calendar_outcome = push_created_event(store, calendar, patient, &mut appointment);
    Ok(BookingOutcome {
        appointment,
        calendar: calendar_outcome,
    })
}

fn push_created_event(
    store: &mut dyn AppointmentStore,
    calendar: Option<&dyn CalendarSync>,
    patient: &Patient,
    appointment: &mut Appointment,
) -> CalendarOutcome {
    let Some(calendar) = calendar else {
        return CalendarOutcome::Skipped;
    };
    if !calendar.is_configured() {
        return CalendarOutcome::Skipped;
    }

    match calendar.create_event(&appointment_event(patient, appointment)) {
        Ok(event_id) => {
            appointment.calendar_event_id = Some(event_id.clone());
            appointment.updated_at = jiff::Timestamp::now();
            if let Err(e) = store.update(appointment) {
                tracing::warn!(appointment_id = %appointment.id, error = %e, "could not record calendar event id");
                return CalendarOutcome::Failed(e.to_string());
            }
            CalendarOutcome::Synced(event_id)
        }
        Err(e) => {
            tracing::warn!(appointment_id = %appointment.id, error = %e, "calendar sync failed, appointment kept locally");
            CalendarOutcome::Failed(e.to_string())
        }
    }
}

/// Cancel an appointment, freeing its slot. The linked calendar event, if
/// any, is deleted best-effort.
pub fn cancel_appointment(
    store: &mut dyn AppointmentStore,
    calendar: Option<&dyn CalendarSync>,
    appointment_id: Uuid,
) -> Result<Appointment, SchedulingError> {
    let mut appointment = store.get(appointment_id)?;
    appointment.set_status(AppointmentStatus::Cancelled);
    store.update(&appointment)?;

    if let Some(calendar) = calendar
        && calendar.is_configured()
        && let Some(event_id) = appointment.calendar_event_id.as_deref()
        && let Err(e) = calendar.delete_event(event_id)
    {
        tracing::warn!(appointment_id = %appointment.id, error = %e, "could not remove calendar event");
    }

    Ok(appointment)
}

/// Move an appointment to a new (date, time), re-checking occupancy against
/// everything except the appointment itself.
pub fn reschedule_appointment(
    store: &mut dyn AppointmentStore,
    calendar: Option<&dyn CalendarSync>,
    patient: &Patient,
    appointment_id: Uuid,
    date: civil::Date,
    time: civil::Time,
) -> Result<Appointment, SchedulingError> {
    let mut appointment = store.get(appointment_id)?;

    let others: Vec<_> = store
        .on_date(date)?
        .into_iter()
        .filter(|a| a.id != appointment_id)
        .collect();
    if is_slot_taken(&others, time) {
        return Err(SchedulingError::SlotTaken { date, time });
    }

    appointment.date = date;
    appointment.time = time;
    appointment.updated_at = jiff::Timestamp::now();
    store.update(&appointment)?;

    if let Some(calendar) = calendar
        && calendar.is_configured()
        && let Some(event_id) = appointment.calendar_event_id.clone()
    {
        match calendar.update_event(&event_id, &appointment_event(patient, &appointment)) {
            Ok(new_id) if new_id != event_id => {
                appointment.calendar_event_id = Some(new_id);
                appointment.updated_at = jiff::Timestamp::now();
                store.update(&appointment)?;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(appointment_id = %appointment.id, error = %e, "could not update calendar event");
            }
        }
    }

    Ok(appointment)
}
