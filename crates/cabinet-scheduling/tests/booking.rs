use std::cell::RefCell;

use cabinet_core::models::{Appointment, AppointmentStatus, Patient};
use cabinet_core::store::{AppointmentStore, StoreError};
use cabinet_scheduling::SchedulingError;
use cabinet_scheduling::booking::{
    BookingRequest, CalendarOutcome, book_appointment, cancel_appointment, parse_date, parse_time,
    reschedule_appointment,
};
use cabinet_scheduling::calendar::{CalendarError, CalendarEvent, CalendarSync};
use jiff::civil;
use uuid::Uuid;

#[derive(Default)]
struct MemStore {
    rows: Vec<Appointment>,
}

impl AppointmentStore for MemStore {
    fn get(&self, id: Uuid) -> Result<Appointment, StoreError> {
        self.rows
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(StoreError::NotFound {
                kind: "appointment",
                id,
            })
    }

    fn on_date(&self, date: civil::Date) -> Result<Vec<Appointment>, StoreError> {
        Ok(self.rows.iter().filter(|a| a.date == date).cloned().collect())
    }

    fn awaiting_reminder(
        &self,
        from: civil::Date,
        to: civil::Date,
    ) -> Result<Vec<Appointment>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|a| {
                a.status == AppointmentStatus::Scheduled
                    && !a.reminder_sent
                    && a.date >= from
                    && a.date <= to
            })
            .cloned()
            .collect())
    }

    fn insert(&mut self, appointment: &Appointment) -> Result<(), StoreError> {
        self.rows.push(appointment.clone());
        Ok(())
    }

    fn update(&mut self, appointment: &Appointment) -> Result<(), StoreError> {
        let row = self
            .rows
            .iter_mut()
            .find(|a| a.id == appointment.id)
            .ok_or(StoreError::NotFound {
                kind: "appointment",
                id: appointment.id,
            })?;
        *row = appointment.clone();
        Ok(())
    }
}

/// Calendar fake: records calls, optionally failing them.
struct FakeCalendar {
    configured: bool,
    fail: bool,
    created: RefCell<Vec<CalendarEvent>>,
    deleted: RefCell<Vec<String>>,
}

impl FakeCalendar {
    fn working() -> Self {
        Self {
            configured: true,
            fail: false,
            created: RefCell::new(Vec::new()),
            deleted: RefCell::new(Vec::new()),
        }
    }

    fn broken() -> Self {
        Self {
            fail: true,
            ..Self::working()
        }
    }
}

impl CalendarSync for FakeCalendar {
    fn is_configured(&self) -> bool {
        self.configured
    }

    fn create_event(&self, event: &CalendarEvent) -> Result<String, CalendarError> {
        if self.fail {
            return Err(CalendarError("quota exceeded".to_string()));
        }
        self.created.borrow_mut().push(event.clone());
        Ok(format!("evt-{}", self.created.borrow().len()))
    }

    fn update_event(&self, event_id: &str, _event: &CalendarEvent) -> Result<String, CalendarError> {
        if self.fail {
            return Err(CalendarError("quota exceeded".to_string()));
        }
        Ok(event_id.to_string())
    }

    fn delete_event(&self, event_id: &str) -> Result<bool, CalendarError> {
        if self.fail {
            return Err(CalendarError("quota exceeded".to_string()));
        }
        self.deleted.borrow_mut().push(event_id.to_string());
        Ok(true)
    }
}

fn patient() -> Patient {
    let now = jiff::Timestamp::now();
    Patient {
        id: Uuid::new_v4(),
        first_name: "Marie".to_string(),
        last_name: "Dupont".to_string(),
        email: None,
        phone: Some("06 12 34 56 78".to_string()),
        date_of_birth: None,
        address: None,
        medical_history: None,
        current_treatments: None,
        allergies: None,
        emergency_contact: None,
        therapy_type: Some("TCC".to_string()),
        first_session_date: None,
        notes: None,
        active: true,
        created_at: now,
        updated_at: now,
    }
}

fn request(patient_id: Uuid, date: civil::Date, time: civil::Time) -> BookingRequest {
    BookingRequest {
        patient_id,
        date,
        time,
        duration_minutes: 60,
        appointment_type: Some("Suivi".to_string()),
        therapy_type: Some("TCC".to_string()),
        notes: None,
    }
}

#[test]
fn booking_a_free_slot_succeeds() {
    let mut store = MemStore::default();
    let patient = patient();
    let date = civil::date(2026, 9, 1);
    let time = civil::time(11, 0, 0, 0);

    let outcome = book_appointment(&mut store, None, &patient, request(patient.id, date, time))
        .expect("booking should succeed");

    assert_eq!(outcome.calendar, CalendarOutcome::Skipped);
    assert_eq!(store.rows.len(), 1);
    assert_eq!(store.rows[0].status, AppointmentStatus::Scheduled);
    assert!(!store.rows[0].reminder_sent);
}

#[test]
fn double_booking_the_same_slot_is_rejected() {
    let mut store = MemStore::default();
    let patient = patient();
    let date = civil::date(2026, 9, 1);
    let time = civil::time(11, 0, 0, 0);

    book_appointment(&mut store, None, &patient, request(patient.id, date, time)).unwrap();
    let second = book_appointment(&mut store, None, &patient, request(patient.id, date, time));

    assert!(matches!(second, Err(SchedulingError::SlotTaken { .. })));
    assert_eq!(store.rows.len(), 1);
}

#[test]
fn cancelled_slot_can_be_rebooked() {
    let mut store = MemStore::default();
    let patient = patient();
    let date = civil::date(2026, 9, 1);
    let time = civil::time(11, 0, 0, 0);

    let first = book_appointment(&mut store, None, &patient, request(patient.id, date, time))
        .unwrap()
        .appointment;
    cancel_appointment(&mut store, None, first.id).unwrap();

    let second = book_appointment(&mut store, None, &patient, request(patient.id, date, time));
    assert!(second.is_ok());
}

#[test]
fn calendar_event_id_is_recorded_on_sync() {
    let mut store = MemStore::default();
    let calendar = FakeCalendar::working();
    let patient = patient();
    let date = civil::date(2026, 9, 1);

    let outcome = book_appointment(
        &mut store,
        Some(&calendar),
        &patient,
        request(patient.id, date, civil::time(9, 0, 0, 0)),
    )
    .unwrap();

    assert_eq!(outcome.calendar, CalendarOutcome::Synced("evt-1".to_string()));
    assert_eq!(store.rows[0].calendar_event_id.as_deref(), Some("evt-1"));

    let events = calendar.created.borrow();
    assert_eq!(events[0].summary, "Séance - Marie Dupont");
    assert_eq!(events[0].start, civil::date(2026, 9, 1).at(9, 0, 0, 0));
    assert_eq!(events[0].end, civil::date(2026, 9, 1).at(10, 0, 0, 0));
}

#[test]
fn calendar_failure_does_not_fail_the_booking() {
    let mut store = MemStore::default();
    let calendar = FakeCalendar::broken();
    let patient = patient();

    let outcome = book_appointment(
        &mut store,
        Some(&calendar),
        &patient,
        request(patient.id, civil::date(2026, 9, 1), civil::time(9, 0, 0, 0)),
    )
    .expect("local booking must survive calendar errors");

    assert!(matches!(outcome.calendar, CalendarOutcome::Failed(_)));
    assert_eq!(store.rows.len(), 1);
    assert_eq!(store.rows[0].calendar_event_id, None);
}

#[test]
fn cancel_removes_the_calendar_event() {
    let mut store = MemStore::default();
    let calendar = FakeCalendar::working();
    let patient = patient();

    let booked = book_appointment(
        &mut store,
        Some(&calendar),
        &patient,
        request(patient.id, civil::date(2026, 9, 1), civil::time(9, 0, 0, 0)),
    )
    .unwrap()
    .appointment;

    let cancelled = cancel_appointment(&mut store, Some(&calendar), booked.id).unwrap();
    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
    assert_eq!(calendar.deleted.borrow().as_slice(), ["evt-1".to_string()]);
}

#[test]
fn reschedule_rejects_an_occupied_target_slot() {
    let mut store = MemStore::default();
    let patient = patient();
    let date = civil::date(2026, 9, 1);

    book_appointment(
        &mut store,
        None,
        &patient,
        request(patient.id, date, civil::time(10, 0, 0, 0)),
    )
    .unwrap();
    let moving = book_appointment(
        &mut store,
        None,
        &patient,
        request(patient.id, date, civil::time(11, 0, 0, 0)),
    )
    .unwrap()
    .appointment;

    let result = reschedule_appointment(
        &mut store,
        None,
        &patient,
        moving.id,
        date,
        civil::time(10, 0, 0, 0),
    );
    assert!(matches!(result, Err(SchedulingError::SlotTaken { .. })));
}

#[test]
fn reschedule_to_its_own_slot_is_allowed() {
    let mut store = MemStore::default();
    let patient = patient();
    let date = civil::date(2026, 9, 1);
    let time = civil::time(11, 0, 0, 0);

    let booked = book_appointment(&mut store, None, &patient, request(patient.id, date, time))
        .unwrap()
        .appointment;

    let moved = reschedule_appointment(&mut store, None, &patient, booked.id, date, time);
    assert!(moved.is_ok());
}

#[test]
fn malformed_inputs_are_validation_errors() {
    assert!(matches!(
        parse_date("01/09/2026"),
        Err(SchedulingError::InvalidDate(_))
    ));
    assert!(matches!(
        parse_time("9h30"),
        Err(SchedulingError::InvalidTime(_))
    ));
    assert_eq!(parse_date("2026-09-01").unwrap(), civil::date(2026, 9, 1));
    assert_eq!(parse_time("09:30").unwrap(), civil::time(9, 30, 0, 0));
}
