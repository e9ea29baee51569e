//! Persistence boundary.
//!
//! The core reads and writes entities through these traits; concrete
//! implementations (SQL, in-memory fixtures) live with the caller. Single
//! writes are assumed atomic: a failed `insert`/`update` returns an error
//! rather than partially applying.

use jiff::civil;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Appointment, Patient};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: Uuid },

    #[error("commit failed: {0}")]
    Commit(String),
}

/// Appointment persistence.
///
/// Implementors should additionally enforce uniqueness of (date, time) among
/// non-cancelled rows at the storage layer; the booking flow's
/// check-then-insert sequence alone is racy under concurrent callers.
pub trait AppointmentStore {
    fn get(&self, id: Uuid) -> Result<Appointment, StoreError>;

    /// Every appointment on the given date, regardless of status.
    fn on_date(&self, date: civil::Date) -> Result<Vec<Appointment>, StoreError>;

    /// Scheduled appointments with no reminder sent yet, whose date lies in
    /// `from..=to`. A coarse pre-filter; callers refine by exact time.
    fn awaiting_reminder(
        &self,
        from: civil::Date,
        to: civil::Date,
    ) -> Result<Vec<Appointment>, StoreError>;

    fn insert(&mut self, appointment: &Appointment) -> Result<(), StoreError>;

    fn update(&mut self, appointment: &Appointment) -> Result<(), StoreError>;
}

pub trait PatientStore {
    fn get(&self, id: Uuid) -> Result<Patient, StoreError>;
}
