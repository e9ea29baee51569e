use std::str::FromStr;

use jiff::civil;
use jiff::ToSpan;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl FromStr for AppointmentStatus {
    type Err = CoreError;

    /// Accepts the serialized snake_case form, as submitted by forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            "no_show" => Ok(Self::NoShow),
            other => Err(CoreError::InvalidStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub date: civil::Date,
    pub time: civil::Time,
    pub duration_minutes: i64,
    pub appointment_type: Option<String>,
    pub therapy_type: Option<String>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub reminder_sent: bool,
    /// Event id assigned by the external calendar collaborator, if synced.
    pub calendar_event_id: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Appointment {
    /// Combined civil start of the appointment.
    pub fn start(&self) -> civil::DateTime {
        self.date.to_datetime(self.time)
    }

    /// Civil end, start plus the declared duration.
    pub fn end(&self) -> civil::DateTime {
        self.start().saturating_add(self.duration_minutes.minutes())
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == AppointmentStatus::Cancelled
    }

    /// The reminder flag only ever moves from false to true.
    pub fn mark_reminder_sent(&mut self) {
        self.reminder_sent = true;
        self.updated_at = jiff::Timestamp::now();
    }

    pub fn set_status(&mut self, status: AppointmentStatus) {
        self.status = status;
        self.updated_at = jiff::Timestamp::now();
    }
}
