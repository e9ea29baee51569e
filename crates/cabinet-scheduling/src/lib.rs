//! cabinet-scheduling
//!
//! Fixed-slot appointment scheduling: candidate slot generation, availability
//! against booked appointments, and the booking/cancel/reschedule flows with
//! best-effort calendar sync through the [`calendar::CalendarSync`] seam.

pub mod booking;
pub mod calendar;
pub mod error;
pub mod slots;

pub use error::SchedulingError;
