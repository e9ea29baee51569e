//! cabinet-notify
//!
//! Appointment reminders: the delivery collaborator seam, message
//! formatting, the per-channel dispatcher, the reminder-window selector, and
//! the batch runner that ties them together.

pub mod delivery;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod runner;
pub mod window;

pub use error::NotifyError;
