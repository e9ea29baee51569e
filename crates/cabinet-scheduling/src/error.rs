use cabinet_core::store::StoreError;
use jiff::civil;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedulingError {
    #[error("slot {time} on {date} is already booked")]
    SlotTaken { date: civil::Date, time: civil::Time },

    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("invalid time (expected HH:MM): {0}")]
    InvalidTime(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
