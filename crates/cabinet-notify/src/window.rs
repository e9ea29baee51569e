use cabinet_core::models::Appointment;
use cabinet_core::store::AppointmentStore;
use jiff::ToSpan;
use jiff::civil;

use crate::error::NotifyError;

/// Select appointments due for a reminder: scheduled, no reminder sent, and
/// starting `hours_before` hours from `now`, within a ±1 hour tolerance band
/// (inclusive).
///
/// The band exists because this runs on a recurring schedule (hourly or
/// finer) rather than exactly once at H hours before each appointment.
/// Anything outside the band is caught by an earlier or later run. The store
/// query is a coarse date-range pre-filter; the exact elapsed-hours check
/// happens here.
pub fn due_for_reminder(
    store: &dyn AppointmentStore,
    now: civil::DateTime,
    hours_before: i64,
) -> Result<Vec<Appointment>, NotifyError> {
    let window_start = now
        .checked_add((hours_before - 1).hours())
        .map_err(|e| NotifyError::WindowOverflow(e.to_string()))?;
    let window_end = now
        .checked_add((hours_before + 1).hours())
        .map_err(|e| NotifyError::WindowOverflow(e.to_string()))?;

    let candidates = store.awaiting_reminder(window_start.date(), window_end.date())?;

    let target = hours_before as f64;
    Ok(candidates
        .into_iter()
        .filter(|appointment| {
            let hours_until = now.duration_until(appointment.start()).as_secs_f64() / 3600.0;
            hours_until >= target - 1.0 && hours_until <= target + 1.0
        })
        .collect())
}
