use cabinet_core::config::PracticeConfig;
use cabinet_core::models::Appointment;
use jiff::civil;
use jiff::ToSpan;

/// All candidate slot start-times for a day: fixed increments from the
/// opening time up to, but excluding, the closing time.
pub fn day_slots(config: &PracticeConfig) -> Vec<civil::Time> {
    if config.slot_duration_minutes <= 0 {
        return Vec::new();
    }

    let mut slots = Vec::new();
    let mut current = config.opening_time;
    while current < config.closing_time {
        slots.push(current);
        // checked_add fails once the increment would pass midnight
        match current.checked_add(config.slot_duration_minutes.minutes()) {
            Ok(next) => current = next,
            Err(_) => break,
        }
    }
    slots
}

/// Whether `time` is occupied by a non-cancelled appointment.
///
/// This is the single occupancy rule: both slot listing and the booking
/// pre-check go through it. Exact start-time comparison only; durations are
/// not considered, so offset overlaps are representable.
pub fn is_slot_taken(appointments: &[Appointment], time: civil::Time) -> bool {
    appointments
        .iter()
        .any(|appointment| !appointment.is_cancelled() && appointment.time == time)
}

/// The day's candidate slots minus those already taken. `appointments` is
/// the full set for the date in question, any status.
pub fn available_slots(config: &PracticeConfig, appointments: &[Appointment]) -> Vec<civil::Time> {
    day_slots(config)
        .into_iter()
        .filter(|slot| !is_slot_taken(appointments, *slot))
        .collect()
}
