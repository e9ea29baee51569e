use cabinet_core::config::{PracticeConfig, ReminderMethod};
use cabinet_core::models::{Appointment, AppointmentStatus, Patient};
use jiff::civil;
use serde_json::json;
use uuid::Uuid;

fn make_appointment() -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        patient_id: Uuid::new_v4(),
        date: civil::date(2026, 9, 2),
        time: civil::time(14, 30, 0, 0),
        duration_minutes: 45,
        appointment_type: None,
        therapy_type: Some("Sophrologie".to_string()),
        status: AppointmentStatus::default(),
        notes: None,
        reminder_sent: false,
        calendar_event_id: None,
        created_at: jiff::Timestamp::UNIX_EPOCH,
        updated_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

#[test]
fn config_defaults_match_practice_policy() {
    let config = PracticeConfig::default();

    assert_eq!(config.reminder_hours_before, 24);
    assert_eq!(config.reminder_method, ReminderMethod::Both);
    assert!(!config.reminders_enabled);
    assert_eq!(config.opening_time, civil::time(9, 0, 0, 0));
    assert_eq!(config.closing_time, civil::time(18, 0, 0, 0));
    assert_eq!(config.slot_duration_minutes, 60);
}

#[test]
fn config_deserializes_from_partial_json() {
    let config: PracticeConfig =
        serde_json::from_value(json!({ "reminders_enabled": true, "reminder_method": "sms" }))
            .unwrap();

    assert!(config.reminders_enabled);
    assert_eq!(config.reminder_method, ReminderMethod::Sms);
    assert_eq!(config.reminder_hours_before, 24);
    assert_eq!(config.slot_duration_minutes, 60);
}

#[test]
fn appointment_start_and_end_span_the_duration() {
    let appointment = make_appointment();

    assert_eq!(
        appointment.start(),
        civil::DateTime::constant(2026, 9, 2, 14, 30, 0, 0)
    );
    assert_eq!(
        appointment.end(),
        civil::DateTime::constant(2026, 9, 2, 15, 15, 0, 0)
    );
}

#[test]
fn status_transitions_touch_updated_at() {
    let mut appointment = make_appointment();
    assert!(!appointment.is_cancelled());

    appointment.set_status(AppointmentStatus::Cancelled);

    assert!(appointment.is_cancelled());
    assert!(appointment.updated_at > jiff::Timestamp::UNIX_EPOCH);
}

#[test]
fn reminder_flag_moves_once() {
    let mut appointment = make_appointment();

    appointment.mark_reminder_sent();

    assert!(appointment.reminder_sent);
}

#[test]
fn statuses_serialize_snake_case() {
    assert_eq!(
        serde_json::to_value(AppointmentStatus::NoShow).unwrap(),
        json!("no_show")
    );
    assert_eq!(
        serde_json::to_value(ReminderMethod::Whatsapp).unwrap(),
        json!("whatsapp")
    );
}

#[test]
fn status_parses_snake_case_and_rejects_unknown() {
    assert_eq!(
        "no_show".parse::<AppointmentStatus>().unwrap(),
        AppointmentStatus::NoShow
    );
    assert_eq!(
        "cancelled".parse::<AppointmentStatus>().unwrap(),
        AppointmentStatus::Cancelled
    );
    assert!("NoShow".parse::<AppointmentStatus>().is_err());
}

#[test]
fn display_name_joins_first_and_last() {
    let patient = Patient {
        id: Uuid::new_v4(),
        first_name: "Jean".to_string(),
        last_name: "Martin".to_string(),
        email: None,
        phone: None,
        date_of_birth: None,
        address: None,
        medical_history: None,
        current_treatments: None,
        allergies: None,
        emergency_contact: None,
        therapy_type: None,
        first_session_date: None,
        notes: None,
        active: true,
        created_at: jiff::Timestamp::UNIX_EPOCH,
        updated_at: jiff::Timestamp::UNIX_EPOCH,
    };

    assert_eq!(patient.display_name(), "Jean Martin");
}
