use jiff::civil;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Delivery channel selection for appointment reminders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReminderMethod {
    Sms,
    Whatsapp,
    #[default]
    Both,
}

/// Practice-level configuration, passed explicitly into the scheduling and
/// notification flows. Never read from the process environment; callers own
/// where these values come from.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PracticeConfig {
    /// How many hours before an appointment its reminder is due.
    #[serde(default = "default_reminder_hours")]
    pub reminder_hours_before: i64,

    #[serde(default)]
    pub reminder_method: ReminderMethod,

    /// Reminders are opt-in; the batch runner is a no-op until enabled.
    #[serde(default)]
    pub reminders_enabled: bool,

    #[serde(default = "default_opening_time")]
    pub opening_time: civil::Time,

    #[serde(default = "default_closing_time")]
    pub closing_time: civil::Time,

    #[serde(default = "default_slot_duration")]
    pub slot_duration_minutes: i64,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            reminder_hours_before: default_reminder_hours(),
            reminder_method: ReminderMethod::default(),
            reminders_enabled: false,
            opening_time: default_opening_time(),
            closing_time: default_closing_time(),
            slot_duration_minutes: default_slot_duration(),
        }
    }
}

fn default_reminder_hours() -> i64 {
    24
}

fn default_opening_time() -> civil::Time {
    civil::time(9, 0, 0, 0)
}

fn default_closing_time() -> civil::Time {
    civil::time(18, 0, 0, 0)
}

fn default_slot_duration() -> i64 {
    60
}
