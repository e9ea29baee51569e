use cabinet_core::config::ReminderMethod;
use cabinet_core::models::{Appointment, Patient};
use serde::{Deserialize, Serialize};

use crate::delivery::{Channel, ChannelOutcome, DeliveryProvider};
use crate::error::NotifyError;
use crate::message::{normalize_phone, reminder_message, test_message};

/// Aggregated result of one reminder dispatch. Channels keep their own
/// outcomes so a caller can report or retry selectively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchOutcome {
    pub success: bool,
    pub method: ReminderMethod,
    pub sms: Option<ChannelOutcome>,
    pub whatsapp: Option<ChannelOutcome>,
}

/// Send a reminder for one appointment over the requested channel(s).
///
/// A missing phone number fails immediately without touching the provider.
/// For [`ReminderMethod::Both`], the channels are attempted independently and
/// the overall result is the inclusive-or of the two; a single-channel
/// request mirrors its channel's outcome.
pub fn send_appointment_reminder(
    provider: &dyn DeliveryProvider,
    patient: &Patient,
    appointment: &Appointment,
    method: ReminderMethod,
) -> Result<DispatchOutcome, NotifyError> {
    let Some(phone) = patient.phone.as_deref() else {
        return Err(NotifyError::NoContactNumber {
            patient: patient.display_name(),
        });
    };

    let to = normalize_phone(phone);
    let body = reminder_message(patient, appointment);

    let sms = matches!(method, ReminderMethod::Sms | ReminderMethod::Both)
        .then(|| ChannelOutcome::from(provider.send(Channel::Sms, &to, &body)));
    let whatsapp = matches!(method, ReminderMethod::Whatsapp | ReminderMethod::Both)
        .then(|| ChannelOutcome::from(provider.send(Channel::Whatsapp, &to, &body)));

    let success = sms.as_ref().is_some_and(|o| o.success)
        || whatsapp.as_ref().is_some_and(|o| o.success);

    if success {
        tracing::info!(appointment_id = %appointment.id, ?method, "reminder delivered");
    } else {
        tracing::warn!(appointment_id = %appointment.id, ?method, "reminder delivery failed on every channel");
    }

    Ok(DispatchOutcome {
        success,
        method,
        sms,
        whatsapp,
    })
}

/// Send a configuration test message to an arbitrary number.
pub fn send_test_message(
    provider: &dyn DeliveryProvider,
    to: &str,
    channel: Channel,
) -> ChannelOutcome {
    ChannelOutcome::from(provider.send(channel, &normalize_phone(to), &test_message()))
}
