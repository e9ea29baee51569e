use cabinet_core::config::PracticeConfig;
use cabinet_core::store::{AppointmentStore, PatientStore};
use jiff::civil;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::delivery::DeliveryProvider;
use crate::dispatch::send_appointment_reminder;
use crate::error::NotifyError;
use crate::window::due_for_reminder;

/// Statistics for one reminder batch.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ReminderRun {
    pub total: usize,
    pub sent: usize,
    pub failed: usize,
    pub errors: Vec<ReminderFailure>,
}

/// Diagnostic detail for one failed reminder.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReminderFailure {
    pub appointment_id: Uuid,
    pub patient: String,
    /// Structured error payload: per-channel outcomes when dispatch ran,
    /// otherwise a plain message.
    pub detail: serde_json::Value,
}

/// Dispatch every pending reminder in the current window.
///
/// Each success flips the appointment's reminder flag and commits it
/// immediately, so a crash mid-batch loses nothing already sent and a re-run
/// naturally skips it. One appointment's failure never stops the batch.
pub fn send_pending_reminders(
    appointments: &mut dyn AppointmentStore,
    patients: &dyn PatientStore,
    provider: &dyn DeliveryProvider,
    config: &PracticeConfig,
    now: civil::DateTime,
) -> Result<ReminderRun, NotifyError> {
    if !config.reminders_enabled {
        tracing::info!("automatic reminders are disabled");
        return Ok(ReminderRun::default());
    }
    if !provider.is_configured() {
        return Err(NotifyError::ProviderNotConfigured);
    }

    let due = due_for_reminder(appointments, now, config.reminder_hours_before)?;
    let mut run = ReminderRun {
        total: due.len(),
        ..ReminderRun::default()
    };

    for mut appointment in due {
        let patient = match patients.get(appointment.patient_id) {
            Ok(patient) => patient,
            Err(e) => {
                run.failed += 1;
                run.errors.push(ReminderFailure {
                    appointment_id: appointment.id,
                    patient: appointment.patient_id.to_string(),
                    detail: serde_json::Value::String(e.to_string()),
                });
                continue;
            }
        };

        match send_appointment_reminder(provider, &patient, &appointment, config.reminder_method) {
            Ok(outcome) if outcome.success => {
                appointment.mark_reminder_sent();
                match appointments.update(&appointment) {
                    Ok(()) => run.sent += 1,
                    Err(e) => {
                        // Delivered but not recorded; the next run will retry.
                        tracing::error!(appointment_id = %appointment.id, error = %e, "could not persist reminder flag");
                        run.failed += 1;
                        run.errors.push(ReminderFailure {
                            appointment_id: appointment.id,
                            patient: patient.display_name(),
                            detail: serde_json::Value::String(e.to_string()),
                        });
                    }
                }
            }
            Ok(outcome) => {
                run.failed += 1;
                run.errors.push(ReminderFailure {
                    appointment_id: appointment.id,
                    patient: patient.display_name(),
                    detail: serde_json::to_value(&outcome)
                        .unwrap_or_else(|e| serde_json::Value::String(e.to_string())),
                });
            }
            Err(e) => {
                run.failed += 1;
                run.errors.push(ReminderFailure {
                    appointment_id: appointment.id,
                    patient: patient.display_name(),
                    detail: serde_json::Value::String(e.to_string()),
                });
            }
        }
    }

    tracing::info!(total = run.total, sent = run.sent, failed = run.failed, "reminder batch finished");
    Ok(run)
}
