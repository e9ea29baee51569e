use cabinet_core::models::{Appointment, Patient};

/// The reminder text sent to patients, in the practice's house style.
pub fn reminder_message(patient: &Patient, appointment: &Appointment) -> String {
    format!(
        "Bonjour {first_name},\n\n\
         Rappel de votre rendez-vous :\n\
         📅 Date : {date}\n\
         ⏰ Heure : {time}\n\
         ⏱ Durée : {duration} minutes\n\
         💼 Type : {therapy}\n\n\
         En cas d'empêchement, merci de prévenir le plus tôt possible.\n\n\
         À bientôt !",
        first_name = patient.first_name,
        date = appointment.date.strftime("%d/%m/%Y"),
        time = appointment.time.strftime("%H:%M"),
        duration = appointment.duration_minutes,
        therapy = appointment.therapy_type.as_deref().unwrap_or("Consultation"),
    )
}

/// Body used by the settings screen's "send test message" action.
pub fn test_message() -> String {
    "Test de notification\n\n\
     Ce message confirme que votre système de notifications fonctionne correctement.\n\n\
     ✅ Configuration réussie !"
        .to_string()
}

/// Normalize a phone number to international form. Separators are stripped;
/// numbers without a country code default to +33 (the practice is French).
pub fn normalize_phone(phone: &str) -> String {
    let cleaned: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-'))
        .collect();

    if let Some(rest) = cleaned.strip_prefix('0') {
        format!("+33{rest}")
    } else if cleaned.starts_with('+') {
        cleaned
    } else {
        format!("+33{cleaned}")
    }
}
