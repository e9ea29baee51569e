//! Report builders.
//!
//! Each builder renders a markdown-ish body (headings, bullets, bold) that
//! [`crate::docx::generate_docx`] can package, plus the `Document` metadata
//! record for the caller to persist. Dates are formatted and defaults
//! applied here so the templates stay purely structural.

use cabinet_core::models::{
    Document, DocumentKind, Patient, QuestionnaireDefinition, QuestionnaireResponse,
    TherapySession,
};
use jiff::civil;
use serde_json::json;

use crate::error::ExportError;
use crate::render::render_template;

/// A rendered report body plus its metadata record.
#[derive(Debug)]
pub struct RenderedReport {
    pub document: Document,
    pub body: String,
}

const SESSION_TEMPLATE: &str = "\
# COMPTE-RENDU DE SÉANCE

**Patient :** {{ patient_name }}
**Date de la séance :** {{ session_date }}
**Type de thérapie :** {{ therapy_type }}
**Numéro de séance :** {{ session_number }}

{% if objectives %}## Objectifs de la séance

{{ objectives }}

{% endif %}{% if interventions %}## Interventions thérapeutiques

{{ interventions }}

{% endif %}{% if patient_progress %}## Progrès observés

{{ patient_progress }}

{% endif %}{% if scores %}## Évaluations

{% for score in scores %}- **{{ score.label }} :** {{ score.value }}/10
{% endfor %}
{% endif %}{% if homework %}## Exercices à faire

{{ homework }}

{% endif %}{% if next_session_plan %}## Plan pour la prochaine séance

{{ next_session_plan }}

{% endif %}{{ footer }}
";

const QUESTIONNAIRE_TEMPLATE: &str = "\
# QUESTIONNAIRE : {{ questionnaire_name | upper }}

**Patient :** {{ patient_name }}
**Date de passation :** {{ completed_at }}
**Score total :** {{ total_score }}

{% if answers %}## Réponses détaillées

{% for answer in answers %}**{{ loop.index }}. {{ answer.question }}**
Réponse : {{ answer.answer }}

{% endfor %}{% endif %}{% if interpretation %}## Interprétation

{{ interpretation }}

{% endif %}{% if notes %}## Notes

{{ notes }}

{% endif %}{{ footer }}
";

const PATIENT_FILE_TEMPLATE: &str = "\
# DOSSIER PATIENT

## Informations personnelles

- **Nom :** {{ last_name }}
- **Prénom :** {{ first_name }}
- **Date de naissance :** {{ date_of_birth }}
- **Email :** {{ email }}
- **Téléphone :** {{ phone }}
- **Adresse :** {{ address }}

## Informations médicales

- **Antécédents médicaux :** {{ medical_history }}
- **Traitements en cours :** {{ current_treatments }}
- **Allergies :** {{ allergies }}
- **Contact d'urgence :** {{ emergency_contact }}

## Informations thérapeutiques

- **Type de thérapie :** {{ therapy_type }}
- **Première séance :** {{ first_session_date }}

{% if notes %}## Notes

{{ notes }}

{% endif %}{{ footer }}
";

fn footer_line(generated_at: civil::DateTime) -> String {
    format!(
        "Document généré le {}",
        generated_at.strftime("%d/%m/%Y à %H:%M")
    )
}

fn short_date(date: civil::Date) -> String {
    date.strftime("%d/%m/%Y").to_string()
}

/// Compte-rendu de séance.
pub fn session_report(
    patient: &Patient,
    session: &TherapySession,
    generated_at: civil::DateTime,
) -> Result<RenderedReport, ExportError> {
    let mut scores = Vec::new();
    if let Some(mood) = session.mood_score {
        scores.push(json!({ "label": "Humeur", "value": mood }));
    }
    if let Some(anxiety) = session.anxiety_score {
        scores.push(json!({ "label": "Anxiété", "value": anxiety }));
    }

    let context = json!({
        "patient_name": patient.display_name(),
        "session_date": short_date(session.session_date.date()),
        "therapy_type": session.therapy_type.as_deref().unwrap_or("Non spécifié"),
        "session_number": session
            .session_number
            .map_or_else(|| "N/A".to_string(), |n| n.to_string()),
        "objectives": session.objectives,
        "interventions": session.interventions,
        "patient_progress": session.patient_progress,
        "scores": if scores.is_empty() { serde_json::Value::Null } else { json!(scores) },
        "homework": session.homework,
        "next_session_plan": session.next_session_plan,
        "footer": footer_line(generated_at),
    });

    let body = render_template("session_report", SESSION_TEMPLATE, &context)?;
    let title = format!(
        "Compte-rendu de séance - {} - {}",
        patient.display_name(),
        short_date(session.session_date.date())
    );
    tracing::info!(session_id = %session.id, "session report rendered");

    Ok(RenderedReport {
        document: Document::new(DocumentKind::SessionReport, title, Some(patient.id)),
        body,
    })
}

/// Rapport de questionnaire: answers in definition order, then the stored
/// interpretation and notes.
pub fn questionnaire_report(
    patient: &Patient,
    definition: &QuestionnaireDefinition,
    response: &QuestionnaireResponse,
    generated_at: civil::DateTime,
) -> Result<RenderedReport, ExportError> {
    let answers: Vec<serde_json::Value> = definition
        .questions
        .iter()
        .map(|question| {
            let raw = response.responses.get(&question.id.to_string());
            json!({ "question": question.text, "answer": answer_text(raw) })
        })
        .collect();

    let context = json!({
        "questionnaire_name": definition.name,
        "patient_name": patient.display_name(),
        "completed_at": response.completed_at.strftime("%d/%m/%Y").to_string(),
        "total_score": format!("{:.1}", response.total_score),
        "answers": if answers.is_empty() { serde_json::Value::Null } else { json!(answers) },
        "interpretation": response.interpretation,
        "notes": response.notes,
        "footer": footer_line(generated_at),
    });

    let body = render_template("questionnaire_report", QUESTIONNAIRE_TEMPLATE, &context)?;
    let title = format!("{} - {}", definition.short_name, patient.display_name());
    tracing::info!(response_id = %response.id, "questionnaire report rendered");

    Ok(RenderedReport {
        document: Document::new(DocumentKind::QuestionnaireReport, title, Some(patient.id)),
        body,
    })
}

/// Dossier patient complet.
pub fn patient_file(
    patient: &Patient,
    generated_at: civil::DateTime,
) -> Result<RenderedReport, ExportError> {
    let context = json!({
        "last_name": patient.last_name,
        "first_name": patient.first_name,
        "date_of_birth": patient
            .date_of_birth
            .map_or_else(|| "Non renseignée".to_string(), short_date),
        "email": patient.email.as_deref().unwrap_or("Non renseigné"),
        "phone": patient.phone.as_deref().unwrap_or("Non renseigné"),
        "address": patient.address.as_deref().unwrap_or("Non renseignée"),
        "medical_history": patient.medical_history.as_deref().unwrap_or("Aucun"),
        "current_treatments": patient.current_treatments.as_deref().unwrap_or("Aucun"),
        "allergies": patient.allergies.as_deref().unwrap_or("Aucune"),
        "emergency_contact": patient.emergency_contact.as_deref().unwrap_or("Non renseigné"),
        "therapy_type": patient.therapy_type.as_deref().unwrap_or("Non spécifié"),
        "first_session_date": patient
            .first_session_date
            .map_or_else(|| "Non renseignée".to_string(), short_date),
        "notes": patient.notes,
        "footer": footer_line(generated_at),
    });

    let body = render_template("patient_file", PATIENT_FILE_TEMPLATE, &context)?;
    let title = format!("Dossier patient - {}", patient.display_name());

    Ok(RenderedReport {
        document: Document::new(DocumentKind::PatientFile, title, Some(patient.id)),
        body,
    })
}

/// Raw answer → display text. Strings are shown as-is, other JSON values in
/// their literal form, missing or null answers as "Non répondu".
fn answer_text(raw: Option<&serde_json::Value>) -> String {
    match raw {
        None | Some(serde_json::Value::Null) => "Non répondu".to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
