//! Questionnaire scoring.
//!
//! Deliberately lenient: a partially malformed submission still yields a
//! best-effort score. Unanswered questions contribute 0, as do answers that
//! cannot be read as a number. Submitted values are not checked against the
//! definition's declared option weights.

use std::collections::{BTreeMap, HashMap};

use cabinet_core::models::QuestionnaireDefinition;

use crate::catalog::Catalog;
use crate::error::InstrumentError;

/// Sum the numeric value of each answered question, keyed by stringified
/// question id. An empty question list or empty answer map scores 0.
pub fn total_score(
    definition: &QuestionnaireDefinition,
    responses: &HashMap<String, serde_json::Value>,
) -> f64 {
    definition
        .questions
        .iter()
        .filter_map(|question| responses.get(&question.id.to_string()))
        .filter_map(coerce_numeric)
        .sum()
}

/// Per-subscale sums under the same lenient policy. Questions without a
/// subscale tag are left out.
pub fn subscale_totals(
    definition: &QuestionnaireDefinition,
    responses: &HashMap<String, serde_json::Value>,
) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for question in &definition.questions {
        let Some(subscale) = &question.subscale else {
            continue;
        };
        let value = responses
            .get(&question.id.to_string())
            .and_then(coerce_numeric);
        if let Some(value) = value {
            *totals.entry(subscale.clone()).or_insert(0.0) += value;
        }
    }
    totals
}

/// Resolve a definition in `catalog` by code and score `responses` against it.
pub fn score_with(
    catalog: &Catalog,
    questionnaire_id: &str,
    responses: &HashMap<String, serde_json::Value>,
) -> Result<f64, InstrumentError> {
    let definition = catalog
        .find(questionnaire_id)
        .ok_or_else(|| InstrumentError::UnknownQuestionnaire(questionnaire_id.to_string()))?;
    Ok(total_score(definition, responses))
}

/// Lenient numeric coercion: JSON numbers pass through, strings are parsed
/// as floats. Everything else is treated as unanswered.
fn coerce_numeric(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
