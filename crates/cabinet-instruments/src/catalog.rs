use std::sync::LazyLock;

use cabinet_core::models::QuestionnaireDefinition;

use crate::error::InstrumentError;

/// The standard instruments shipped with the application, recorded as data
/// rather than code.
const BUILTIN_JSON: &str = include_str!("../data/questionnaires.json");

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json(BUILTIN_JSON).expect("embedded questionnaire catalog is valid")
});

/// An ordered set of questionnaire definitions, looked up by string code.
#[derive(Debug, Clone)]
pub struct Catalog {
    questionnaires: Vec<QuestionnaireDefinition>,
}

impl Catalog {
    /// Parse a catalog from a JSON array of definitions. Rejects duplicate
    /// ids, since responses reference definitions by id.
    pub fn from_json(json: &str) -> Result<Self, InstrumentError> {
        let questionnaires: Vec<QuestionnaireDefinition> = serde_json::from_str(json)?;

        for (i, q) in questionnaires.iter().enumerate() {
            if questionnaires[..i].iter().any(|other| other.id == q.id) {
                return Err(InstrumentError::DuplicateId(q.id.clone()));
            }
        }

        Ok(Self { questionnaires })
    }

    /// The catalog embedded in the binary (HAD, BDI-II, AAQ-II, MAAS, SUIVI).
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// All definitions, in catalog order.
    pub fn all(&self) -> &[QuestionnaireDefinition] {
        &self.questionnaires
    }

    /// Look up a definition by its string code.
    pub fn find(&self, id: &str) -> Option<&QuestionnaireDefinition> {
        self.questionnaires.iter().find(|q| q.id == id)
    }
}
