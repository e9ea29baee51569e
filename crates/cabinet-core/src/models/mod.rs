pub mod appointment;
pub mod document;
pub mod patient;
pub mod questionnaire;
pub mod response;
pub mod session;

pub use appointment::{Appointment, AppointmentStatus};
pub use document::{Document, DocumentKind};
pub use patient::Patient;
pub use questionnaire::{AnswerOption, Question, QuestionnaireDefinition};
pub use response::QuestionnaireResponse;
pub use session::TherapySession;
