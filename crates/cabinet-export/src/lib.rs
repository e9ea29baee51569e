//! cabinet-export
//!
//! Clinical document generation: Tera-rendered report content (session
//! report, questionnaire report, patient file) and DOCX packaging. PDF
//! conversion belongs to the external document collaborator.

pub mod docx;
pub mod error;
pub mod render;
pub mod reports;
pub mod styles;

pub use error::ExportError;
