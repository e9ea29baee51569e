//! cabinet-instruments
//!
//! Standardized questionnaire catalog and scoring. Pure data and arithmetic;
//! no store or network dependency. Instruments are plain data loaded from
//! JSON, so adding one is a catalog edit, not a code change.

pub mod catalog;
pub mod error;
pub mod scoring;

pub use catalog::Catalog;
