//! Seams between the selection core and its external collaborators.

mod catalog;
mod extractor;

pub use catalog::{ICatalog, IQuestionStore};
pub use extractor::IFeatureExtractor;
