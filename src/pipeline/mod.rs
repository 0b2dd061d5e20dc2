pub mod extractor;
pub mod permuter;
