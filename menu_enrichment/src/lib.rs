pub mod categorizer;
pub mod normalizer;

pub use categorizer::{KeywordCategorizer, MenuClassifier};
pub use normalizer::{MenuNormalizer, NormalizerError};
