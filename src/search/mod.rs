//! Search box suggestions.

mod distance;
mod ranker;
mod skills;

pub use distance::levenshtein;
pub use ranker::{SuggestionRanker, merge_suggestions};
pub use skills::INDUSTRY_SKILLS;
