// src/search/ranker.rs

//! Fuzzy suggestion ranking.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use crate::models::{ListingConfig, SearchConfig};
use crate::search::levenshtein;

const PREFIX_SCORE: i64 = 100;
const SUBSTRING_SCORE: i64 = 60;
const DISTANCE_CEILING: i64 = 40;
const BOOST_SCORE: i64 = 25;
const BASE_SCORE: i64 = 10;
const BREVITY_CEILING: i64 = 20;

/// Ranks candidate strings against a free-text query.
///
/// Every candidate scores `+100` for a prefix match, `+60` for a substring
/// match and `max(0, 40 - distance)`. The optional domain boost adds `+25`
/// when the candidate names a boost term (`+10` otherwise), and the
/// optional brevity bonus adds `max(0, 20 - length)`.
#[derive(Debug, Clone, Default)]
pub struct SuggestionRanker {
    limit: usize,
    aliases: HashMap<String, String>,
    boost_terms: Vec<String>,
    brevity: bool,
}

impl SuggestionRanker {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Ranker used by the course search box.
    pub fn skills(listing: &ListingConfig) -> Self {
        Self::new(listing.suggestion_limit)
    }

    /// Ranker used by the home hero search: aliases, domain boost and
    /// brevity bonus enabled.
    pub fn home_hero(listing: &ListingConfig, search: &SearchConfig) -> Self {
        Self::new(listing.suggestion_limit)
            .with_aliases(search.aliases.clone())
            .with_boost(search.boost_terms.clone())
            .with_brevity()
    }

    /// Ranker for blog title suggestions.
    pub fn blog_titles(listing: &ListingConfig) -> Self {
        Self::new(listing.blog_suggestion_limit)
    }

    pub fn with_aliases(mut self, aliases: HashMap<String, String>) -> Self {
        self.aliases = aliases
            .into_iter()
            .map(|(k, v)| (k.trim().to_lowercase(), v))
            .collect();
        self
    }

    pub fn with_boost(mut self, terms: Vec<String>) -> Self {
        self.boost_terms = terms.into_iter().map(|t| t.to_lowercase()).collect();
        self
    }

    pub fn with_brevity(mut self) -> Self {
        self.brevity = true;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Normalized query: trimmed, lowercased, alias-expanded.
    fn normalize(&self, query: &str) -> String {
        let q = query.trim().to_lowercase();
        match self.aliases.get(&q) {
            Some(target) => target.to_lowercase(),
            None => q,
        }
    }

    /// Score of one lowercased candidate against a normalized query.
    fn score(&self, q: &str, s: &str) -> i64 {
        let mut score = 0;

        if !self.boost_terms.is_empty() {
            score += if self.boost_terms.iter().any(|t| s.contains(t.as_str())) {
                BOOST_SCORE
            } else {
                BASE_SCORE
            };
        }

        if s.starts_with(q) {
            score += PREFIX_SCORE;
        }
        if s.contains(q) {
            score += SUBSTRING_SCORE;
        }

        let distance = i64::try_from(levenshtein(q, s)).unwrap_or(i64::MAX);
        score += (DISTANCE_CEILING - distance).max(0);

        if self.brevity {
            let len = i64::try_from(s.chars().count()).unwrap_or(i64::MAX);
            score += (BREVITY_CEILING - len).max(0);
        }

        score
    }

    /// Top candidates for `query`, best first. Ties keep input order.
    ///
    /// An empty query returns the first `limit` candidates unchanged.
    pub fn rank<S: AsRef<str>>(&self, candidates: &[S], query: &str) -> Vec<String> {
        if query.trim().is_empty() {
            return candidates
                .iter()
                .take(self.limit)
                .map(|c| c.as_ref().to_string())
                .collect();
        }

        let q = self.normalize(query);
        let mut scored: Vec<(i64, &str)> = candidates
            .iter()
            .map(|c| {
                let c = c.as_ref();
                (self.score(&q, &c.to_lowercase()), c)
            })
            .collect();

        scored.sort_by_key(|(score, _)| Reverse(*score));
        scored
            .into_iter()
            .take(self.limit)
            .map(|(_, c)| c.to_string())
            .collect()
    }
}

/// Order-preserving union of backend suggestions and locally ranked ones,
/// without duplicates, truncated to `limit`.
pub fn merge_suggestions(backend: &[String], ranked: &[String], limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    backend
        .iter()
        .chain(ranked)
        .filter(|s| seen.insert(s.as_str()))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::INDUSTRY_SKILLS;

    #[test]
    fn test_prefix_match_ranks_first() {
        let ranker = SuggestionRanker::new(5);
        let ranked = ranker.rank(&["Java", "JavaScript", "Kubernetes", "Ruby"], "kube");
        assert_eq!(ranked[0], "Kubernetes");
    }

    #[test]
    fn test_empty_query_returns_head() {
        let ranker = SuggestionRanker::new(3);
        let ranked = ranker.rank(&["a", "b", "c", "d"], "   ");
        assert_eq!(ranked, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_limit_applies() {
        let ranker = SuggestionRanker::new(15);
        assert_eq!(ranker.rank(INDUSTRY_SKILLS, "data").len(), 15);
    }

    #[test]
    fn test_alias_expansion() {
        let ranker = SuggestionRanker::home_hero(&ListingConfig::default(), &SearchConfig::default());
        let ranked = ranker.rank(INDUSTRY_SKILLS, "ML");
        assert_eq!(ranked[0], "Machine Learning");
    }

    #[test]
    fn test_boost_prefers_domain_terms() {
        let plain = SuggestionRanker::new(2);
        let boosted = SuggestionRanker::new(2).with_boost(vec!["cloud".into()]);
        let candidates = ["Clojure", "Cloud Architecture"];
        assert_eq!(plain.rank(&candidates, "clo")[0], "Clojure");
        assert_eq!(boosted.rank(&candidates, "clo")[0], "Cloud Architecture");
    }

    #[test]
    fn test_stable_on_ties() {
        let ranker = SuggestionRanker::new(3);
        assert_eq!(ranker.rank(&["xa", "xb", "xc"], "x"), vec!["xa", "xb", "xc"]);
    }

    #[test]
    fn test_merge_dedups_and_truncates() {
        let backend = vec!["Rust".to_string(), "Go".to_string()];
        let ranked = vec!["Go".to_string(), "Python".to_string(), "Java".to_string()];
        assert_eq!(
            merge_suggestions(&backend, &ranked, 3),
            vec!["Rust", "Go", "Python"]
        );
        assert_eq!(merge_suggestions(&[], &ranked, 10).len(), 3);
    }
}
