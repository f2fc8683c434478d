//! Ranked fuzzy name search for the selection screens.
//!
//! A pure function: no widget state, no caching, invoked on demand for
//! each keystroke. Matching is case-insensitive and ranked into four
//! tiers; within a tier, candidates keep their pool order.
//!
//! ## Tiers
//!
//! 1. Exact: the whole name equals the query
//! 2. Prefix: the name starts with the query
//! 3. Substring: the query appears anywhere in the name
//! 4. Subsequence: the query's characters appear in order, with gaps
//!
//! A name lands only in the highest tier it qualifies for, so nothing is
//! suggested twice. Results are capped at `MAX_SUGGESTIONS`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Upper bound on suggestions returned, to keep the dropdown cheap.
pub const MAX_SUGGESTIONS: usize = 20;

/// How strongly a name matched the query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchTier {
    /// Whole-name match.
    Exact,
    /// Name starts with the query.
    Prefix,
    /// Query appears contiguously inside the name.
    Substring,
    /// Query characters appear in order, not necessarily adjacent.
    Subsequence,
}

/// Classify how `name` matches `query`, case-insensitively.
///
/// Returns `None` for an empty query or no match at all.
#[must_use]
pub fn classify(query: &str, name: &str) -> Option<MatchTier> {
    if query.is_empty() {
        return None;
    }

    let query = query.to_lowercase();
    let name = name.to_lowercase();

    if name == query {
        return Some(MatchTier::Exact);
    }
    if name.starts_with(&query) {
        return Some(MatchTier::Prefix);
    }
    if name.contains(&query) {
        return Some(MatchTier::Substring);
    }
    if is_subsequence(&query, &name) {
        return Some(MatchTier::Subsequence);
    }

    None
}

/// Whether every character of `query` appears in `name`, in order.
fn is_subsequence(query: &str, name: &str) -> bool {
    let mut remaining = query.chars().peekable();
    for c in name.chars() {
        match remaining.peek() {
            Some(&next) if next == c => {
                remaining.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    remaining.peek().is_none()
}

/// Search `pool` for names matching `query`, ranked by tier.
///
/// The empty query returns nothing; there is no browse-all mode. The
/// pool is assumed duplicate-free (it comes from the filter engine).
///
/// ## Example
///
/// ```
/// use guessdex::search::search;
///
/// let pool = ["Pikachu", "Raichu", "Pichu"];
/// let ranked = search("pika", &pool);
/// assert_eq!(ranked[0], "Pikachu");
/// ```
#[must_use]
pub fn search<S: AsRef<str>>(query: &str, pool: &[S]) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    // Pool indexes bucketed by tier; SmallVec keeps the common short
    // dropdown off the heap.
    let mut exact: SmallVec<[usize; 4]> = SmallVec::new();
    let mut prefix: SmallVec<[usize; 8]> = SmallVec::new();
    let mut substring: SmallVec<[usize; 8]> = SmallVec::new();
    let mut subsequence: SmallVec<[usize; 8]> = SmallVec::new();

    for (i, name) in pool.iter().enumerate() {
        match classify(query, name.as_ref()) {
            Some(MatchTier::Exact) => exact.push(i),
            Some(MatchTier::Prefix) => prefix.push(i),
            Some(MatchTier::Substring) => substring.push(i),
            Some(MatchTier::Subsequence) => subsequence.push(i),
            None => {}
        }
    }

    exact
        .into_iter()
        .chain(prefix)
        .chain(substring)
        .chain(subsequence)
        .take(MAX_SUGGESTIONS)
        .map(|i| pool[i].as_ref().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_nothing() {
        let pool = ["Pikachu", "Raichu"];
        assert!(search("", &pool).is_empty());
    }

    #[test]
    fn test_prefix_before_substring() {
        let pool = ["Raichu", "Pikachu", "Pichu"];
        let ranked = search("pi", &pool);

        // "Pikachu" and "Pichu" are prefix matches in pool order;
        // "Raichu" has no "pi" substring but is a subsequence match.
        assert_eq!(ranked, vec!["Pikachu", "Pichu", "Raichu"]);
    }

    #[test]
    fn test_exact_ranks_first() {
        let pool = ["Pichu-spiky-eared", "Pikachu", "Pichu"];
        let ranked = search("pichu", &pool);

        assert_eq!(ranked[0], "Pichu");
        assert_eq!(ranked[1], "Pichu-spiky-eared");
    }

    #[test]
    fn test_case_insensitive() {
        let pool = ["Pikachu"];
        assert_eq!(search("PIKA", &pool), vec!["Pikachu"]);
        assert_eq!(search("pIkAcHu", &pool), vec!["Pikachu"]);
    }

    #[test]
    fn test_substring_match() {
        let pool = ["Nidoran", "Charmander"];
        let ranked = search("and", &pool);

        // Contiguous in "Charmander"; "Nidoran" has no 'd' after its
        // 'a'-'n' pair, so not even a subsequence.
        assert_eq!(ranked, vec!["Charmander"]);
    }

    #[test]
    fn test_subsequence_match() {
        let pool = ["Charizard"];
        // c-h-z-d appear in order with gaps.
        assert_eq!(search("chzd", &pool), vec!["Charizard"]);
        // Out of order: no match.
        assert!(search("dzhc", &pool).is_empty());
    }

    #[test]
    fn test_name_appears_in_one_tier_only() {
        // "Mew" is an exact match for "mew" and would also qualify for
        // prefix/substring; it must appear once.
        let pool = ["Mew", "Mewtwo"];
        let ranked = search("mew", &pool);

        assert_eq!(ranked, vec!["Mew", "Mewtwo"]);
    }

    #[test]
    fn test_truncation_preserves_tier_order() {
        let mut pool: Vec<String> = (0..30).map(|i| format!("Zubat-{}", i)).collect();
        pool.push("Zu".to_string());

        let ranked = search("zu", &pool);

        assert_eq!(ranked.len(), MAX_SUGGESTIONS);
        // The exact match outranks the 30 prefix matches despite coming
        // last in the pool.
        assert_eq!(ranked[0], "Zu");
        assert_eq!(ranked[1], "Zubat-0");
    }

    #[test]
    fn test_no_match() {
        let pool = ["Pikachu", "Raichu"];
        assert!(search("xyz", &pool).is_empty());
    }

    #[test]
    fn test_classify_tiers() {
        assert_eq!(classify("pikachu", "Pikachu"), Some(MatchTier::Exact));
        assert_eq!(classify("pika", "Pikachu"), Some(MatchTier::Prefix));
        assert_eq!(classify("kachu", "Pikachu"), Some(MatchTier::Substring));
        assert_eq!(classify("pkcu", "Pikachu"), Some(MatchTier::Subsequence));
        assert_eq!(classify("zzz", "Pikachu"), None);
        assert_eq!(classify("", "Pikachu"), None);
    }

    #[test]
    fn test_classify_non_ascii() {
        // The dataset has names like Nidoran♀; symbols pass through
        // lowercasing unchanged.
        assert_eq!(classify("nidoran♀", "Nidoran♀"), Some(MatchTier::Exact));
        assert_eq!(classify("nido", "Nidoran♀"), Some(MatchTier::Prefix));
    }

    #[test]
    fn test_query_longer_than_name() {
        assert_eq!(classify("pikachuuu", "Pikachu"), None);
    }
}
