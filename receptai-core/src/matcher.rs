//! Ingredient matching and ranking.
//!
//! Given the ingredients a user has at hand and the full dish catalog, computes
//! for every dish which required ingredients are missing, keeps the dishes that
//! miss at most `max_missing` of them, and ranks the survivors by missing count
//! and then by difficulty.
//!
//! Comparison is case-insensitive (lowercase folding only: no trimming,
//! stemming or synonyms).

use std::collections::HashSet;

use crate::types::{Difficulty, Dish, MatchResult};

/// Dishes missing more ingredients than this are not suggested.
pub const DEFAULT_MAX_MISSING: usize = 2;

/// Rank given to difficulty values outside easy/medium/hard.
pub const UNKNOWN_DIFFICULTY_RANK: u8 = 99;

/// Tie-breaking ordinal for a stored difficulty string.
pub fn difficulty_rank(difficulty: &str) -> u8 {
    difficulty
        .parse::<Difficulty>()
        .map(|d| d.rank())
        .unwrap_or(UNKNOWN_DIFFICULTY_RANK)
}

/// Match the user's ingredients against the catalog.
///
/// Results are sorted by `(missing_count, difficulty_rank)`; the sort is stable,
/// so dishes that tie keep their catalog order.
pub fn find_matches<S: AsRef<str>>(
    user_ingredients: &[S],
    catalog: &[Dish],
    max_missing: usize,
) -> Vec<MatchResult> {
    let available: HashSet<String> = user_ingredients
        .iter()
        .map(|ing| ing.as_ref().to_lowercase())
        .collect();

    let mut matched: Vec<(u8, MatchResult)> = catalog
        .iter()
        .filter_map(|dish| match_dish(dish, &available, max_missing))
        .map(|result| {
            let rank = difficulty_rank(&result.difficulty);
            if rank == UNKNOWN_DIFFICULTY_RANK {
                tracing::warn!(
                    dish_id = result.id,
                    difficulty = %result.difficulty,
                    "Dish has unrecognized difficulty, ranking it last"
                );
            }
            (rank, result)
        })
        .collect();

    matched.sort_by_key(|(rank, result)| (result.missing_count, *rank));

    matched.into_iter().map(|(_, result)| result).collect()
}

fn match_dish(dish: &Dish, available: &HashSet<String>, max_missing: usize) -> Option<MatchResult> {
    let required: HashSet<String> = dish
        .ingredients
        .iter()
        .map(|ing| ing.to_lowercase())
        .collect();

    let mut missing: Vec<String> = required.difference(available).cloned().collect();

    if missing.len() > max_missing {
        return None;
    }

    missing.sort();

    Some(MatchResult {
        id: dish.id,
        title: dish.title.clone(),
        difficulty: dish.difficulty.clone(),
        missing_count: missing.len(),
        missing_ingredients: missing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: i32, title: &str, ingredients: &[&str], difficulty: &str) -> Dish {
        Dish {
            id,
            title: title.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            difficulty: difficulty.to_string(),
        }
    }

    #[test]
    fn test_difficulty_rank() {
        assert_eq!(difficulty_rank("easy"), 0);
        assert_eq!(difficulty_rank("medium"), 1);
        assert_eq!(difficulty_rank("hard"), 2);
        assert_eq!(difficulty_rank("extreme"), UNKNOWN_DIFFICULTY_RANK);
        assert_eq!(difficulty_rank(""), UNKNOWN_DIFFICULTY_RANK);
    }

    #[test]
    fn test_case_insensitive_match() {
        let catalog = vec![dish(1, "Boiled egg", &["egg"], "easy")];
        let results = find_matches(&["Egg"], &catalog, DEFAULT_MAX_MISSING);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].missing_count, 0);
        assert!(results[0].missing_ingredients.is_empty());
    }

    #[test]
    fn test_catalog_casing_is_folded_too() {
        let catalog = vec![dish(1, "Toast", &["Bread", "BUTTER"], "easy")];
        let results = find_matches(&["bread"], &catalog, DEFAULT_MAX_MISSING);

        assert_eq!(results[0].missing_ingredients, vec!["butter"]);
    }

    #[test]
    fn test_duplicate_required_ingredients_collapse() {
        let catalog = vec![dish(1, "Eggs", &["egg", "Egg", "EGG"], "easy")];
        let results = find_matches::<&str>(&[], &catalog, DEFAULT_MAX_MISSING);

        assert_eq!(results[0].missing_count, 1);
    }

    #[test]
    fn test_no_trimming() {
        let catalog = vec![dish(1, "Salad", &["tomato"], "easy")];
        let results = find_matches(&[" tomato"], &catalog, 0);

        assert!(results.is_empty());
    }

    #[test]
    fn test_missing_sorted_lexicographically() {
        let catalog = vec![dish(1, "Cake", &["sugar", "flour", "egg"], "medium")];
        let results = find_matches::<&str>(&[], &catalog, 3);

        assert_eq!(results[0].missing_ingredients, vec!["egg", "flour", "sugar"]);
    }

    #[test]
    fn test_stable_order_for_full_ties() {
        let catalog = vec![
            dish(7, "First", &["egg"], "easy"),
            dish(3, "Second", &["egg"], "easy"),
        ];
        let results = find_matches(&["egg"], &catalog, DEFAULT_MAX_MISSING);
        let ids: Vec<i32> = results.iter().map(|r| r.id).collect();

        assert_eq!(ids, vec![7, 3]);
    }

    #[test]
    fn test_max_missing_is_inclusive() {
        let catalog = vec![dish(1, "Soup", &["water", "salt", "onion"], "easy")];

        assert_eq!(find_matches(&["water"], &catalog, 2).len(), 1);
        assert!(find_matches(&["water"], &catalog, 1).is_empty());
    }
}
