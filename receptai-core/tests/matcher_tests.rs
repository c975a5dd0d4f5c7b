//! Behavioural tests for dish matching and ranking.

use receptai_core::{difficulty_rank, find_matches, Dish, MatchResult, DEFAULT_MAX_MISSING};

fn dish(id: i32, title: &str, ingredients: &[&str], difficulty: &str) -> Dish {
    Dish {
        id,
        title: title.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        difficulty: difficulty.to_string(),
    }
}

fn breakfast_catalog() -> Vec<Dish> {
    vec![
        dish(1, "Omelette", &["egg", "milk"], "easy"),
        dish(2, "Pancakes", &["egg", "milk", "flour", "sugar"], "medium"),
    ]
}

/// A larger catalog mixing tiers, casing and an unknown difficulty.
fn mixed_catalog() -> Vec<Dish> {
    vec![
        dish(1, "Beef Wellington", &["beef", "flour", "butter", "mushroom"], "hard"),
        dish(2, "Fried Egg", &["Egg", "Butter"], "easy"),
        dish(3, "Crepes", &["egg", "milk", "flour"], "medium"),
        dish(4, "Molecular Foam", &["egg"], "extreme"),
        dish(5, "Water", &[], "easy"),
        dish(6, "Mushroom Soup", &["mushroom", "cream", "onion"], "medium"),
        dish(7, "Butter Toast", &["bread", "butter"], "easy"),
    ]
}

fn ids(results: &[MatchResult]) -> Vec<i32> {
    results.iter().map(|r| r.id).collect()
}

#[test]
fn omelette_scenario_excludes_pancakes() {
    let results = find_matches(&["egg"], &breakfast_catalog(), DEFAULT_MAX_MISSING);

    assert_eq!(
        results,
        vec![MatchResult {
            id: 1,
            title: "Omelette".to_string(),
            difficulty: "easy".to_string(),
            missing_count: 1,
            missing_ingredients: vec!["milk".to_string()],
        }]
    );
}

#[test]
fn full_pantry_ties_broken_by_difficulty() {
    let catalog = vec![
        dish(2, "Pancakes", &["egg", "milk", "flour", "sugar"], "medium"),
        dish(1, "Omelette", &["egg", "milk"], "easy"),
    ];
    let results = find_matches(&["egg", "milk", "flour", "sugar"], &catalog, DEFAULT_MAX_MISSING);

    assert_eq!(ids(&results), vec![1, 2]);
    assert!(results.iter().all(|r| r.missing_count == 0));
}

#[test]
fn unknown_difficulty_sorts_after_known_tiers() {
    let catalog = vec![
        dish(1, "Mystery", &["egg"], "extreme"),
        dish(2, "Hard Boiled", &["egg"], "hard"),
        dish(3, "Scrambled", &["egg"], "easy"),
    ];
    let results = find_matches(&["egg"], &catalog, DEFAULT_MAX_MISSING);

    assert_eq!(ids(&results), vec![3, 2, 1]);
}

#[test]
fn unknown_difficulty_still_ranked_by_missing_count_first() {
    let catalog = vec![
        dish(1, "Mystery", &["egg"], "extreme"),
        dish(2, "Custard", &["egg", "milk"], "easy"),
    ];
    let results = find_matches(&["egg"], &catalog, DEFAULT_MAX_MISSING);

    assert_eq!(ids(&results), vec![1, 2]);
}

#[test]
fn empty_catalog_gives_empty_result() {
    let results = find_matches(&["egg", "milk"], &[], DEFAULT_MAX_MISSING);
    assert!(results.is_empty());
}

#[test]
fn empty_ingredients_only_small_dishes_qualify() {
    let results = find_matches::<&str>(&[], &mixed_catalog(), DEFAULT_MAX_MISSING);

    for r in &results {
        let source = mixed_catalog().into_iter().find(|d| d.id == r.id).unwrap();
        assert_eq!(r.missing_count, source.ingredients.len());
    }
    // Water (0), Molecular Foam (1), Fried Egg (2), Butter Toast (2)
    assert_eq!(ids(&results), vec![5, 4, 2, 7]);
}

#[test]
fn zero_ingredient_dish_always_qualifies() {
    let results = find_matches(&["anything"], &mixed_catalog(), 0);
    assert!(results.iter().any(|r| r.id == 5 && r.missing_count == 0));
}

#[test]
fn every_result_respects_bound_and_exact_count() {
    let user = ["EGG", "butter", "Flour", "milk"];
    let catalog = mixed_catalog();

    for max_missing in 0..=4 {
        let results = find_matches(&user, &catalog, max_missing);
        for r in &results {
            assert!(r.missing_count <= max_missing);
            assert_eq!(r.missing_count, r.missing_ingredients.len());

            let source = catalog.iter().find(|d| d.id == r.id).unwrap();
            let expected: std::collections::BTreeSet<String> = source
                .ingredients
                .iter()
                .map(|i| i.to_lowercase())
                .filter(|i| !user.iter().any(|u| u.to_lowercase() == *i))
                .collect();
            assert_eq!(r.missing_ingredients, expected.into_iter().collect::<Vec<_>>());
        }

        // Nothing qualifying was dropped
        let qualifying = catalog
            .iter()
            .filter(|d| {
                let missing: std::collections::HashSet<String> = d
                    .ingredients
                    .iter()
                    .map(|i| i.to_lowercase())
                    .filter(|i| !user.iter().any(|u| u.to_lowercase() == *i))
                    .collect();
                missing.len() <= max_missing
            })
            .count();
        assert_eq!(results.len(), qualifying);
    }
}

#[test]
fn output_is_ordered() {
    let results = find_matches(&["egg", "butter"], &mixed_catalog(), 4);

    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.missing_count < b.missing_count
                || (a.missing_count == b.missing_count
                    && difficulty_rank(&a.difficulty) <= difficulty_rank(&b.difficulty)),
            "{:?} should not precede {:?}",
            a,
            b
        );
    }
}

#[test]
fn matching_is_idempotent() {
    let user = ["egg", "Milk", "flour"];
    let catalog = mixed_catalog();

    let first = find_matches(&user, &catalog, DEFAULT_MAX_MISSING);
    let second = find_matches(&user, &catalog, DEFAULT_MAX_MISSING);

    assert_eq!(first, second);
}

#[test]
fn duplicate_user_ingredients_collapse() {
    let once = find_matches(&["egg"], &breakfast_catalog(), DEFAULT_MAX_MISSING);
    let many = find_matches(&["egg", "EGG", "Egg"], &breakfast_catalog(), DEFAULT_MAX_MISSING);

    assert_eq!(once, many);
}

#[test]
fn result_serializes_with_snake_case_fields() {
    let results = find_matches(&["egg"], &breakfast_catalog(), DEFAULT_MAX_MISSING);
    let json = serde_json::to_value(&results[0]).unwrap();

    assert_eq!(json["missing_count"], 1);
    assert_eq!(json["missing_ingredients"][0], "milk");
    assert_eq!(json["difficulty"], "easy");
}
