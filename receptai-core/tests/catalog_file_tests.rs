//! The bundled sample catalog imports cleanly and matches as expected.

use std::path::Path;

use receptai_core::catalog::load_catalog_file;
use receptai_core::{find_matches, Difficulty, Dish, DEFAULT_MAX_MISSING};

fn sample_catalog() -> Vec<Dish> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/dishes.json");
    load_catalog_file(&path)
        .unwrap()
        .into_iter()
        .map(|d| Dish {
            id: d.id.unwrap(),
            title: d.title,
            ingredients: d.ingredients,
            difficulty: d.difficulty.to_string(),
        })
        .collect()
}

#[test]
fn test_sample_catalog_is_valid() {
    let dishes = load_catalog_file(
        &Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/dishes.json"),
    )
    .unwrap();

    assert!(!dishes.is_empty());
    assert!(dishes.iter().all(|d| d.id.is_some()));
    assert!(dishes.iter().any(|d| d.difficulty == Difficulty::Hard));
}

#[test]
fn test_breakfast_from_sample_catalog() {
    let catalog = sample_catalog();
    let results = find_matches(&["Egg", "MILK", "salt"], &catalog, DEFAULT_MAX_MISSING);

    // Omelette and boiled eggs need nothing more, both easy, catalog order kept
    assert_eq!(results[0].title, "Omelette");
    assert_eq!(results[1].title, "Boiled eggs");
    assert!(results.iter().take(2).all(|r| r.missing_count == 0));
    assert!(results.iter().all(|r| r.missing_count <= DEFAULT_MAX_MISSING));

    let pancakes = results.iter().find(|r| r.title == "Pancakes").unwrap();
    assert_eq!(pancakes.missing_ingredients, vec!["flour", "sugar"]);
}
