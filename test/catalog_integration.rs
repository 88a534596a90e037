//! Catalog Integration Tests
//!
//! Every built-in exercise is run against its own five cases. A failure here
//! means an exercise and its literal cases disagree.

use katas::{
    Category, ExerciseRegistry, Runner, RunnerConfig, Selection, CASES_PER_EXERCISE,
};
use std::collections::HashSet;

fn registry() -> ExerciseRegistry {
    ExerciseRegistry::builtin().expect("built-in catalog must register")
}

/// Run a selection and panic with the text report if anything failed
fn assert_all_pass(selection: Selection) {
    let registry = registry();
    let runner = Runner::new(RunnerConfig::default());
    let report = runner.run(&registry, &selection).expect("selection resolves");
    assert!(report.is_success(), "\n{}", report.render_text());
}

// ============================================================================
// Catalog Shape
// ============================================================================

#[test]
fn test_every_exercise_has_five_cases() {
    for exercise in registry().list() {
        assert_eq!(
            exercise.cases.len(),
            CASES_PER_EXERCISE,
            "{} has the wrong number of cases",
            exercise.name
        );
    }
}

#[test]
fn test_names_and_ids_are_unique() {
    let registry = registry();
    let all = registry.list();
    let names: HashSet<&str> = all.iter().map(|e| e.name.as_str()).collect();
    let ids: HashSet<u32> = all.iter().map(|e| e.id).collect();
    assert_eq!(names.len(), all.len());
    assert_eq!(ids.len(), all.len());
}

#[test]
fn test_every_category_is_populated() {
    let registry = registry();
    for &category in Category::all() {
        assert!(
            registry.list_by_category(category).len() >= 4,
            "category {} has too few exercises",
            category
        );
    }
}

#[test]
fn test_ids_follow_registration_order() {
    let registry = registry();
    let ids: Vec<u32> = registry.list().iter().map(|e| e.id).collect();
    let expected: Vec<u32> = (1..=registry.len() as u32).collect();
    assert_eq!(ids, expected);
    assert_eq!(registry.get_id("heap_sort"), Some(1));
}

// ============================================================================
// Running The Catalog
// ============================================================================

#[test]
fn test_pure_algorithm_categories_pass() {
    assert_all_pass(Selection::Categories(vec![
        Category::Sorting,
        Category::Searching,
        Category::Graph,
        Category::Strings,
        Category::Numeric,
        Category::Dynamic,
        Category::Collections,
    ]));
}

#[test]
fn test_crypto_category_passes() {
    assert_all_pass(Selection::Categories(vec![Category::Crypto]));
}

#[test]
fn test_secure_category_passes() {
    assert_all_pass(Selection::Categories(vec![Category::Secure]));
}

#[test]
fn test_concurrency_category_passes() {
    assert_all_pass(Selection::Categories(vec![Category::Concurrency]));
}

#[test]
fn test_whole_catalog_in_parallel() {
    let registry = registry();
    let runner = Runner::new(RunnerConfig {
        jobs: 4,
        ..Default::default()
    });
    let report = runner.run(&registry, &Selection::All).unwrap();
    assert!(report.is_success(), "\n{}", report.render_text());
    assert_eq!(report.summary.exercises, registry.len());
    assert_eq!(report.summary.cases, registry.len() * CASES_PER_EXERCISE);

    // ordered by id no matter which worker finished first
    let ids: Vec<u32> = report.exercises.iter().map(|e| e.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}
