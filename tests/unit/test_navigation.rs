//! Unit tests for the navigation and progress state machine
//!
//! Exercises the public navigation API headless, against both a small
//! fixture course and the built-in catalog.

use seclearn::content::{ContentStore, Course, Lesson, Module};
use seclearn::models::LessonRef;
use seclearn::nav::{AdvancePolicy, NavigationState};

fn lesson(title: &str) -> Lesson {
    Lesson {
        title: title.to_string(),
        content: format!("<p>{}</p>", title),
        duration: None,
        syntax: vec![],
        commands: vec![],
    }
}

fn module(id: &str, lesson_count: usize) -> Module {
    Module {
        id: id.to_string(),
        title: id.to_string(),
        duration: "1 hour".to_string(),
        description: String::new(),
        lessons: (0..lesson_count)
            .map(|i| lesson(&format!("{}-lesson-{}", id, i)))
            .collect(),
        videos: vec![],
    }
}

fn fixture_store() -> ContentStore {
    ContentStore::new(Course {
        id: "fixture".to_string(),
        title: "Fixture Course".to_string(),
        tagline: String::new(),
        modules: vec![module("module-1", 2), module("module-2", 4), module("module-3", 1)],
    })
    .expect("fixture course is valid")
}

#[test]
fn progress_fraction_is_zero_without_completions_and_one_when_full() {
    let store = fixture_store();
    let mut nav = NavigationState::new(&store, AdvancePolicy::WithinModule);

    for module in store.modules() {
        assert_eq!(nav.progress_fraction(&store, &module.id), 0.0);
    }

    // Complete every lesson of module-2
    nav.select_lesson(&store, "module-2", 0).unwrap();
    for _ in 0..4 {
        nav.advance(&store).unwrap();
    }
    assert_eq!(nav.progress_fraction(&store, "module-2"), 1.0);
    assert_eq!(nav.progress_fraction(&store, "module-1"), 0.0);
}

#[test]
fn advance_on_last_lesson_is_idempotent_and_stays_put() {
    let store = fixture_store();
    let mut nav = NavigationState::new(&store, AdvancePolicy::WithinModule);
    nav.select_lesson(&store, "module-2", 3).unwrap();

    nav.advance(&store).unwrap();
    assert_eq!(nav.active(), &LessonRef::new("module-2", 3));
    assert!(nav.is_completed(&LessonRef::new("module-2", 3)));
    let count_after_first = nav.completed_count();

    // Second advance at the boundary must not move, throw, or duplicate
    nav.advance(&store).unwrap();
    assert_eq!(nav.active(), &LessonRef::new("module-2", 3));
    assert_eq!(nav.completed_count(), count_after_first);
}

#[test]
fn retreat_at_index_zero_is_identity() {
    let store = fixture_store();
    let mut nav = NavigationState::new(&store, AdvancePolicy::WithinModule);
    nav.select_lesson(&store, "module-2", 0).unwrap();

    let active_before = nav.active().clone();
    let completed_before = nav.completed_count();
    nav.retreat();
    assert_eq!(nav.active(), &active_before);
    assert_eq!(nav.completed_count(), completed_before);
}

#[test]
fn retreat_three_times_from_index_three_lands_at_zero_in_same_module() {
    let store = fixture_store();
    let mut nav = NavigationState::new(&store, AdvancePolicy::WithinModule);
    nav.select_lesson(&store, "module-2", 3).unwrap();

    nav.retreat();
    nav.retreat();
    nav.retreat();
    assert_eq!(nav.active(), &LessonRef::new("module-2", 0));

    // A fourth retreat must not cross into module-1
    nav.retreat();
    assert_eq!(nav.active(), &LessonRef::new("module-2", 0));
}

#[test]
fn cross_module_policy_continues_into_next_module() {
    let store = fixture_store();
    let mut nav = NavigationState::new(&store, AdvancePolicy::CrossModule);
    nav.select_lesson(&store, "module-1", 1).unwrap();

    nav.advance(&store).unwrap();
    assert_eq!(nav.active(), &LessonRef::new("module-2", 0));

    // Last lesson of the last module stays put
    nav.select_lesson(&store, "module-3", 0).unwrap();
    nav.advance(&store).unwrap();
    assert_eq!(nav.active(), &LessonRef::new("module-3", 0));
    assert!(nav.is_completed(&LessonRef::new("module-3", 0)));
}

#[test]
fn invalid_selection_reports_error_and_preserves_state() {
    let store = fixture_store();
    let mut nav = NavigationState::new(&store, AdvancePolicy::WithinModule);
    let before = nav.active().clone();

    assert!(nav.select_lesson(&store, "no-such-module", 0).is_err());
    assert!(nav.select_lesson(&store, "module-1", 99).is_err());
    assert_eq!(nav.active(), &before);
}

#[test]
fn route_resolution_matches_spec_boundary() {
    let store = fixture_store();
    let mut nav = NavigationState::new(&store, AdvancePolicy::WithinModule);
    nav.select_lesson(&store, "module-2", 1).unwrap();

    assert!(!nav.resolve_route(&store, "module-x"));
    assert_eq!(nav.active(), &LessonRef::new("module-2", 1));

    assert!(nav.resolve_route(&store, "module-3"));
    assert_eq!(nav.active(), &LessonRef::new("module-3", 0));
}

#[test]
fn seeded_completions_count_toward_progress() {
    let store = fixture_store();
    let seed = vec![LessonRef::new("module-1", 0), LessonRef::new("module-1", 1)];
    let nav = NavigationState::with_seed(&store, AdvancePolicy::WithinModule, &seed).unwrap();

    assert_eq!(nav.progress_fraction(&store, "module-1"), 1.0);
    assert_eq!(nav.completed_count(), 2);
}

#[test]
fn builtin_course_navigates_end_to_end() {
    let store = ContentStore::builtin();
    let mut nav = NavigationState::new(store, AdvancePolicy::CrossModule);

    // Walk the entire course by advancing; cross-module policy must
    // visit every lesson exactly once
    let total = store.total_lessons();
    for _ in 0..total {
        nav.advance(store).unwrap();
    }
    assert_eq!(nav.completed_count(), total);
    for module in store.modules() {
        assert_eq!(nav.progress_fraction(store, &module.id), 1.0);
    }
}
