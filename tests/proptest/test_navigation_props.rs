//! Property-based tests for the navigation state machine
//!
//! Random operation sequences must never break the core invariants:
//! the active lesson stays inside the course, progress fractions stay
//! in [0, 1], and the completion set only grows.

use proptest::prelude::*;

use seclearn::content::{ContentStore, Course, Lesson, Module};
use seclearn::nav::{AdvancePolicy, NavigationState};

#[derive(Debug, Clone)]
enum Op {
    Select(usize, usize),
    Advance,
    Retreat,
    Toggle(usize),
    Route(usize),
}

fn store() -> ContentStore {
    let modules = (0..4)
        .map(|m| Module {
            id: format!("module-{}", m + 1),
            title: format!("Module {}", m + 1),
            duration: "1 hour".to_string(),
            description: String::new(),
            lessons: (0..(m + 2))
                .map(|l| Lesson {
                    title: format!("Lesson {}", l),
                    content: "<p>content</p>".to_string(),
                    duration: None,
                    syntax: vec![],
                    commands: vec![],
                })
                .collect(),
            videos: vec![],
        })
        .collect();

    ContentStore::new(Course {
        id: "prop-course".to_string(),
        title: "Property Course".to_string(),
        tagline: String::new(),
        modules,
    })
    .expect("property course is valid")
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..6, 0usize..8).prop_map(|(m, l)| Op::Select(m, l)),
        Just(Op::Advance),
        Just(Op::Retreat),
        (0usize..6).prop_map(Op::Toggle),
        (0usize..6).prop_map(Op::Route),
    ]
}

fn module_id(index: usize) -> String {
    // Indexes past the course produce unknown ids on purpose
    format!("module-{}", index + 1)
}

proptest! {
    #[test]
    fn invariants_hold_under_random_operations(
        ops in proptest::collection::vec(op_strategy(), 1..60),
        policy in prop_oneof![Just(AdvancePolicy::WithinModule), Just(AdvancePolicy::CrossModule)],
    ) {
        let store = store();
        let mut nav = NavigationState::new(&store, policy);
        let mut last_completed = 0usize;

        for op in ops {
            match op {
                Op::Select(m, l) => {
                    let _ = nav.select_lesson(&store, &module_id(m), l);
                }
                Op::Advance => {
                    nav.advance(&store).expect("advance on a valid active lesson");
                }
                Op::Retreat => nav.retreat(),
                Op::Toggle(m) => nav.toggle_module(&module_id(m)),
                Op::Route(m) => {
                    let _ = nav.resolve_route(&store, &module_id(m));
                }
            }

            // Active lesson is always inside the course
            prop_assert!(store.lesson_at(nav.active()).is_ok());

            // The active module always renders expanded
            prop_assert!(nav.is_expanded(&nav.active().module_id));

            // Completion set grows monotonically
            prop_assert!(nav.completed_count() >= last_completed);
            last_completed = nav.completed_count();

            // Progress fractions stay in bounds for every module,
            // known or not
            for m in 0..6 {
                let fraction = nav.progress_fraction(&store, &module_id(m));
                prop_assert!((0.0..=1.0).contains(&fraction));
            }
        }
    }

    #[test]
    fn retreat_never_changes_module(
        start_module in 0usize..4,
        retreats in 1usize..10,
    ) {
        let store = store();
        let mut nav = NavigationState::new(&store, AdvancePolicy::WithinModule);
        let id = module_id(start_module);
        let lesson_count = store.lesson_count(&id).unwrap();
        nav.select_lesson(&store, &id, lesson_count - 1).unwrap();

        for _ in 0..retreats {
            nav.retreat();
        }

        prop_assert_eq!(nav.active().module_id.clone(), id);
        prop_assert!(nav.active().index <= lesson_count - 1);
    }

    #[test]
    fn completing_everything_yields_fraction_one(
        policy in prop_oneof![Just(AdvancePolicy::WithinModule), Just(AdvancePolicy::CrossModule)],
    ) {
        let store = store();
        let mut nav = NavigationState::new(&store, policy);

        for module in store.modules() {
            let count = store.lesson_count(&module.id).unwrap();
            for index in 0..count {
                nav.select_lesson(&store, &module.id, index).unwrap();
                nav.advance(&store).unwrap();
            }
            prop_assert_eq!(nav.progress_fraction(&store, &module.id), 1.0);
        }
    }
}
