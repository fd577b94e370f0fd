//! Unit tests for chat context construction and the typewriter reveal

use std::time::{Duration, Instant};

use seclearn::chat::{LessonContext, TypewriterReveal};
use seclearn::content::ContentStore;
use seclearn::models::LessonRef;
use seclearn::render::strip_markup;

#[test]
fn context_concatenates_course_module_lesson_and_content() {
    let store = ContentStore::builtin();
    let first = store.first_lesson();
    let context = LessonContext::capture(store, &first).unwrap();

    let module = store.module(&first.module_id).unwrap();
    let lesson = store.lesson_at(&first).unwrap();

    let instruction = context.instruction();
    assert!(instruction.contains(&store.course().title));
    assert!(instruction.contains(&module.title));
    assert!(instruction.contains(&lesson.title));
}

#[test]
fn context_content_has_no_markup() {
    let store = ContentStore::builtin();
    for module in store.modules() {
        for (index, _) in module.lessons.iter().enumerate() {
            let lesson_ref = LessonRef::new(module.id.clone(), index);
            let context = LessonContext::capture(store, &lesson_ref).unwrap();
            assert!(
                !context.content.contains('<') || !context.content.contains("</"),
                "markup leaked into context for {}",
                lesson_ref
            );
        }
    }
}

#[test]
fn context_capture_fails_cleanly_for_unknown_lesson() {
    let store = ContentStore::builtin();
    assert!(LessonContext::capture(store, &LessonRef::new("ghost-module", 0)).is_err());
    let module_id = &store.modules()[0].id;
    assert!(LessonContext::capture(store, &LessonRef::new(module_id.clone(), 999)).is_err());
}

#[test]
fn strip_markup_flattens_nested_tags() {
    let content = "<h3>Title</h3><ul><li>One <code>cmd</code></li><li>Two</li></ul>";
    assert_eq!(strip_markup(content), "Title One cmd Two");
}

#[test]
fn reveal_is_presentation_only_and_cancellable() {
    let mut reveal = TypewriterReveal::with_interval(Duration::from_millis(5));
    reveal.start("first reply text");

    let t0 = Instant::now();
    reveal.tick(t0);
    assert!(reveal.is_active());
    assert!(reveal.visible_text().len() < reveal.full_text().len());

    // A newer message replaces the in-flight reveal outright
    reveal.start("newer reply");
    assert_eq!(reveal.full_text(), "newer reply");
    assert_eq!(reveal.visible_text(), "");

    reveal.finish();
    assert_eq!(reveal.visible_text(), "newer reply");
}

#[test]
fn reveal_releases_whole_message_over_time() {
    let mut reveal = TypewriterReveal::with_interval(Duration::from_millis(1));
    reveal.start("ab");

    let t0 = Instant::now();
    reveal.tick(t0);
    reveal.tick(t0 + Duration::from_millis(10));
    assert!(reveal.is_done());
    assert_eq!(reveal.visible_text(), "ab");
}
