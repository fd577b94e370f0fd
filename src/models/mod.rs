//! Data structures for SecLearn
//!
//! Pure domain models shared across the navigation state, terminal,
//! chat client, and UI layers.

pub mod chat_message;
pub mod lesson_ref;
pub mod transcript;

pub use chat_message::{ChatMessage, ChatRole};
pub use lesson_ref::LessonRef;
pub use transcript::{LineKind, TranscriptLine};
