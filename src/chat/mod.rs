//! Study Assistant Chat Client
//!
//! Relays a learner's question, augmented with current-lesson context,
//! to the completion service, and supports a cancellable client-side
//! typewriter reveal for replies. The transcript itself is owned by the
//! chat panel; this module is the service boundary.

pub mod backend;
pub mod reveal;

use std::sync::Arc;

use backend::{CompletionBackend, WireMessage};

use crate::content::ContentStore;
use crate::error::Result;
use crate::models::{ChatMessage, LessonRef};
use crate::render::strip_markup;

pub use reveal::TypewriterReveal;

/// Assistant message substituted when the service call fails
pub const FALLBACK_REPLY: &str =
    "Sorry, I couldn't reach the study assistant just now. Please try again in a moment.";

/// Snapshot of where the learner is, used to ground the assistant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonContext {
    pub course_title: String,
    pub module_title: String,
    pub lesson_title: String,
    /// Lesson content with markup stripped
    pub content: String,
}

impl LessonContext {
    /// Capture the context for the active lesson
    pub fn capture(store: &ContentStore, active: &LessonRef) -> Result<Self> {
        let module = store.module(&active.module_id)?;
        let lesson = store.lesson_at(active)?;
        Ok(Self {
            course_title: store.course().title.clone(),
            module_title: module.title.clone(),
            lesson_title: lesson.title.clone(),
            content: strip_markup(&lesson.content),
        })
    }

    /// The instruction string prepended to the conversation
    pub fn instruction(&self) -> String {
        format!(
            "You are the study assistant for the course \"{}\". \
             The learner is currently on module \"{}\", lesson \"{}\". \
             Ground your answers in the lesson content below and keep them \
             short and practical.\n\nLesson content:\n{}",
            self.course_title, self.module_title, self.lesson_title, self.content
        )
    }
}

/// Service-boundary client for the study assistant
pub struct ChatClient {
    backend: Arc<dyn CompletionBackend>,
}

impl ChatClient {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Ask one question
    ///
    /// Sends the context instruction, the prior transcript, and the new
    /// question as an ordered role-tagged message list. The caller is
    /// responsible for appending the [`FALLBACK_REPLY`] on error so the
    /// transcript always gains exactly one assistant message per ask.
    pub async fn ask(
        &self,
        user_text: &str,
        prior: &[ChatMessage],
        context: &LessonContext,
    ) -> Result<String> {
        let mut messages = Vec::with_capacity(prior.len() + 2);
        messages.push(WireMessage::system(context.instruction()));
        messages.extend(prior.iter().map(WireMessage::from));
        messages.push(WireMessage {
            role: "user".to_string(),
            content: user_text.to_string(),
        });

        self.backend.complete(&messages).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Course, Lesson, Module};
    use crate::error::Error;
    use async_trait::async_trait;

    struct CapturingBackend {
        reply: &'static str,
        seen: std::sync::Mutex<Vec<WireMessage>>,
    }

    #[async_trait]
    impl CompletionBackend for CapturingBackend {
        async fn complete(&self, messages: &[WireMessage]) -> Result<String> {
            *self.seen.lock().unwrap() = messages.to_vec();
            Ok(self.reply.to_string())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl CompletionBackend for FailingBackend {
        async fn complete(&self, _messages: &[WireMessage]) -> Result<String> {
            Err(Error::ChatRequestFailed {
                reason: "connection refused".to_string(),
            })
        }
    }

    fn store() -> ContentStore {
        ContentStore::new(Course {
            id: "course".to_string(),
            title: "Practical Cybersecurity".to_string(),
            tagline: String::new(),
            modules: vec![Module {
                id: "module-1".to_string(),
                title: "Network Recon".to_string(),
                duration: "1h".to_string(),
                description: String::new(),
                lessons: vec![Lesson {
                    title: "Port Scanning".to_string(),
                    content: "<p>Scanning finds <strong>open ports</strong>.</p>".to_string(),
                    duration: None,
                    syntax: vec![],
                    commands: vec![],
                }],
                videos: vec![],
            }],
        })
        .unwrap()
    }

    #[test]
    fn test_context_capture_strips_markup() {
        let store = store();
        let context = LessonContext::capture(&store, &LessonRef::new("module-1", 0)).unwrap();
        assert_eq!(context.content, "Scanning finds open ports.");

        let instruction = context.instruction();
        assert!(instruction.contains("Practical Cybersecurity"));
        assert!(instruction.contains("Network Recon"));
        assert!(instruction.contains("Port Scanning"));
        assert!(instruction.contains("Scanning finds open ports."));
    }

    #[test]
    fn test_context_capture_rejects_bad_ref() {
        let store = store();
        assert!(LessonContext::capture(&store, &LessonRef::new("module-9", 0)).is_err());
    }

    #[test]
    fn test_ask_orders_messages() {
        let store = store();
        let context = LessonContext::capture(&store, &LessonRef::new("module-1", 0)).unwrap();
        let backend = Arc::new(CapturingBackend {
            reply: "an answer",
            seen: std::sync::Mutex::new(Vec::new()),
        });
        let client = ChatClient::new(backend.clone());

        let prior = vec![
            ChatMessage::assistant("Welcome!"),
            ChatMessage::user("earlier question"),
        ];
        let reply =
            tokio_test::block_on(client.ask("what is nmap?", &prior, &context)).unwrap();
        assert_eq!(reply, "an answer");

        let seen = backend.seen.lock().unwrap();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0].role, "system");
        assert_eq!(seen[1].role, "assistant");
        assert_eq!(seen[2].role, "user");
        assert_eq!(seen[3].role, "user");
        assert_eq!(seen[3].content, "what is nmap?");
    }

    #[test]
    fn test_ask_propagates_backend_failure() {
        let store = store();
        let context = LessonContext::capture(&store, &LessonRef::new("module-1", 0)).unwrap();
        let client = ChatClient::new(Arc::new(FailingBackend));

        let result = tokio_test::block_on(client.ask("hello?", &[], &context));
        assert!(matches!(result, Err(Error::ChatRequestFailed { .. })));
    }
}
