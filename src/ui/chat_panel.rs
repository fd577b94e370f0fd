//! Study assistant chat panel
//!
//! Owns the session transcript, the loading flag, and the typewriter
//! reveal for the newest assistant reply. Input is disabled while a
//! request is outstanding so transcript entries can never interleave.

use std::time::{Duration, Instant};

use eframe::egui;

use crate::chat::{TypewriterReveal, FALLBACK_REPLY};
use crate::config::theme::Palette;
use crate::models::{ChatMessage, ChatRole};

const GREETING: &str =
    "Hi! I'm your study assistant. Ask me anything about the lesson you're reading.";

/// Chat panel component and transcript owner
pub struct ChatPanel {
    messages: Vec<ChatMessage>,
    input: String,
    loading: bool,
    reveal: TypewriterReveal,
}

impl ChatPanel {
    /// Create a panel seeded with the assistant greeting
    pub fn new(reveal_interval: Duration) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            input: String::new(),
            loading: false,
            reveal: TypewriterReveal::with_interval(reveal_interval),
        }
    }

    /// Record the learner's question and enter the loading state
    ///
    /// Callers must check [`is_loading`](Self::is_loading) first; the
    /// panel's own send controls already enforce it.
    pub fn begin_request(&mut self, question: String) {
        self.messages.push(ChatMessage::user(question));
        self.loading = true;
    }

    /// Append a successful reply and start revealing it
    pub fn deliver_reply(&mut self, text: String) {
        self.reveal.start(text.clone());
        self.messages.push(ChatMessage::assistant(text));
        self.loading = false;
    }

    /// Append the fallback reply after a failed request
    pub fn deliver_failure(&mut self) {
        self.reveal.start(FALLBACK_REPLY);
        self.messages.push(ChatMessage::assistant(FALLBACK_REPLY));
        self.loading = false;
    }

    /// Advance the reveal; returns whether a repaint is needed
    pub fn tick_reveal(&mut self, now: Instant) -> bool {
        self.reveal.tick(now);
        self.reveal.is_active()
    }

    /// Whether a request is outstanding
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The transcript so far
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Draw the panel; returns a submitted question when the learner
    /// sends one (never while loading)
    pub fn show(&mut self, ui: &mut egui::Ui, palette: &Palette) -> Option<String> {
        let mut submitted = None;

        ui.add_space(6.0);
        ui.label(
            egui::RichText::new("Study assistant")
                .size(15.0)
                .strong()
                .color(palette.text_primary.color32()),
        );
        ui.separator();

        let input_height = 64.0;
        egui::ScrollArea::vertical()
            .id_salt("chat_transcript")
            .max_height((ui.available_height() - input_height).max(80.0))
            .stick_to_bottom(true)
            .show(ui, |ui| {
                let last_index = self.messages.len().saturating_sub(1);
                for (i, message) in self.messages.iter().enumerate() {
                    let (who, color) = match message.role {
                        ChatRole::User => ("You", palette.accent.color32()),
                        ChatRole::Assistant => ("Assistant", palette.success.color32()),
                    };
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(who)
                            .size(11.0)
                            .strong()
                            .color(color),
                    );

                    // The newest assistant reply may still be revealing
                    let text = if i == last_index
                        && message.role == ChatRole::Assistant
                        && self.reveal.is_active()
                    {
                        self.reveal.visible_text()
                    } else {
                        message.text.as_str()
                    };
                    ui.label(
                        egui::RichText::new(text)
                            .size(13.0)
                            .color(palette.text_primary.color32()),
                    );
                }

                if self.loading {
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(
                            egui::RichText::new("thinking…")
                                .size(12.0)
                                .color(palette.text_dim.color32()),
                        );
                    });
                }
                ui.add_space(4.0);
            });

        ui.separator();
        ui.add_enabled_ui(!self.loading, |ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.input)
                    .desired_width(f32::INFINITY)
                    .hint_text("Ask about this lesson…"),
            );

            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let send = ui.button("Send ➤").clicked();

            if (enter || send) && !self.input.trim().is_empty() {
                submitted = Some(self.input.trim().to_string());
                self.input.clear();
                response.request_focus();
            }
        });

        submitted
    }
}
