//! Practice terminal view
//!
//! Renders the transcript, the pinned input prompt with arrow-key
//! history recall, and the lesson's suggested command chips.

use eframe::egui;
use eframe::egui::FontId;

use crate::config::theme::Palette;
use crate::models::LineKind;
use crate::terminal::TerminalSession;

/// Terminal tab component; owns only the in-progress input text
pub struct TerminalView {
    input: String,
    request_focus: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            request_focus: true,
        }
    }

    /// Draw the terminal; submits and recalls directly on the session
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        session: &mut TerminalSession,
        suggested: &[String],
        palette: &Palette,
    ) {
        if !suggested.is_empty() {
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new("Try:")
                        .size(12.0)
                        .color(palette.text_dim.color32()),
                );
                for command in suggested {
                    if ui
                        .small_button(
                            egui::RichText::new(command).font(FontId::monospace(12.0)),
                        )
                        .clicked()
                    {
                        self.input = command.clone();
                        self.request_focus = true;
                    }
                }
            });
            ui.add_space(4.0);
        }

        let frame = egui::Frame::group(ui.style()).fill(palette.terminal_bg.color32());
        frame.show(ui, |ui| {
            let transcript_height = ui.available_height() - 36.0;
            egui::ScrollArea::vertical()
                .id_salt("terminal_transcript")
                .max_height(transcript_height.max(60.0))
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    for line in session.transcript() {
                        let color = match line.kind {
                            LineKind::Command => palette.terminal_prompt.color32(),
                            LineKind::Output => palette.terminal_text.color32(),
                            LineKind::Error => palette.error.color32(),
                            LineKind::Banner => palette.text_dim.color32(),
                            LineKind::Blank => palette.terminal_text.color32(),
                        };
                        if line.kind == LineKind::Blank {
                            ui.add_space(8.0);
                        } else {
                            ui.label(
                                egui::RichText::new(&line.text)
                                    .font(FontId::monospace(13.0))
                                    .color(color),
                            );
                        }
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("$")
                        .font(FontId::monospace(14.0))
                        .color(palette.terminal_prompt.color32()),
                );

                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.input)
                        .font(FontId::monospace(14.0))
                        .desired_width(f32::INFINITY)
                        .hint_text("Type a command, 'help' to start"),
                );

                if self.request_focus {
                    response.request_focus();
                    self.request_focus = false;
                }

                if response.has_focus() {
                    if ui.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
                        if let Some(recalled) = session.recall_previous(&self.input) {
                            self.input = recalled;
                        }
                    } else if ui.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
                        if let Some(recalled) = session.recall_next() {
                            self.input = recalled;
                        }
                    }
                }

                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    // Empty input is a no-op by contract; the session
                    // enforces it, we just skip the visual churn
                    session.submit(&self.input);
                    self.input.clear();
                    self.request_focus = true;
                }
            });
        });
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}
