//! Syntax reference view
//!
//! Renders a lesson's syntax reference entries: titled free-text blocks
//! with URLs auto-linked, plus a copy control per entry.

use eframe::egui;
use eframe::egui::FontId;

use crate::config::theme::Palette;
use crate::content::Lesson;
use crate::render::{linkify, LinkSegment};

/// User intent reported by the syntax view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxAction {
    /// Copy an entry body to the clipboard
    CopyText(String),
}

/// Syntax tab component
#[derive(Default)]
pub struct SyntaxView;

impl SyntaxView {
    pub fn new() -> Self {
        Self
    }

    /// Draw the syntax entries for the active lesson
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        lesson: &Lesson,
        palette: &Palette,
    ) -> Option<SyntaxAction> {
        let mut action = None;

        if lesson.syntax.is_empty() {
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new("No syntax reference for this lesson.")
                    .color(palette.text_dim.color32()),
            );
            return None;
        }

        egui::ScrollArea::vertical()
            .id_salt("syntax_entries")
            .show(ui, |ui| {
                ui.set_max_width(760.0);
                for (i, entry) in lesson.syntax.iter().enumerate() {
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(&entry.title)
                                .size(15.0)
                                .strong()
                                .color(palette.accent.color32()),
                        );
                        if ui
                            .small_button("⧉ copy")
                            .on_hover_text("Copy this block")
                            .clicked()
                        {
                            action = Some(SyntaxAction::CopyText(entry.body.clone()));
                        }
                    });

                    egui::Frame::group(ui.style())
                        .fill(palette.code_bg.color32())
                        .show(ui, |ui| {
                            ui.push_id(i, |ui| {
                                self.linkified_body(ui, &entry.body, palette);
                            });
                        });
                }
                ui.add_space(8.0);
            });

        action
    }

    /// Draw body text line by line, turning URLs into hyperlinks
    fn linkified_body(&self, ui: &mut egui::Ui, body: &str, palette: &Palette) {
        for line in body.lines() {
            if line.trim().is_empty() {
                ui.add_space(4.0);
                continue;
            }
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for segment in linkify(line) {
                    match segment {
                        LinkSegment::Text(text) => {
                            ui.label(
                                egui::RichText::new(text)
                                    .font(FontId::monospace(13.0))
                                    .color(palette.terminal_text.color32()),
                            );
                        }
                        LinkSegment::Url(url) => {
                            ui.hyperlink_to(
                                egui::RichText::new(url.clone())
                                    .font(FontId::monospace(13.0)),
                                url,
                            );
                        }
                    }
                }
            });
        }
    }
}
