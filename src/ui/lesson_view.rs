//! Lesson content view
//!
//! Draws the hero banner, the parsed lesson content, supplementary
//! video links, and the previous/continue controls.

use eframe::egui;
use eframe::egui::text::LayoutJob;
use eframe::egui::{Color32, FontId, TextFormat};

use crate::config::theme::Palette;
use crate::content::{ContentStore, Lesson, Module};
use crate::nav::NavigationState;
use crate::render::{parse_markup, Block, Span, SpanStyle};

/// User intent reported by the lesson view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonAction {
    /// Mark the active lesson complete and move on
    Advance,
    /// Go back one lesson
    Retreat,
}

/// Lesson tab component
#[derive(Default)]
pub struct LessonView;

impl LessonView {
    pub fn new() -> Self {
        Self
    }

    /// Draw the active lesson; returns at most one action per frame
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        store: &ContentStore,
        nav: &NavigationState,
        palette: &Palette,
    ) -> Option<LessonAction> {
        let active = nav.active();
        let (module, lesson) = match (
            store.module(&active.module_id),
            store.lesson_at(active),
        ) {
            (Ok(m), Ok(l)) => (m, l),
            _ => {
                // Content lookup miss is recoverable: show a notice and
                // let the caller fall back to the first lesson
                ui.colored_label(palette.error.color32(), "Lesson not found.");
                return None;
            }
        };

        let mut action = None;

        self.hero(ui, module, lesson, active.index, palette);
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("lesson_content")
            .show(ui, |ui| {
                ui.set_max_width(760.0);
                for block in parse_markup(&lesson.content) {
                    match block {
                        Block::Heading(text) => {
                            ui.add_space(10.0);
                            ui.label(
                                egui::RichText::new(text)
                                    .size(17.0)
                                    .strong()
                                    .color(palette.accent.color32()),
                            );
                            ui.add_space(2.0);
                        }
                        Block::Paragraph(spans) => {
                            ui.add_space(4.0);
                            ui.label(self.layout_spans(&spans, palette));
                        }
                        Block::Bullets(items) => {
                            ui.add_space(4.0);
                            for item in items {
                                ui.horizontal_wrapped(|ui| {
                                    ui.label(
                                        egui::RichText::new("•")
                                            .color(palette.accent.color32()),
                                    );
                                    ui.label(self.layout_spans(&item, palette));
                                });
                            }
                        }
                        Block::Code(code) => {
                            ui.add_space(6.0);
                            egui::Frame::group(ui.style())
                                .fill(palette.code_bg.color32())
                                .show(ui, |ui| {
                                    ui.label(
                                        egui::RichText::new(code)
                                            .font(FontId::monospace(13.0))
                                            .color(palette.terminal_text.color32()),
                                    );
                                });
                            ui.add_space(2.0);
                        }
                    }
                }

                if !module.videos.is_empty() {
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new("Watch next")
                            .size(14.0)
                            .strong()
                            .color(palette.text_primary.color32()),
                    );
                    for video in &module.videos {
                        ui.hyperlink_to(&video.title, &video.url);
                    }
                }

                ui.add_space(16.0);
                ui.separator();
                ui.horizontal(|ui| {
                    let at_start = active.index == 0;
                    if ui
                        .add_enabled(!at_start, egui::Button::new("← Previous"))
                        .clicked()
                    {
                        action = Some(LessonAction::Retreat);
                    }

                    let last = store
                        .lesson_count(&active.module_id)
                        .map(|count| active.index + 1 >= count)
                        .unwrap_or(true);
                    let label = if last {
                        "Mark complete ✔"
                    } else {
                        "Complete & continue →"
                    };
                    if ui
                        .button(
                            egui::RichText::new(label).color(palette.success.color32()),
                        )
                        .clicked()
                    {
                        action = Some(LessonAction::Advance);
                    }
                });
                ui.add_space(8.0);
            });

        action
    }

    fn hero(
        &self,
        ui: &mut egui::Ui,
        module: &Module,
        lesson: &Lesson,
        index: usize,
        palette: &Palette,
    ) {
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(format!("{} · {}", module.title, module.duration))
                .size(12.0)
                .color(palette.text_dim.color32()),
        );
        ui.label(
            egui::RichText::new(&lesson.title)
                .size(22.0)
                .strong()
                .color(palette.text_primary.color32()),
        );
        let mut meta = format!("Lesson {}", index + 1);
        if let Some(duration) = &lesson.duration {
            meta.push_str(&format!(" · {}", duration));
        }
        ui.label(
            egui::RichText::new(meta)
                .size(11.0)
                .color(palette.text_dim.color32()),
        );
        ui.add_space(4.0);
    }

    fn layout_spans(&self, spans: &[Span], palette: &Palette) -> LayoutJob {
        let mut job = LayoutJob::default();
        for span in spans {
            let format = self.format_for(span.style, palette);
            job.append(&span.text, 0.0, format);
        }
        job
    }

    fn format_for(&self, style: SpanStyle, palette: &Palette) -> TextFormat {
        let body = FontId::proportional(14.0);
        match style {
            SpanStyle::Normal => TextFormat {
                font_id: body,
                color: palette.text_primary.color32(),
                ..Default::default()
            },
            SpanStyle::Strong => TextFormat {
                font_id: FontId::proportional(14.0),
                color: Color32::from_rgb(
                    palette.text_primary.0[0].saturating_add(20),
                    palette.text_primary.0[1].saturating_add(20),
                    palette.text_primary.0[2].saturating_add(20),
                ),
                ..Default::default()
            },
            SpanStyle::Emphasis => TextFormat {
                font_id: body,
                color: palette.text_primary.color32(),
                italics: true,
                ..Default::default()
            },
            SpanStyle::Code => TextFormat {
                font_id: FontId::monospace(13.0),
                color: palette.accent.color32(),
                background: palette.code_bg.color32(),
                ..Default::default()
            },
        }
    }
}
