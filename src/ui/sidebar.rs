//! Sidebar navigation tree
//!
//! Renders the module/lesson tree with expand/collapse, per-module
//! progress bars, and completion ticks. Clicks come back as actions;
//! the application applies them to the navigation state.

use eframe::egui;

use crate::config::theme::Palette;
use crate::content::ContentStore;
use crate::models::LessonRef;
use crate::nav::NavigationState;

/// User intent reported by the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarAction {
    /// A lesson row was clicked
    SelectLesson(LessonRef),
    /// A module header was clicked
    ToggleModule(String),
}

/// Sidebar navigation component
#[derive(Default)]
pub struct Sidebar;

impl Sidebar {
    pub fn new() -> Self {
        Self
    }

    /// Draw the tree; returns at most one action per frame
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        store: &ContentStore,
        nav: &NavigationState,
        palette: &Palette,
    ) -> Option<SidebarAction> {
        let mut action = None;

        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(&store.course().title)
                .size(16.0)
                .strong()
                .color(palette.text_primary.color32()),
        );
        ui.label(
            egui::RichText::new(&store.course().tagline)
                .size(11.0)
                .color(palette.text_dim.color32()),
        );
        ui.add_space(4.0);
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("sidebar_tree")
            .show(ui, |ui| {
                for module in store.modules() {
                    let expanded = nav.is_expanded(&module.id);
                    let is_active_module = nav.active().module_id == module.id;

                    let arrow = if expanded { "⏷" } else { "⏵" };
                    let header = egui::RichText::new(format!("{} {}", arrow, module.title))
                        .size(13.0)
                        .strong()
                        .color(if is_active_module {
                            palette.accent.color32()
                        } else {
                            palette.text_primary.color32()
                        });

                    let response = ui.add(
                        egui::Label::new(header)
                            .sense(egui::Sense::click())
                            .wrap(),
                    );
                    if response.clicked() {
                        action = Some(SidebarAction::ToggleModule(module.id.clone()));
                    }
                    response.on_hover_text(format!(
                        "{} · {} lessons · {}",
                        module.description,
                        module.lessons.len(),
                        module.duration
                    ));

                    let fraction = nav.progress_fraction(store, &module.id);
                    ui.add(
                        egui::ProgressBar::new(fraction)
                            .desired_height(4.0)
                            .fill(palette.success.color32()),
                    );

                    if expanded {
                        for (index, lesson) in module.lessons.iter().enumerate() {
                            let lesson_ref = LessonRef::new(module.id.clone(), index);
                            let selected = nav.active() == &lesson_ref;
                            let completed = nav.is_completed(&lesson_ref);

                            let tick = if completed { "✔" } else { "•" };
                            let text = egui::RichText::new(format!("  {} {}", tick, lesson.title))
                                .size(12.0)
                                .color(if completed {
                                    palette.success.color32()
                                } else if selected {
                                    palette.text_primary.color32()
                                } else {
                                    palette.text_dim.color32()
                                });

                            if ui.selectable_label(selected, text).clicked() {
                                action = Some(SidebarAction::SelectLesson(lesson_ref));
                            }
                        }
                    }
                    ui.add_space(8.0);
                }
            });

        action
    }
}
