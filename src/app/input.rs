//! Keyboard shortcuts
//!
//! Global shortcuts handled once per frame, before the panels consume
//! input. Arrow navigation is modified with Ctrl so the terminal's
//! history recall and text editing keep the plain arrow keys.

use eframe::egui;

use crate::ui::Tab;

/// A recognized global shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shortcut {
    /// Ctrl+Right: mark complete and continue
    NextLesson,
    /// Ctrl+Left: previous lesson
    PrevLesson,
    /// Alt+1/2/3: switch content tab
    SwitchTab(Tab),
}

/// Detect at most one shortcut per frame
pub(crate) fn detect(ctx: &egui::Context) -> Option<Shortcut> {
    ctx.input(|i| {
        if i.modifiers.ctrl && i.key_pressed(egui::Key::ArrowRight) {
            return Some(Shortcut::NextLesson);
        }
        if i.modifiers.ctrl && i.key_pressed(egui::Key::ArrowLeft) {
            return Some(Shortcut::PrevLesson);
        }
        if i.modifiers.alt {
            if i.key_pressed(egui::Key::Num1) {
                return Some(Shortcut::SwitchTab(Tab::Lesson));
            }
            if i.key_pressed(egui::Key::Num2) {
                return Some(Shortcut::SwitchTab(Tab::Syntax));
            }
            if i.key_pressed(egui::Key::Num3) {
                return Some(Shortcut::SwitchTab(Tab::Terminal));
            }
        }
        None
    })
}
