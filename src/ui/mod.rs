//! UI components and rendering
//!
//! All egui-facing code for SecLearn: the sidebar navigation tree, the
//! lesson/syntax/terminal content views, and the chat panel. Components
//! report user intent back as action values; the application applies
//! them to the navigation state so the views stay free of state
//! mutation.

pub mod chat_panel;
pub mod lesson_view;
pub mod sidebar;
pub mod syntax_view;
pub mod terminal_view;

// Re-exports for convenience
pub use chat_panel::ChatPanel;
pub use lesson_view::{LessonAction, LessonView};
pub use sidebar::{Sidebar, SidebarAction};
pub use syntax_view::{SyntaxAction, SyntaxView};
pub use terminal_view::TerminalView;

use eframe::egui;

use crate::config::theme::Palette;

/// Content tabs in the central panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Lesson,
    Syntax,
    Terminal,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Lesson, Tab::Syntax, Tab::Terminal];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Lesson => "Lesson",
            Tab::Syntax => "Syntax",
            Tab::Terminal => "Terminal",
        }
    }
}

/// Push the active palette into the egui visuals
pub fn apply_theme(ctx: &egui::Context, palette: &Palette) {
    let mut visuals = if is_light(palette) {
        egui::Visuals::light()
    } else {
        egui::Visuals::dark()
    };
    visuals.panel_fill = palette.panel.color32();
    visuals.window_fill = palette.panel.color32();
    visuals.extreme_bg_color = palette.background.color32();
    visuals.hyperlink_color = palette.link.color32();
    visuals.selection.bg_fill = palette.accent.color32().linear_multiply(0.4);
    visuals.override_text_color = Some(palette.text_primary.color32());
    ctx.set_visuals(visuals);
}

fn is_light(palette: &Palette) -> bool {
    let [r, g, b] = palette.background.0;
    (r as u16 + g as u16 + b as u16) > 3 * 128
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels() {
        assert_eq!(Tab::Lesson.label(), "Lesson");
        assert_eq!(Tab::ALL.len(), 3);
    }

    #[test]
    fn test_default_tab_is_lesson() {
        assert_eq!(Tab::default(), Tab::Lesson);
    }
}
