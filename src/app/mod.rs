//! Main application structure
//!
//! This module contains the core `SecLearnApp` struct that implements
//! the `eframe::App` trait, composing:
//!
//! - **Sidebar:** module/lesson tree with progress tracking
//! - **Central panel:** hero banner plus the Lesson / Syntax / Terminal tabs
//! - **Chat panel:** the study assistant with typewriter reveal
//! - **Background task:** completion-service requests over channels
//!
//! ## Architecture
//!
//! The app runs in the single-threaded egui event loop. The only
//! background work is the chat request loop on a tokio runtime owned by
//! the app; communication happens via unbounded mpsc channels
//! (`async_ops`). Repaints are requested only while a reveal or a
//! request is pending.

mod async_ops;
mod input;

use std::time::{Duration, Instant};

use arboard::Clipboard;
use eframe::egui;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::chat::backend::HttpCompletionBackend;
use crate::chat::{ChatClient, LessonContext};
use crate::config::theme::Palette;
use crate::config::RuntimeConfig;
use crate::content::ContentStore;
use crate::error::Result;
use crate::nav::NavigationState;
use crate::terminal::TerminalSession;
use crate::ui::{
    self, ChatPanel, LessonAction, LessonView, Sidebar, SidebarAction, SyntaxAction, SyntaxView,
    Tab, TerminalView,
};

use async_ops::{AsyncRequest, AsyncResult};
use input::Shortcut;

/// Main SecLearn application
pub struct SecLearnApp {
    /// Course content (immutable, process-wide)
    store: &'static ContentStore,
    /// Navigation and progress state
    nav: NavigationState,
    /// Practice terminal session
    session: TerminalSession,
    /// Active content tab
    active_tab: Tab,
    /// UI components
    sidebar: Sidebar,
    lesson_view: LessonView,
    syntax_view: SyntaxView,
    terminal_view: TerminalView,
    chat_panel: ChatPanel,
    /// Runtime configuration
    runtime_config: RuntimeConfig,
    /// System clipboard, if available
    clipboard: Option<Clipboard>,
    /// Tokio runtime for async operations
    /// Note: kept alive for the app's lifetime so the request loop survives
    #[allow(dead_code)]
    runtime: tokio::runtime::Runtime,
    /// Channel for sending async requests from UI to background
    async_tx: mpsc::UnboundedSender<AsyncRequest>,
    /// Channel for receiving async results from background to UI
    async_rx: mpsc::UnboundedReceiver<AsyncResult>,
}

impl SecLearnApp {
    /// Create the application
    ///
    /// `route` is the optional course-address segment (`--module`); an
    /// unknown segment leaves the default selection unchanged.
    pub fn new(runtime_config: RuntimeConfig, route: Option<&str>) -> Result<Self> {
        let store = ContentStore::builtin();
        let config = runtime_config.config();

        let seed = config.progress.seed_refs()?;
        let mut nav =
            NavigationState::with_seed(store, config.progress.advance_policy, &seed)?;

        if let Some(segment) = route {
            if nav.resolve_route(store, segment) {
                info!("route resolved to module '{}'", segment);
            }
        }

        let backend = HttpCompletionBackend::from_config(&config.chat)?;
        if backend.is_configured() {
            info!("study assistant backend configured");
        }
        let client = ChatClient::new(Arc::new(backend));

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        let (async_tx, request_rx) = mpsc::unbounded_channel();
        let (result_tx, async_rx) = mpsc::unbounded_channel();
        runtime.spawn(async_ops::async_operation_loop(
            request_rx, result_tx, client,
        ));

        let clipboard = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                warn!("clipboard unavailable: {}", e);
                None
            }
        };

        let reveal_interval = Duration::from_millis(config.ui.reveal_interval_ms);

        Ok(Self {
            store,
            nav,
            session: TerminalSession::new(),
            active_tab: Tab::default(),
            sidebar: Sidebar::new(),
            lesson_view: LessonView::new(),
            syntax_view: SyntaxView::new(),
            terminal_view: TerminalView::new(),
            chat_panel: ChatPanel::new(reveal_interval),
            runtime_config,
            clipboard,
            runtime,
            async_tx,
            async_rx,
        })
    }

    /// Drain results from the background task
    fn poll_async_results(&mut self) {
        while let Ok(result) = self.async_rx.try_recv() {
            match result {
                AsyncResult::AssistantReply(text) => {
                    self.chat_panel.deliver_reply(text);
                }
                AsyncResult::AssistantFailed(reason) => {
                    warn!("substituting fallback reply: {}", reason);
                    self.chat_panel.deliver_failure();
                }
            }
        }
    }

    fn apply_sidebar_action(&mut self, action: SidebarAction) {
        match action {
            SidebarAction::SelectLesson(lesson_ref) => {
                if let Err(e) =
                    self.nav
                        .select_lesson(self.store, &lesson_ref.module_id, lesson_ref.index)
                {
                    warn!("sidebar selection rejected: {}", e);
                }
            }
            SidebarAction::ToggleModule(module_id) => {
                self.nav.toggle_module(&module_id);
            }
        }
    }

    fn apply_lesson_action(&mut self, action: LessonAction) {
        match action {
            LessonAction::Advance => {
                if let Err(e) = self.nav.advance(self.store) {
                    warn!("advance rejected: {}", e);
                }
            }
            LessonAction::Retreat => self.nav.retreat(),
        }
    }

    fn copy_to_clipboard(&mut self, text: String) {
        match self.clipboard.as_mut() {
            Some(clipboard) => {
                if let Err(e) = clipboard.set_text(text) {
                    warn!("clipboard copy failed: {}", e);
                }
            }
            None => warn!("clipboard unavailable, copy ignored"),
        }
    }

    fn submit_chat_question(&mut self, question: String) {
        let context = match LessonContext::capture(self.store, self.nav.active()) {
            Ok(context) => context,
            Err(e) => {
                // Active refs are validated on every transition, so a
                // miss here means the store changed under us
                error!("failed to capture lesson context: {}", e);
                return;
            }
        };

        let prior = self.chat_panel.messages().to_vec();
        self.chat_panel.begin_request(question.clone());

        let request = AsyncRequest::AskAssistant {
            question,
            context,
            prior,
        };
        if self.async_tx.send(request).is_err() {
            error!("async request loop is gone");
            self.chat_panel.deliver_failure();
        }
    }

    fn status_bar(&self, ui: &mut egui::Ui, palette: &Palette) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("🛡 SecLearn")
                    .strong()
                    .color(palette.accent.color32()),
            );
            ui.separator();
            ui.label(
                egui::RichText::new(format!(
                    "{} / {} lessons complete",
                    self.nav.completed_count(),
                    self.store.total_lessons()
                ))
                .size(12.0)
                .color(palette.text_dim.color32()),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("v{}", crate::VERSION))
                        .size(11.0)
                        .color(palette.text_dim.color32()),
                );
            });
        });
    }

    fn tab_bar(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        ui.horizontal(|ui| {
            for tab in Tab::ALL {
                let selected = self.active_tab == tab;
                let text = egui::RichText::new(tab.label()).size(13.0).color(
                    if selected {
                        palette.accent.color32()
                    } else {
                        palette.text_dim.color32()
                    },
                );
                if ui.selectable_label(selected, text).clicked() {
                    self.active_tab = tab;
                }
            }
        });
    }

    fn central_content(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        match self.active_tab {
            Tab::Lesson => {
                if let Some(action) = self.lesson_view.show(ui, self.store, &self.nav, palette)
                {
                    self.apply_lesson_action(action);
                }
            }
            Tab::Syntax => {
                let lesson = match self.store.lesson_at(self.nav.active()) {
                    Ok(lesson) => lesson,
                    Err(e) => {
                        warn!("syntax view lookup failed: {}", e);
                        return;
                    }
                };
                if let Some(SyntaxAction::CopyText(text)) =
                    self.syntax_view.show(ui, lesson, palette)
                {
                    self.copy_to_clipboard(text);
                }
            }
            Tab::Terminal => {
                let suggested = self
                    .store
                    .lesson_at(self.nav.active())
                    .map(|lesson| lesson.commands.clone())
                    .unwrap_or_default();
                self.terminal_view
                    .show(ui, &mut self.session, &suggested, palette);
            }
        }
    }
}

impl eframe::App for SecLearnApp {
    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        let ctx = ui.ctx().clone();
        let ctx = &ctx;
        self.poll_async_results();

        if let Some(shortcut) = input::detect(ctx) {
            match shortcut {
                Shortcut::NextLesson => self.apply_lesson_action(LessonAction::Advance),
                Shortcut::PrevLesson => self.apply_lesson_action(LessonAction::Retreat),
                Shortcut::SwitchTab(tab) => self.active_tab = tab,
            }
        }

        let palette = self.runtime_config.theme_manager().palette().clone();
        ui::apply_theme(ctx, &palette);

        egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
            self.status_bar(ui, &palette);
        });

        egui::SidePanel::left("sidebar")
            .resizable(true)
            .default_width(self.runtime_config.config().ui.sidebar_width)
            .show(ctx, |ui| {
                if let Some(action) = self.sidebar.show(ui, self.store, &self.nav, &palette) {
                    self.apply_sidebar_action(action);
                }
            });

        egui::SidePanel::right("chat_panel")
            .resizable(true)
            .default_width(self.runtime_config.config().ui.chat_panel_width)
            .show(ctx, |ui| {
                if let Some(question) = self.chat_panel.show(ui, &palette) {
                    self.submit_chat_question(question);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.tab_bar(ui, &palette);
            ui.separator();
            self.central_content(ui, &palette);
        });

        // Keep animating while a reveal or request is pending
        let revealing = self.chat_panel.tick_reveal(Instant::now());
        if revealing || self.chat_panel.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}
