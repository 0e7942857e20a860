use anyhow::{Context as _, Result};
use patterns::PatternCatalog;
use serde::{Deserialize, Serialize};
use storage::Storage;

use crate::boundary::{self, ui_error_boundary, ErrorReport};
use crate::config::StudioPaths;
use crate::logging;
use crate::routing::{self, ViewId};
use crate::session::SessionState;
use crate::ui;

pub const SETTINGS_STORAGE_KEY: &str = "pattern_studio_settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

/// What survives process restarts: cosmetic preferences plus the last view
/// as a raw label, validated on restore.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedStudioSettings {
    #[serde(default)]
    pub theme: ThemePreference,
    #[serde(default)]
    pub last_view: Option<String>,
}

/// The orchestrator. Owns the session, the collaborators and the fatal
/// latch; each `update` is one interaction cycle.
pub struct StudioApp {
    paths: StudioPaths,
    storage: Storage,
    catalog: PatternCatalog,
    session: SessionState,
    theme: ThemePreference,
    page_configured: bool,
    fatal: Option<ErrorReport>,
}

impl StudioApp {
    pub fn new(paths: StudioPaths, persisted: Option<PersistedStudioSettings>) -> Self {
        let settings = persisted.unwrap_or_default();
        let storage = Storage::new(&paths.config_dir);
        let catalog = PatternCatalog::new(&paths.patterns_dir);

        let mut session = SessionState::new();
        if let Some(raw) = settings.last_view.as_deref() {
            routing::set_view(&mut session, routing::resolve_or_default(raw));
        }

        Self {
            paths,
            storage,
            catalog,
            session,
            theme: settings.theme,
            page_configured: false,
            fatal: None,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    pub fn is_halted(&self) -> bool {
        self.fatal.is_some()
    }

    /// Escalation point for orchestrator-level failures; per-view errors
    /// never reach this.
    pub fn handle_fatal(&mut self, err: anyhow::Error) {
        self.fatal = Some(boundary::fatal_report(&err));
    }

    /// One interaction cycle. Separate from `eframe::App::update` so tests
    /// can drive cycles against a bare `egui::Context`.
    pub fn run_frame(&mut self, ctx: &egui::Context) {
        if let Some(report) = self.fatal.clone() {
            self.render_fatal_surface(ctx, &report);
            return;
        }
        if let Err(err) = self.run_cycle(ctx) {
            let report = boundary::fatal_report(&err);
            self.fatal = Some(report.clone());
            self.render_fatal_surface(ctx, &report);
        }
    }

    fn run_cycle(&mut self, ctx: &egui::Context) -> Result<()> {
        logging::init(&self.paths.log_dir).context("failed to initialize the logging sink")?;
        self.configure_page(ctx);
        self.session.initialize(&self.storage);

        ui::header::render(ctx);
        ui::sidebar::render(ctx, &mut self.session);
        self.render_current_view(ctx);
        Ok(())
    }

    /// Static page-level configuration, applied once per process.
    fn configure_page(&mut self, ctx: &egui::Context) {
        if self.page_configured {
            return;
        }
        let mut style = (*ctx.style()).clone();
        style.visuals = match self.theme {
            ThemePreference::Dark => egui::Visuals::dark(),
            ThemePreference::Light => egui::Visuals::light(),
        };
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        ctx.set_style(style);
        self.page_configured = true;
    }

    fn render_current_view(&mut self, ctx: &egui::Context) {
        let view = routing::current_view(&self.session);
        let session = &mut self.session;
        let catalog = &self.catalog;
        let storage = &self.storage;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match view {
                    ViewId::Execution => {
                        let _ = ui_error_boundary("execution", ui, |ui| {
                            ui::views::execution::render(ui, session, catalog, storage)
                        });
                    }
                    ViewId::Management => {
                        let _ = ui_error_boundary("management", ui, |ui| {
                            ui::views::management::render(ui, session, catalog)
                        });
                    }
                    ViewId::Dashboard => {
                        let _ = ui_error_boundary("dashboard", ui, |ui| {
                            ui::views::dashboard::render(ui, session)
                        });
                    }
                });
        });
    }

    fn render_fatal_surface(&self, ctx: &egui::Context, report: &ErrorReport) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(24.0);
            ui.colored_label(
                ui.visuals().error_fg_color,
                "Critical error — the studio cannot continue.",
            );
            ui.label("Nothing else will render. Check the log file and restart.");
            if let Some(path) = logging::log_file_path() {
                ui.weak(format!("log file: {}", path.display()));
            }
            ui.collapsing("Error details", |ui| {
                ui.monospace(&report.detail);
            });
        });
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedStudioSettings {
            theme: self.theme,
            last_view: Some(routing::current_view(&self.session).label().to_string()),
        };
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
