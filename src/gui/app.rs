use std::time::Instant;

use eframe::egui;

use super::{
    disease_form::{
        disease_form,
        FormAction,
    },
    error_modal::ErrorModal,
    settings::{
        ServerSettingsModal,
        SettingsData,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        form::{
            FormController,
            SubmitError,
        },
        server_monitor::{
            ServerMonitor,
            SERVER_CHECK_INTERVAL,
        },
        tasks::{
            TaskManager,
            TaskResult,
        },
        HealthError,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

const SETTINGS_FILE: &str = "settings.json";

pub struct Modals {
    pub error: ErrorModal,
    pub server_settings: ServerSettingsModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self { error: ErrorModal::new(), server_settings: ServerSettingsModal::new() }
    }
}

pub struct HealthAssistantApp {
    // Configuration
    pub settings_data: SettingsData,

    // Form
    pub form: FormController,

    // UI State
    pub theme: Theme,
    pub modals: Modals,

    // External Services
    pub server_monitor: ServerMonitor,
    task_manager: TaskManager,
}

impl HealthAssistantApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, HealthError> {
        let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        let task_manager = TaskManager::new(settings_data.server.timeout())?;

        log::info!("Prediction server: {}", settings_data.server.base_url);

        let app = Self {
            settings_data,
            form: FormController::default(),
            theme: Theme::clinic(),
            modals: Modals::default(),
            server_monitor: ServerMonitor::default(),
            task_manager,
        };

        app.setup_theme(cc);

        Ok(app)
    }

    fn setup_theme(&self, cc: &eframe::CreationContext<'_>) {
        set_theme(&cc.egui_ctx, &self.theme);

        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = if self.settings_data.dark_mode {
                egui::ThemePreference::Dark
            } else {
                egui::ThemePreference::Light
            };
        });
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Prediction { id, result } => {
                if self.form.complete(id, result) {
                    if let Some(outcome) = self.form.result() {
                        log::info!("Prediction request #{id} finished: {}", outcome.text());
                    }
                }
            }
            TaskResult::ServerStatus { id, status } => {
                self.server_monitor.record(id, status);
            }
        }
    }

    fn submit(&mut self, ctx: &egui::Context) {
        let base_url = match self.settings_data.server.parsed_base_url() {
            Ok(url) => url,
            Err(e) => {
                self.modals.error.show_error(
                    "Invalid Server URL",
                    "The configured prediction server URL cannot be used. Update it under Settings.",
                    Some(e.to_string()),
                );
                return;
            }
        };

        match self.form.begin_submit(&base_url, self.settings_data.strict_numeric_input) {
            Ok(request) => self.task_manager.submit_prediction(request, ctx),
            Err(SubmitError::InFlight) => log::debug!("Submit ignored, request still in flight"),
            Err(SubmitError::Invalid(errors)) => {
                log::debug!("Submit blocked by {} invalid field(s)", errors.len());
            }
            Err(SubmitError::Endpoint(e)) => {
                self.modals.error.show_error(
                    "Invalid Endpoint",
                    "Could not build the prediction endpoint from the server URL.",
                    Some(e.to_string()),
                );
            }
        }
    }

    fn update_server_status(&mut self, ctx: &egui::Context, force: bool) {
        let Some(id) = self.server_monitor.begin_check(Instant::now(), force) else {
            return;
        };

        match self.settings_data.server.parsed_base_url() {
            Ok(url) => self.task_manager.check_server(id, url, ctx),
            Err(e) => self.server_monitor.set_offline(e.to_string()),
        }
    }

    fn apply_settings(&mut self, settings: SettingsData, ctx: &egui::Context) {
        let url_changed = settings.server.base_url != self.settings_data.server.base_url;

        let task_manager = &mut self.task_manager;
        let (merged, rebuild_error) = self
            .settings_data
            .merged_with(settings, |timeout| task_manager.rebuild_client(timeout));
        self.settings_data = merged;

        if let Some(e) = rebuild_error {
            self.modals.error.show_error(
                "HTTP Client Error",
                "Failed to apply the new request timeout. The previous timeout is still in use.",
                Some(e.to_string()),
            );
        }

        if url_changed {
            self.server_monitor.reset();
            self.update_server_status(ctx, true);
        }

        self.save_settings();
    }

    fn sync_theme_preference(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.theme() == egui::Theme::Dark;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.save_settings();
        }
    }

    fn save_settings(&mut self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            log::error!("Failed to save settings: {e}");
            self.modals.error.show_error(
                "Settings Error",
                "Your settings could not be saved.",
                Some(e.to_string()),
            );
        }
    }
}

impl eframe::App for HealthAssistantApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.update_server_status(ctx, false);

        if let Some(action) = TopBar::show(ctx, &self.theme, self.server_monitor.status()) {
            match action {
                TopBarAction::OpenServerSettings => {
                    self.modals.server_settings.open_settings(self.settings_data.clone());
                }
                TopBarAction::RecheckServer => self.update_server_status(ctx, true),
            }
        }
        self.sync_theme_preference(ctx);

        if let Some(FormAction::Submit) = disease_form(ctx, &mut self.form, &self.theme) {
            self.submit(ctx);
        }

        if let Some(settings) = self.modals.server_settings.show(ctx) {
            self.apply_settings(settings, ctx);
        }

        self.modals.error.show(ctx);

        // Keep the status indicator fresh without user input.
        ctx.request_repaint_after(SERVER_CHECK_INTERVAL);
    }
}
