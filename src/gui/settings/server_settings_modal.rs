use eframe::egui;

use super::data::{
    ServerSettings,
    SettingsData,
    MAX_TIMEOUT_SECS,
    MIN_TIMEOUT_SECS,
};

#[derive(Clone, Default)]
pub struct ServerSettingsData {
    pub settings: SettingsData,
    pub original_settings: SettingsData,
}

impl ServerSettingsData {
    pub fn is_dirty(&self) -> bool {
        self.settings != self.original_settings
    }
}

pub struct ServerSettingsModal {
    open: bool,
    data: ServerSettingsData,
    url_error: Option<String>,
}

impl ServerSettingsModal {
    pub fn new() -> Self {
        Self { open: false, data: ServerSettingsData::default(), url_error: None }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.data.settings = current_settings.clone();
        self.data.original_settings = current_settings;
        self.url_error = None;
        self.open = true;
    }

    /// Returns the new settings when the user saves a valid configuration.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        let modal = egui::Modal::new(egui::Id::new("server_settings_modal")).show(ctx, |ui| {
            ui.set_width(420.0);
            ui.heading("Prediction Server Settings");
            ui.add_space(10.0);

            self.ui_server_configuration(ui);
            ui.add_space(10.0);

            ui.checkbox(
                &mut self.data.settings.strict_numeric_input,
                "Only accept numeric values in form fields",
            );
            ui.add_space(10.0);

            if let Some(error) = &self.url_error {
                ui.colored_label(egui::Color32::RED, format!("⚠ {error}"));
                ui.add_space(5.0);
            }

            ui.separator();

            let is_dirty = self.data.is_dirty();

            ui.horizontal(|ui| {
                if is_dirty {
                    ui.colored_label(egui::Color32::YELLOW, "⚠");
                    ui.label("Settings have been modified");
                } else {
                    ui.colored_label(egui::Color32::TRANSPARENT, "⚠");
                    ui.label("");
                }
            });

            ui.add_space(5.0);

            ui.horizontal(|ui| {
                let save_clicked =
                    ui.add_enabled(is_dirty, egui::Button::new("Save Settings")).clicked();
                let cancel_clicked = ui.button("Cancel").clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_clicked = ui.button("Restore Default").clicked();
                });

                if save_clicked {
                    match self.data.settings.server.parsed_base_url() {
                        Ok(_) => {
                            self.data.settings.server.base_url =
                                self.data.settings.server.base_url.trim().to_string();
                            self.data.original_settings = self.data.settings.clone();
                            self.url_error = None;
                            result = Some(self.data.settings.clone());
                            ui.close();
                        }
                        Err(e) => {
                            self.url_error = Some(e.to_string());
                        }
                    }
                } else if cancel_clicked {
                    self.data.settings = self.data.original_settings.clone();
                    self.url_error = None;
                    ui.close();
                } else if reset_clicked {
                    self.data.settings.server = ServerSettings::default();
                    self.data.settings.strict_numeric_input = true;
                    self.url_error = None;
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }

    fn ui_server_configuration(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("server_settings_grid").num_columns(2).spacing([12.0, 8.0]).show(
            ui,
            |ui| {
                ui.label("Server URL:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.data.settings.server.base_url)
                        .hint_text("http://localhost:8000")
                        .desired_width(260.0),
                );
                if response.changed() {
                    self.url_error = None;
                }
                ui.end_row();

                ui.label("Request Timeout:");
                ui.add(
                    egui::DragValue::new(&mut self.data.settings.server.timeout_secs)
                        .speed(1.0)
                        .range(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS)
                        .suffix(" s"),
                );
                ui.end_row();
            },
        );
    }
}

impl Default for ServerSettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
