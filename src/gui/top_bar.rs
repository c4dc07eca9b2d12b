use eframe::egui::{
    self,
    containers,
};

use crate::{
    core::tasks::ServerStatus,
    gui::theme::Theme,
};

pub enum TopBarAction {
    OpenServerSettings,
    RecheckServer,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        theme: &Theme,
        server_status: Option<&ServerStatus>,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Server Settings").clicked() {
                        action = Some(TopBarAction::OpenServerSettings);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if Self::show_server_indicator(ui, theme, server_status) {
                        action = Some(TopBarAction::RecheckServer);
                    }
                });
            });
        });

        action
    }

    /// Returns true when the indicator was clicked.
    fn show_server_indicator(
        ui: &mut egui::Ui,
        theme: &Theme,
        server_status: Option<&ServerStatus>,
    ) -> bool {
        let (color, tooltip) = match server_status {
            Some(ServerStatus::Online(message)) => {
                (theme.green(ui.ctx()), format!("Prediction server online: {message}"))
            }
            Some(ServerStatus::Offline(reason)) => {
                (theme.red(ui.ctx()), format!("Prediction server unreachable: {reason}"))
            }
            None => (theme.muted(ui.ctx()), "Checking prediction server...".to_string()),
        };

        let mut clicked = false;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            let dot = egui::Label::new(egui::RichText::new("●").small().color(color))
                .sense(egui::Sense::click());
            let label = egui::Label::new(egui::RichText::new("Server").small())
                .sense(egui::Sense::click());

            clicked |= ui.add(dot).on_hover_text(&tooltip).clicked();
            clicked |= ui.add(label).on_hover_text(&tooltip).clicked();
        });
        clicked
    }
}
