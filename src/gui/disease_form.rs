use eframe::egui;

use crate::{
    core::{
        diseases::Disease,
        form::FormController,
    },
    gui::theme::Theme,
};

const FORM_WIDTH: f32 = 480.0;

pub enum FormAction {
    Submit,
}

pub fn disease_form(
    ctx: &egui::Context,
    form: &mut FormController,
    theme: &Theme,
) -> Option<FormAction> {
    let mut action = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.label(egui::RichText::new("Health Assistant").size(28.0).strong());
                ui.add_space(16.0);

                ui_disease_selector(ui, form);
                ui.add_space(12.0);

                egui::Frame::new()
                    .fill(theme.card(ui.ctx()))
                    .corner_radius(8.0)
                    .inner_margin(20.0)
                    .show(ui, |ui| {
                        ui.set_width(FORM_WIDTH);
                        ui.label(theme.heading(ui.ctx(), form.title()).size(20.0));
                        ui.add_space(10.0);

                        if ui_fields(ui, form, theme) {
                            action = Some(FormAction::Submit);
                        }

                        ui.add_space(10.0);
                        if ui_submit_button(ui, form) {
                            action = Some(FormAction::Submit);
                        }

                        ui_result(ui, form, theme);
                    });

                ui.add_space(16.0);
            });
        });
    });

    action
}

fn ui_disease_selector(ui: &mut egui::Ui, form: &mut FormController) {
    ui.label(egui::RichText::new("Select a Disease:").size(16.0));
    ui.add_space(4.0);

    let mut selected = form.selected();
    egui::ComboBox::from_id_salt("disease_select")
        .selected_text(selected.label())
        .width(256.0)
        .show_ui(ui, |ui| {
            for disease in Disease::ALL {
                ui.selectable_value(&mut selected, disease, disease.label());
            }
        });

    if selected != form.selected() {
        form.select_disease(selected);
    }
}

/// Draws one input per configured field. Returns true when Enter was pressed in a field.
fn ui_fields(ui: &mut egui::Ui, form: &mut FormController, theme: &Theme) -> bool {
    let mut submit = false;

    for &field in form.fields() {
        let mut value = form.field_value(field).to_string();

        let response = ui.add(
            egui::TextEdit::singleline(&mut value)
                .id_salt(("field", field))
                .hint_text(field)
                .desired_width(f32::INFINITY)
                .interactive(!form.is_loading()),
        );

        if response.changed() {
            form.update_field(field, value);
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        if let Some(error) = form.field_error(field) {
            ui.label(egui::RichText::new(error.to_string()).small().color(theme.red(ui.ctx())));
        }

        ui.add_space(4.0);
    }

    submit
}

fn ui_submit_button(ui: &mut egui::Ui, form: &FormController) -> bool {
    let loading = form.is_loading();

    let button = egui::Button::new(egui::RichText::new(form.submit_label()).size(16.0))
        .min_size(egui::vec2(ui.available_width(), 32.0));

    let clicked = ui.add_enabled(!loading, button).clicked();

    if loading {
        ui.add_space(6.0);
        ui.add(egui::Spinner::new());
    }

    clicked
}

fn ui_result(ui: &mut egui::Ui, form: &FormController, theme: &Theme) {
    let Some(result) = form.result() else {
        return;
    };

    if result.text().is_empty() {
        return;
    }

    let color = if result.is_failure() { theme.red(ui.ctx()) } else { theme.accent(ui.ctx()) };

    ui.add_space(12.0);
    ui.label(egui::RichText::new(result.text()).size(18.0).strong().color(color));
}
