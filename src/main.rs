use eframe::egui;
use health_assistant::gui::HealthAssistantApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Health Assistant")
            .with_inner_size([640.0, 820.0])
            .with_min_inner_size([520.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Health Assistant",
        options,
        Box::new(|cc| {
            let app = HealthAssistantApp::new(cc)?;
            Ok(Box::new(app))
        }),
    )
}
