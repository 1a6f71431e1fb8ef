// Smart Planner Application
// Main entry point

use smart_planner::ui_egui::PlannerApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Smart Planner");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Smart Planner",
        options,
        Box::new(|cc| Ok(Box::new(PlannerApp::new(cc)?))),
    )
}
