#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        initial_window_size: Some([800.0, 600.0].into()),
        min_window_size: Some([480.0, 360.0].into()),
        ..Default::default()
    };
    eframe::run_native(
        "QuizSmith",
        native_options,
        Box::new(|cc| Box::new(quizsmith::QuizApp::new(cc))),
    )
}
