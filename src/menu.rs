#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use quizsmith::apps::dialogs::{DialogHost, DialogRegistry, MenuAction};
use quizsmith::helpers::AppState;

/// The quiz menu on its own: one window of buttons, each opening its
/// authoring dialog, with no login or server behind it.
#[derive(Default)]
struct MenuApp {
    state: AppState,
    registry: DialogRegistry,
    host: DialogHost,
}

impl eframe::App for MenuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Quiz Main Menu");
            ui.add_space(8.0);
            for action in MenuAction::iter() {
                if ui.button(action.to_string()).clicked() {
                    self.host.open(*action, &self.registry);
                }
            }
        });

        self.host.show(ctx, &mut self.state);
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        initial_window_size: Some([420.0, 340.0].into()),
        ..Default::default()
    };
    eframe::run_native(
        "Quiz Main Menu",
        native_options,
        Box::new(|_cc| Box::new(MenuApp::default())),
    )
}
