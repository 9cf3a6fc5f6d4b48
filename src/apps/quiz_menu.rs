use super::dialogs::{DialogHost, DialogRegistry, MenuAction};
use crate::helpers::router::NavEvent;
use crate::helpers::AppState;

/// The quiz authoring menu: one button per action, each opening its dialog
/// through the shared host.
pub struct QuizMenuPage {
    registry: DialogRegistry,
    host: DialogHost,
}

impl Default for QuizMenuPage {
    fn default() -> Self {
        Self {
            registry: DialogRegistry::standard(),
            host: DialogHost::default(),
        }
    }
}

impl super::Page for QuizMenuPage {
    fn name(&self) -> &'static str {
        "❓ Quiz Menu"
    }

    fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState) -> Option<NavEvent> {
        let mut event = None;

        ui.heading("Quiz Main Menu");
        ui.add_space(8.0);

        ui.vertical(|ui| {
            for action in MenuAction::iter() {
                if ui.button(action.to_string()).clicked() {
                    self.host.open(*action, &self.registry);
                }
            }
        });

        ui.separator();
        if ui.button("Back to dashboard").clicked() {
            self.host.close();
            event = Some(NavEvent::ShowDashboard);
        }

        self.host.show(ui.ctx(), state);

        event
    }
}
