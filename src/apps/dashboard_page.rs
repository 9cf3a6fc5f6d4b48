use crate::helpers::router::{NavEvent, Router};
use crate::helpers::AppState;

/// Landing page after login: a greeting, the authoring tallies, and
/// buttons into the rest of the application.
#[derive(Default)]
pub struct DashboardPage {
    username: String,
}

impl super::EntrySync for DashboardPage {
    fn sync_entry(&mut self, router: &Router) {
        self.username = router.session().username().unwrap_or_default().to_string();
    }
}

impl super::Page for DashboardPage {
    fn name(&self) -> &'static str {
        "🏠 Dashboard"
    }

    fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState) -> Option<NavEvent> {
        let mut event = None;

        ui.heading(format!("Welcome, {}!", self.username));
        ui.add_space(8.0);

        egui::Grid::new("dashboard_grid")
            .num_columns(2)
            .spacing([20.0, 4.0])
            .striped(false)
            .show(ui, |ui| {
                ui.label("Questions in the bank:");
                ui.label(state.bank.len().to_string());
                ui.end_row();

                ui.label("Assembled tests:");
                ui.label(state.tests.len().to_string());
                ui.end_row();

                ui.label("Tests taken:");
                ui.label(state.completed.len().to_string());
                ui.end_row();

                if !state.completed.is_empty() {
                    let average = state
                        .completed
                        .iter()
                        .map(|completed| completed.percent())
                        .sum::<u32>()
                        / state.completed.len() as u32;
                    ui.label("Average score:");
                    ui.label(format!("{}%", average));
                    ui.end_row();
                }
            });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Quiz menu").clicked() {
                event = Some(NavEvent::ShowQuizMenu);
            }
            if ui.button("My profile").clicked() {
                event = Some(NavEvent::ShowProfile);
            }
            if ui.button("Log out").clicked() {
                event = Some(NavEvent::Logout);
            }
        });

        event
    }
}
