use crate::helpers::backend::Profile;
use crate::helpers::router::{NavEvent, Router};
use crate::helpers::AppState;

/// Read-only view of the profile the router fetched on entry.
#[derive(Default)]
pub struct ProfilePage {
    profile: Option<Profile>,
}

impl super::EntrySync for ProfilePage {
    fn sync_entry(&mut self, router: &Router) {
        self.profile = router.profile().cloned();
    }
}

impl super::Page for ProfilePage {
    fn name(&self) -> &'static str {
        "👤 Profile"
    }

    fn ui(&mut self, ui: &mut egui::Ui, _state: &mut AppState) -> Option<NavEvent> {
        let mut event = None;

        match &self.profile {
            Some(profile) => {
                ui.heading(format!("Profile of {}", profile.username));
                ui.add_space(8.0);

                egui::Grid::new("profile_grid")
                    .num_columns(2)
                    .spacing([20.0, 4.0])
                    .striped(false)
                    .show(ui, |ui| {
                        ui.label("Username:");
                        ui.label(&profile.username);
                        ui.end_row();

                        ui.label("Email:");
                        ui.label(&profile.email);
                        ui.end_row();

                        ui.label("Joined:");
                        ui.label(&profile.joined);
                        ui.end_row();

                        ui.label("Tests taken:");
                        ui.label(profile.tests_taken.to_string());
                        ui.end_row();

                        ui.label("Average score:");
                        ui.label(format!("{:.1}%", profile.average_score));
                        ui.end_row();
                    });
            }
            None => {
                ui.label("No profile loaded.");
            }
        }

        ui.separator();
        if ui.button("Back to dashboard").clicked() {
            event = Some(NavEvent::ShowDashboard);
        }

        event
    }
}
