use crate::components::password;
use crate::helpers::router::NavEvent;
use crate::helpers::AppState;

/// Username/password form. The username survives restarts; the password
/// never does.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct LoginPage {
    username: String,
    #[serde(skip)]
    password: String,
}

impl Default for LoginPage {
    fn default() -> Self {
        Self {
            username: "".to_string(),
            password: "".to_string(),
        }
    }
}

impl super::Page for LoginPage {
    fn name(&self) -> &'static str {
        "🔐 Login"
    }

    fn ui(&mut self, ui: &mut egui::Ui, _state: &mut AppState) -> Option<NavEvent> {
        let mut event = None;

        ui.heading("Log in");
        ui.add_space(8.0);

        egui::Grid::new("login_grid")
            .num_columns(2)
            .spacing([20.0, 4.0])
            .striped(false)
            .show(ui, |ui| {
                ui.label("Username:");
                ui.text_edit_singleline(&mut self.username);
                ui.end_row();

                ui.label("Password:");
                ui.add(password::password(&mut self.password));
                ui.end_row();
            });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Login").clicked() {
                event = Some(NavEvent::LoginSubmitted {
                    username: self.username.trim().to_string(),
                    password: self.password.clone(),
                });
            }
            if ui.button("Register").clicked() {
                event = Some(NavEvent::ShowRegister);
            }
        });

        event
    }
}
