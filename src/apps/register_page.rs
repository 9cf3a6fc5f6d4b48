use crate::components::password;
use crate::helpers::router::NavEvent;
use crate::helpers::AppState;
use email_address::*;
use regex::Regex;
use std::sync::OnceLock;

fn username_pattern() -> &'static Regex {
    static USERNAME: OnceLock<Regex> = OnceLock::new();
    USERNAME.get_or_init(|| Regex::new("^[A-Za-z0-9_]{3,20}$").unwrap())
}

/// Account creation form. Everything is checked locally before a request
/// goes out; the server still has the final say.
#[derive(Default)]
pub struct RegisterPage {
    username: String,
    email: String,
    password: String,
    confirm: String,
    error: Option<String>,
}

impl RegisterPage {
    fn validate(&self) -> Result<(), String> {
        if !username_pattern().is_match(self.username.trim()) {
            return Err("Usernames are 3-20 letters, digits or underscores.".to_string());
        }
        if !EmailAddress::is_valid(self.email.trim()) {
            return Err("That email address does not look right.".to_string());
        }
        if self.password.len() < 8 {
            return Err("Passwords need at least 8 characters.".to_string());
        }
        if self.password != self.confirm {
            return Err("The passwords do not match.".to_string());
        }
        Ok(())
    }
}

impl super::Page for RegisterPage {
    fn name(&self) -> &'static str {
        "📝 Register"
    }

    fn ui(&mut self, ui: &mut egui::Ui, _state: &mut AppState) -> Option<NavEvent> {
        let mut event = None;

        ui.heading("Create an account");
        ui.add_space(8.0);

        egui::Grid::new("register_grid")
            .num_columns(2)
            .spacing([20.0, 4.0])
            .striped(false)
            .show(ui, |ui| {
                ui.label("Username:");
                ui.text_edit_singleline(&mut self.username);
                ui.end_row();

                ui.label("Email:");
                ui.text_edit_singleline(&mut self.email);
                ui.end_row();

                ui.label("Password:");
                ui.add(password::password(&mut self.password));
                ui.end_row();

                ui.label("Confirm password:");
                ui.add(password::password(&mut self.confirm));
                ui.end_row();
            });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Register").clicked() {
                match self.validate() {
                    Ok(()) => {
                        self.error = None;
                        event = Some(NavEvent::RegisterSubmitted {
                            username: self.username.trim().to_string(),
                            email: self.email.trim().to_string(),
                            password: self.password.clone(),
                        });
                    }
                    Err(reason) => self.error = Some(reason),
                }
            }
            if ui.button("Back to login").clicked() {
                event = Some(NavEvent::ShowLogin);
            }
        });

        if let Some(error) = &self.error {
            ui.colored_label(egui::Color32::LIGHT_RED, error);
        }

        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegisterPage {
        RegisterPage {
            username: "quizzer_1".to_string(),
            email: "quizzer@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            confirm: "hunter2hunter2".to_string(),
            error: None,
        }
    }

    #[test]
    fn a_filled_form_validates() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn usernames_are_constrained() {
        let mut page = filled();
        page.username = "ab".to_string();
        assert!(page.validate().is_err());
        page.username = "has spaces".to_string();
        assert!(page.validate().is_err());
    }

    #[test]
    fn email_addresses_are_checked() {
        let mut page = filled();
        page.email = "not-an-address".to_string();
        assert!(page.validate().is_err());
    }

    #[test]
    fn short_passwords_are_rejected() {
        let mut page = filled();
        page.password = "short".to_string();
        page.confirm = "short".to_string();
        assert!(page.validate().is_err());
    }

    #[test]
    fn passwords_must_match() {
        let mut page = filled();
        page.confirm = "different-password".to_string();
        assert!(page.validate().is_err());
    }
}
