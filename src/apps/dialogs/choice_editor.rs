use super::DialogContent;
use crate::helpers::{AppState, Question};

/// Authoring form for multiple-choice questions. The radio button marks
/// which choice is the correct one.
pub struct ChoiceEditor {
    prompt: String,
    choices: Vec<String>,
    correct: usize,
    error: Option<String>,
    saved: u32,
}

impl Default for ChoiceEditor {
    fn default() -> Self {
        Self {
            prompt: "".to_string(),
            choices: vec!["".to_string(), "".to_string()],
            correct: 0,
            error: None,
            saved: 0,
        }
    }
}

impl ChoiceEditor {
    fn save(&mut self, state: &mut AppState) {
        let prompt = self.prompt.trim().to_string();
        if prompt.is_empty() {
            self.error = Some("Write a prompt first.".to_string());
            return;
        }
        let choices: Vec<String> = self
            .choices
            .iter()
            .map(|choice| choice.trim().to_string())
            .collect();
        if choices.len() < 2 {
            self.error = Some("A question needs at least two choices.".to_string());
            return;
        }
        if choices.iter().any(|choice| choice.is_empty()) {
            self.error = Some("Every choice needs text.".to_string());
            return;
        }
        if self.correct >= choices.len() {
            self.error = Some("Mark one choice as correct.".to_string());
            return;
        }

        log::debug!("Adding to the bank: {}", prompt);
        state.bank.add(Question::MultipleChoice {
            prompt,
            choices,
            correct: self.correct,
        });
        self.saved += 1;
        self.error = None;
        self.prompt.clear();
        self.choices = vec!["".to_string(), "".to_string()];
        self.correct = 0;
    }
}

impl DialogContent for ChoiceEditor {
    fn title(&self) -> &'static str {
        "New Multiple Choice Question"
    }

    fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        let mut keep_open = true;

        ui.label("Prompt:");
        ui.text_edit_singleline(&mut self.prompt);
        ui.add_space(4.0);
        ui.label("Choices (pick the correct one):");

        let mut remove: Option<usize> = None;
        for (i, choice) in self.choices.iter_mut().enumerate() {
            ui.horizontal(|ui| {
                ui.radio_value(&mut self.correct, i, "");
                ui.text_edit_singleline(choice);
                if ui.button("Remove").clicked() {
                    remove = Some(i);
                }
            });
        }
        if let Some(i) = remove {
            self.choices.remove(i);
            if self.correct >= self.choices.len() {
                self.correct = self.choices.len().saturating_sub(1);
            }
        }
        if ui.button("Add choice").clicked() {
            self.choices.push("".to_string());
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Save question").clicked() {
                self.save(state);
            }
            if ui.button("Done").clicked() {
                keep_open = false;
            }
        });

        if let Some(error) = &self.error {
            ui.colored_label(egui::Color32::LIGHT_RED, error);
        }
        if self.saved > 0 {
            ui.label(format!("{} question(s) added this session.", self.saved));
        }

        keep_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_rejects_an_empty_prompt() {
        let mut editor = ChoiceEditor {
            choices: vec!["red".to_string(), "blue".to_string()],
            ..Default::default()
        };
        let mut state = AppState::default();
        editor.save(&mut state);
        assert!(editor.error.is_some());
        assert!(state.bank.is_empty());
    }

    #[test]
    fn save_rejects_blank_choices() {
        let mut editor = ChoiceEditor {
            prompt: "Favourite colour?".to_string(),
            choices: vec!["red".to_string(), "  ".to_string()],
            ..Default::default()
        };
        let mut state = AppState::default();
        editor.save(&mut state);
        assert!(editor.error.is_some());
        assert!(state.bank.is_empty());
    }

    #[test]
    fn save_adds_the_question_with_its_correct_index() {
        let mut editor = ChoiceEditor {
            prompt: "Favourite colour?".to_string(),
            choices: vec!["red".to_string(), "blue".to_string(), "green".to_string()],
            correct: 2,
            ..Default::default()
        };
        let mut state = AppState::default();
        editor.save(&mut state);
        assert_eq!(state.bank.len(), 1);
        match &state.bank.items[0] {
            Question::MultipleChoice {
                prompt,
                choices,
                correct,
            } => {
                assert_eq!(prompt, "Favourite colour?");
                assert_eq!(choices.len(), 3);
                assert_eq!(*correct, 2);
            }
            other => panic!("unexpected question: {:?}", other),
        }
    }
}
