use super::DialogContent;
use crate::helpers::{AppState, Test};

/// Assembles a named test from bank questions. Saving again under the same
/// name replaces the earlier version; tests already taken keep the
/// questions they were taken with.
#[derive(Default)]
pub struct TestBuilder {
    name: String,
    selected: Vec<bool>,
    error: Option<String>,
    last_saved: Option<String>,
}

impl TestBuilder {
    fn save(&mut self, state: &mut AppState) {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            self.error = Some("Give the test a name.".to_string());
            return;
        }
        let questions: Vec<_> = state
            .bank
            .items
            .iter()
            .zip(&self.selected)
            .filter(|(_, picked)| **picked)
            .map(|(question, _)| question.clone())
            .collect();
        if questions.is_empty() {
            self.error = Some("Pick at least one question.".to_string());
            return;
        }

        let count = questions.len();
        log::debug!("Saving test {} with {} questions", name, count);
        state.tests.upsert(Test {
            name: name.clone(),
            questions,
        });
        self.error = None;
        self.last_saved = Some(format!("Saved {} with {} question(s).", name, count));
    }
}

impl DialogContent for TestBuilder {
    fn title(&self) -> &'static str {
        "Assemble a Test"
    }

    fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        let mut keep_open = true;
        self.selected.resize(state.bank.len(), false);

        ui.horizontal(|ui| {
            ui.label("Test name:");
            ui.text_edit_singleline(&mut self.name);
        });
        ui.separator();

        if state.bank.is_empty() {
            ui.label("The question bank is empty. Author some questions first.");
        } else {
            egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                for (i, question) in state.bank.items.iter().enumerate() {
                    ui.checkbox(&mut self.selected[i], question.prompt());
                }
            });
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Save test").clicked() {
                self.save(state);
            }
            if ui.button("Done").clicked() {
                keep_open = false;
            }
        });

        if let Some(error) = &self.error {
            ui.colored_label(egui::Color32::LIGHT_RED, error);
        }
        if let Some(saved) = &self.last_saved {
            ui.label(saved.clone());
        }

        keep_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::{Operator, Question};

    fn state_with_bank() -> AppState {
        let mut state = AppState::default();
        state.bank.add(Question::Arithmetic {
            lhs: 1,
            op: Operator::Add,
            rhs: 2,
        });
        state.bank.add(Question::Arithmetic {
            lhs: 6,
            op: Operator::Divide,
            rhs: 3,
        });
        state
    }

    #[test]
    fn save_requires_a_name_and_a_selection() {
        let mut state = state_with_bank();
        let mut builder = TestBuilder {
            selected: vec![true, false],
            ..Default::default()
        };
        builder.save(&mut state);
        assert!(builder.error.is_some());

        builder.name = "Midterm".to_string();
        builder.selected = vec![false, false];
        builder.save(&mut state);
        assert!(builder.error.is_some());
        assert!(state.tests.is_empty());
    }

    #[test]
    fn save_collects_only_the_picked_questions() {
        let mut state = state_with_bank();
        let mut builder = TestBuilder {
            name: "Midterm".to_string(),
            selected: vec![false, true],
            ..Default::default()
        };
        builder.save(&mut state);
        assert_eq!(state.tests.len(), 1);
        assert_eq!(state.tests.items[0].name, "Midterm");
        assert_eq!(state.tests.items[0].questions.len(), 1);
        assert_eq!(state.tests.items[0].questions[0].prompt(), "What is 6 ÷ 3?");
    }

    #[test]
    fn saving_the_same_name_replaces_the_test() {
        let mut state = state_with_bank();
        let mut builder = TestBuilder {
            name: "Midterm".to_string(),
            selected: vec![true, true],
            ..Default::default()
        };
        builder.save(&mut state);
        builder.selected = vec![true, false];
        builder.save(&mut state);
        assert_eq!(state.tests.len(), 1);
        assert_eq!(state.tests.items[0].questions.len(), 1);
    }
}
