use super::DialogContent;
use crate::helpers::{Answer, AnswerRecord, AppState, CompletedTest, Question, Test};
use chrono::Utc;

/// Take-a-test flow: pick a test, answer its questions one at a time, then
/// land on a score summary. Finished runs go onto the completed list the
/// review browser reads.
#[derive(Default)]
pub struct TestPicker {
    run: Option<TestRun>,
}

struct TestRun {
    test: Test,
    index: usize,
    records: Vec<AnswerRecord>,
    number_entry: String,
    choice_entry: usize,
    entry_error: bool,
    recorded: bool,
}

impl TestRun {
    fn new(test: Test) -> Self {
        Self {
            test,
            index: 0,
            records: Vec::new(),
            number_entry: "".to_string(),
            choice_entry: 0,
            entry_error: false,
            recorded: false,
        }
    }

    fn finished(&self) -> bool {
        self.index >= self.test.len()
    }

    /// Grade the current entry and move on. A malformed entry only flags
    /// the form; nothing is recorded for it.
    fn submit(&mut self) {
        let question = &self.test.questions[self.index];
        let (answer, given) = match question {
            Question::Arithmetic { .. } => match self.number_entry.trim().parse::<i64>() {
                Ok(n) => (Answer::Number(n), n.to_string()),
                Err(_) => {
                    self.entry_error = true;
                    return;
                }
            },
            Question::MultipleChoice { choices, .. } => match choices.get(self.choice_entry) {
                Some(text) => (Answer::Choice(self.choice_entry), text.clone()),
                None => {
                    self.entry_error = true;
                    return;
                }
            },
        };

        self.records.push(AnswerRecord {
            prompt: question.prompt(),
            given,
            correct: question.grade(&answer),
        });
        self.index += 1;
        self.number_entry.clear();
        self.choice_entry = 0;
        self.entry_error = false;
    }

    fn completed(&self) -> CompletedTest {
        CompletedTest {
            test_name: self.test.name.clone(),
            taken: Utc::now(),
            records: self.records.clone(),
        }
    }
}

impl DialogContent for TestPicker {
    fn title(&self) -> &'static str {
        "Take a Test"
    }

    fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        let mut keep_open = true;
        let mut abandon = false;

        match &mut self.run {
            None => {
                if state.tests.is_empty() {
                    ui.label("No tests assembled yet.");
                }
                let mut start: Option<Test> = None;
                for test in &state.tests.items {
                    ui.horizontal(|ui| {
                        ui.label(format!("{} ({} question(s))", test.name, test.len()));
                        if ui.button("Start").clicked() {
                            start = Some(test.clone());
                        }
                    });
                }
                if let Some(test) = start {
                    log::debug!("Starting test {}", test.name);
                    self.run = Some(TestRun::new(test));
                }
                ui.separator();
                if ui.button("Close").clicked() {
                    keep_open = false;
                }
            }
            Some(run) if !run.finished() => {
                ui.label(format!("Question {} of {}", run.index + 1, run.test.len()));
                let question = &run.test.questions[run.index];
                ui.strong(question.prompt());
                match question {
                    Question::Arithmetic { .. } => {
                        ui.horizontal(|ui| {
                            ui.label("Answer:");
                            ui.text_edit_singleline(&mut run.number_entry);
                        });
                    }
                    Question::MultipleChoice { choices, .. } => {
                        for (i, choice) in choices.iter().enumerate() {
                            ui.radio_value(&mut run.choice_entry, i, choice.as_str());
                        }
                    }
                }
                if run.entry_error {
                    ui.colored_label(egui::Color32::LIGHT_RED, "Enter a whole number.");
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Submit answer").clicked() {
                        run.submit();
                    }
                    if ui.button("Abandon").clicked() {
                        abandon = true;
                    }
                });
            }
            Some(run) => {
                if !run.recorded {
                    state.record_completed(run.completed());
                    run.recorded = true;
                }
                let correct = run.records.iter().filter(|record| record.correct).count();
                ui.strong(format!(
                    "{}: {} of {} correct",
                    run.test.name,
                    correct,
                    run.records.len()
                ));
                for record in &run.records {
                    let mark = if record.correct { "✔" } else { "✘" };
                    ui.label(format!("{} {} (answered {})", mark, record.prompt, record.given));
                }
                ui.separator();
                if ui.button("Done").clicked() {
                    keep_open = false;
                }
            }
        }

        if abandon {
            log::debug!("Abandoning the current run");
            self.run = None;
        }

        keep_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::Operator;

    fn two_question_test() -> Test {
        Test {
            name: "Midterm".to_string(),
            questions: vec![
                Question::Arithmetic {
                    lhs: 1,
                    op: Operator::Add,
                    rhs: 2,
                },
                Question::MultipleChoice {
                    prompt: "Pick b".to_string(),
                    choices: vec!["a".to_string(), "b".to_string()],
                    correct: 1,
                },
            ],
        }
    }

    #[test]
    fn submit_grades_and_advances() {
        let mut run = TestRun::new(two_question_test());
        run.number_entry = "3".to_string();
        run.submit();
        assert_eq!(run.index, 1);
        assert!(run.records[0].correct);

        run.choice_entry = 0;
        run.submit();
        assert!(run.finished());
        assert!(!run.records[1].correct);
        assert_eq!(run.records[1].given, "a");
    }

    #[test]
    fn malformed_entry_is_flagged_and_not_recorded() {
        let mut run = TestRun::new(two_question_test());
        run.number_entry = "three".to_string();
        run.submit();
        assert!(run.entry_error);
        assert_eq!(run.index, 0);
        assert!(run.records.is_empty());
    }

    #[test]
    fn completed_run_scores_itself() {
        let mut run = TestRun::new(two_question_test());
        run.number_entry = "3".to_string();
        run.submit();
        run.choice_entry = 1;
        run.submit();
        let completed = run.completed();
        assert_eq!(completed.test_name, "Midterm");
        assert_eq!(completed.correct(), 2);
        assert_eq!(completed.total(), 2);
        assert_eq!(completed.percent(), 100);
    }
}
