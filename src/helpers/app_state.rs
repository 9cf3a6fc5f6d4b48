use crate::helpers::{CompletedTest, QuestionBank, TestCollection};

/// Authoring data shared between the menu dialogs. The application shell
/// owns it and lends it to whichever page or dialog is drawing; nothing
/// here is written to disk.
#[derive(Default)]
pub struct AppState {
    pub bank: QuestionBank,
    pub tests: TestCollection,
    pub completed: Vec<CompletedTest>,
}

impl AppState {
    pub fn record_completed(&mut self, done: CompletedTest) {
        log::debug!("Recording completed test: {}", done);
        self.completed.push(done);
    }
}
