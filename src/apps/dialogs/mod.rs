mod arithmetic_editor;
pub use arithmetic_editor::ArithmeticEditor;
mod choice_editor;
pub use choice_editor::ChoiceEditor;
mod test_builder;
pub use test_builder::TestBuilder;
mod test_picker;
pub use test_picker::TestPicker;
mod review_browser;
pub use review_browser::ReviewBrowser;

use crate::helpers::AppState;
use std::fmt::{self, Display, Formatter};
use std::slice::Iter;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum MenuAction {
    NewArithmeticQuestion,
    NewChoiceQuestion,
    AssembleTest,
    TakeTest,
    ReviewResults,
}

impl MenuAction {
    pub fn iter() -> Iter<'static, MenuAction> {
        static ACTIONS: [MenuAction; 5] = [
            MenuAction::NewArithmeticQuestion,
            MenuAction::NewChoiceQuestion,
            MenuAction::AssembleTest,
            MenuAction::TakeTest,
            MenuAction::ReviewResults,
        ];
        ACTIONS.iter()
    }
}

impl Display for MenuAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::NewArithmeticQuestion => write!(f, "New Arithmetic Question"),
            MenuAction::NewChoiceQuestion => write!(f, "New Multiple Choice Question"),
            MenuAction::AssembleTest => write!(f, "Assemble a Test"),
            MenuAction::TakeTest => write!(f, "Take a Test"),
            MenuAction::ReviewResults => write!(f, "Review Completed Tests"),
        }
    }
}

/// One dialog's inner content. The host owns the window chrome; content
/// only fills in the body.
pub trait DialogContent {
    fn title(&self) -> &'static str;

    /// Draw the body. Returns false once the dialog wants to close.
    fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState) -> bool;
}

type Constructor = fn() -> Box<dyn DialogContent>;

/// Fixed action-to-dialog lookup table.
pub struct DialogRegistry {
    entries: Vec<(MenuAction, Constructor)>,
}

impl DialogRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Every dialog the quiz menu offers.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(MenuAction::NewArithmeticQuestion, || {
            Box::new(ArithmeticEditor::default())
        });
        registry.register(MenuAction::NewChoiceQuestion, || {
            Box::new(ChoiceEditor::default())
        });
        registry.register(MenuAction::AssembleTest, || {
            Box::new(TestBuilder::default())
        });
        registry.register(MenuAction::TakeTest, || Box::new(TestPicker::default()));
        registry.register(MenuAction::ReviewResults, || {
            Box::new(ReviewBrowser::default())
        });
        registry
    }

    pub fn register(&mut self, action: MenuAction, build: Constructor) {
        self.entries.push((action, build));
    }

    pub fn build(&self, action: MenuAction) -> Option<Box<dyn DialogContent>> {
        self.entries
            .iter()
            .find(|(registered, _)| *registered == action)
            .map(|(_, build)| build())
    }
}

impl Default for DialogRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

struct ActiveDialog {
    action: MenuAction,
    open: bool,
    content: Box<dyn DialogContent>,
}

/// Owns the single live dialog. Opening a second one closes the first;
/// there is never more than one up at a time.
#[derive(Default)]
pub struct DialogHost {
    active: Option<ActiveDialog>,
}

impl DialogHost {
    /// Look up `action` and put its dialog up, closing any dialog already
    /// showing. An action with no registered dialog leaves the current one
    /// alone and reports failure.
    pub fn open(&mut self, action: MenuAction, registry: &DialogRegistry) -> bool {
        let content = match registry.build(action) {
            Some(content) => content,
            None => {
                log::warn!("No dialog registered for {:?}", action);
                return false;
            }
        };
        self.close();
        log::debug!("Opening the {} dialog", content.title());
        self.active = Some(ActiveDialog {
            action,
            open: true,
            content,
        });
        true
    }

    pub fn close(&mut self) {
        if let Some(active) = self.active.take() {
            log::debug!("Closing the {} dialog", active.content.title());
        }
    }

    pub fn active(&self) -> Option<MenuAction> {
        self.active.as_ref().map(|active| active.action)
    }

    pub fn title(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.content.title())
    }

    /// Paint the live dialog, if any, and drop it once the user dismisses
    /// it from the title bar or the content asks to go away.
    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState) {
        let mut finished = false;
        if let Some(active) = &mut self.active {
            egui::Window::new(active.content.title())
                .open(&mut active.open)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    if !active.content.ui(ui, state) {
                        finished = true;
                    }
                });
            if !active.open {
                finished = true;
            }
        }
        if finished {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct Probe;

    impl DialogContent for Probe {
        fn title(&self) -> &'static str {
            "Probe"
        }

        fn ui(&mut self, _ui: &mut egui::Ui, _state: &mut AppState) -> bool {
            true
        }
    }

    #[test]
    fn standard_registry_covers_every_action() {
        let registry = DialogRegistry::standard();
        for action in MenuAction::iter() {
            assert!(registry.build(*action).is_some(), "{} has no dialog", action);
        }
    }

    #[test]
    fn every_action_opens_its_own_dialog() {
        let registry = DialogRegistry::standard();
        let mut host = DialogHost::default();
        for action in MenuAction::iter() {
            assert!(host.open(*action, &registry));
            assert_eq!(host.active(), Some(*action));
        }
    }

    #[test]
    fn dialogs_carry_their_action_names() {
        let registry = DialogRegistry::standard();
        let mut host = DialogHost::default();
        assert!(host.open(MenuAction::NewChoiceQuestion, &registry));
        assert_eq!(host.title(), Some("New Multiple Choice Question"));
    }

    #[test]
    fn open_builds_the_provider_exactly_once() {
        static PROBE_BUILDS: AtomicU32 = AtomicU32::new(0);

        let mut registry = DialogRegistry::new();
        registry.register(MenuAction::TakeTest, || {
            PROBE_BUILDS.fetch_add(1, Ordering::SeqCst);
            Box::new(Probe)
        });
        let mut host = DialogHost::default();
        assert!(host.open(MenuAction::TakeTest, &registry));
        assert_eq!(PROBE_BUILDS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unknown_action_is_a_no_op() {
        let mut registry = DialogRegistry::new();
        registry.register(MenuAction::NewArithmeticQuestion, || Box::new(Probe));
        let mut host = DialogHost::default();
        assert!(host.open(MenuAction::NewArithmeticQuestion, &registry));
        assert!(!host.open(MenuAction::ReviewResults, &registry));
        assert_eq!(host.active(), Some(MenuAction::NewArithmeticQuestion));
    }

    #[test]
    fn opening_replaces_the_previous_dialog() {
        let registry = DialogRegistry::standard();
        let mut host = DialogHost::default();
        assert!(host.open(MenuAction::NewArithmeticQuestion, &registry));
        assert!(host.open(MenuAction::AssembleTest, &registry));
        assert_eq!(host.active(), Some(MenuAction::AssembleTest));
    }

    #[test]
    fn close_empties_the_slot() {
        let registry = DialogRegistry::standard();
        let mut host = DialogHost::default();
        assert!(host.open(MenuAction::TakeTest, &registry));
        host.close();
        assert_eq!(host.active(), None);
    }
}
