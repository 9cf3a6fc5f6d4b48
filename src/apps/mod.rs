pub mod dialogs;

mod login_page;
pub use login_page::LoginPage;
mod register_page;
pub use register_page::RegisterPage;
mod dashboard_page;
pub use dashboard_page::DashboardPage;
mod profile_page;
pub use profile_page::ProfilePage;
mod quiz_menu;
pub use quiz_menu::QuizMenuPage;

use crate::helpers::router::{NavEvent, Router};
use crate::helpers::AppState;

/// A full-window page. Pages never switch themselves; they hand an event
/// back and the router decides what happens.
pub trait Page {
    /// Name shown in the navigation bar once logged in.
    fn name(&self) -> &'static str;

    /// Draw the page body into the central panel.
    fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState) -> Option<NavEvent>;
}

/// Pages that mirror router-held data implement this; the shell calls it
/// whenever the page becomes current. Pages without the capability simply
/// never get poked.
pub trait EntrySync {
    fn sync_entry(&mut self, router: &Router);
}
