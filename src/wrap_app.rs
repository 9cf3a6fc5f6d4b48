use crate::{
    apps::{DashboardPage, EntrySync, LoginPage, Page, ProfilePage, QuizMenuPage, RegisterPage},
    helpers::backend::{HttpApi, QuizApi},
    helpers::router::{NavEvent, Notice, PageId, Router},
    helpers::AppState,
};
use egui_notify::Toasts;
use std::time::Duration;

/// Per-page widget state. Only the login page carries anything worth
/// keeping across restarts.
#[derive(serde::Deserialize, serde::Serialize, Default)]
#[serde(default)]
pub struct State {
    login: LoginPage,
    #[serde(skip)]
    register: RegisterPage,
    #[serde(skip)]
    dashboard: DashboardPage,
    #[serde(skip)]
    profile: ProfilePage,
    #[serde(skip)]
    quiz_menu: QuizMenuPage,
}

/// Top-level application: the router picks the page, this shell draws it,
/// feeds events back, and turns router notices into toasts.
pub struct QuizApp {
    state: State,
    app_state: AppState,
    router: Router,
    api: Box<dyn QuizApi>,
    toasts: Toasts,
    applied_title: String,
}

impl Default for QuizApp {
    fn default() -> Self {
        Self {
            state: State::default(),
            app_state: AppState::default(),
            router: Router::default(),
            api: Box::new(HttpApi::default()),
            toasts: Toasts::default(),
            applied_title: "".to_string(),
        }
    }
}

impl QuizApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut slf = Self::default();

        if let Some(storage) = cc.storage {
            if let Some(state) = eframe::get_value(storage, eframe::APP_KEY) {
                slf.state = state;
            }
        }

        slf
    }

    fn page_ui(&mut self, ui: &mut egui::Ui) -> Option<NavEvent> {
        match self.router.page() {
            PageId::Login => self.state.login.ui(ui, &mut self.app_state),
            PageId::Register => self.state.register.ui(ui, &mut self.app_state),
            PageId::Dashboard => self.state.dashboard.ui(ui, &mut self.app_state),
            PageId::Profile => self.state.profile.ui(ui, &mut self.app_state),
            PageId::QuizMenu => self.state.quiz_menu.ui(ui, &mut self.app_state),
        }
    }

    fn dispatch(&mut self, event: NavEvent) {
        for notice in self.router.handle(event, self.api.as_ref()) {
            self.notify(notice);
        }
        self.sync_entry();
    }

    /// Pages that mirror router data get refreshed when they come up.
    fn sync_entry(&mut self) {
        match self.router.page() {
            PageId::Dashboard => self.state.dashboard.sync_entry(&self.router),
            PageId::Profile => self.state.profile.sync_entry(&self.router),
            _ => {}
        }
    }

    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::Info(text) => self.toasts.info(text),
            Notice::Warning(text) => self.toasts.warning(text),
            Notice::Error(text) => self.toasts.error(text),
        }
        .set_duration(Some(Duration::from_secs(5)));
    }

    fn bar_contents(&mut self, ui: &mut egui::Ui) -> Option<NavEvent> {
        let mut event = None;

        egui::widgets::global_dark_light_mode_switch(ui);

        ui.separator();

        let page = self.router.page();
        for (target, name, destination) in [
            (
                PageId::Dashboard,
                self.state.dashboard.name(),
                NavEvent::ShowDashboard,
            ),
            (
                PageId::QuizMenu,
                self.state.quiz_menu.name(),
                NavEvent::ShowQuizMenu,
            ),
            (
                PageId::Profile,
                self.state.profile.name(),
                NavEvent::ShowProfile,
            ),
        ] {
            if ui.selectable_label(page == target, name).clicked() {
                event = Some(destination);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Log out").clicked() {
                event = Some(NavEvent::Logout);
            }
            if let Some(username) = self.router.session().username() {
                ui.label(username);
                ui.separator();
            }
            egui::warn_if_debug_build(ui);
        });

        event
    }
}

impl eframe::App for QuizApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.state);
    }

    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        visuals.panel_fill.to_normalized_gamma_f32()
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if self.applied_title != self.router.title() {
            self.applied_title = self.router.title().to_string();
            frame.set_window_title(&self.applied_title);
        }

        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::F11)) {
            frame.set_fullscreen(!frame.info().window_info.fullscreen);
        }

        let mut bar_event = None;
        if self.router.session().is_logged_in() {
            egui::TopBottomPanel::top("quiz_app_top_bar").show(ctx, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.visuals_mut().button_frame = false;
                    bar_event = self.bar_contents(ui);
                });
            });
        }

        let page_event = egui::CentralPanel::default()
            .show(ctx, |ui| self.page_ui(ui))
            .inner;

        if let Some(event) = bar_event.or(page_event) {
            self.dispatch(event);
        }

        self.toasts.show(ctx);

        egui::gui_zoom::zoom_with_keyboard_shortcuts(ctx, frame.info().native_pixels_per_point);
    }
}
