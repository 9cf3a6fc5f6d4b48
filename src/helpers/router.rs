use crate::helpers::backend::{ApiError, Profile, QuizApi};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub enum PageId {
    #[default]
    Login,
    Register,
    Dashboard,
    Profile,
    QuizMenu,
}

impl Display for PageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PageId::Login => write!(f, "Login"),
            PageId::Register => write!(f, "Register"),
            PageId::Dashboard => write!(f, "Dashboard"),
            PageId::Profile => write!(f, "Profile"),
            PageId::QuizMenu => write!(f, "Quiz Menu"),
        }
    }
}

/// The logged-in identity. Set by the login/register success handlers,
/// cleared whenever the application returns to the login page. Only ever
/// touched from the UI thread.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn log_in(&mut self, username: &str) {
        self.user = Some(username.to_string());
    }

    pub fn clear(&mut self) {
        self.user = None;
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Everything the router wants shown to the user. The UI layer turns these
/// into toasts; the router itself never touches a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Info(String),
    Warning(String),
    Error(String),
}

/// Input events the pages emit. Each maps to exactly one handler in
/// [`Router::handle`].
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    ShowLogin,
    ShowRegister,
    ShowDashboard,
    ShowProfile,
    ShowQuizMenu,
    LoginSubmitted {
        username: String,
        password: String,
    },
    RegisterSubmitted {
        username: String,
        email: String,
        password: String,
    },
    Logout,
}

/// Page-stack controller: exactly one page is current at any time, and the
/// window title always describes it. Transitions are unconditional except
/// for the pages that require a session, and profile entry, which must
/// fetch the profile before switching.
pub struct Router {
    page: PageId,
    title: String,
    session: Session,
    profile: Option<Profile>,
}

impl Default for Router {
    fn default() -> Self {
        let session = Session::default();
        Self {
            page: PageId::Login,
            title: title_for(PageId::Login, &session),
            session,
            profile: None,
        }
    }
}

impl Router {
    pub fn page(&self) -> PageId {
        self.page
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The most recently fetched profile, kept while the session lasts.
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn handle(&mut self, event: NavEvent, api: &dyn QuizApi) -> Vec<Notice> {
        log::debug!("Navigation event: {:?}", event);
        let mut notices = Vec::new();
        match event {
            NavEvent::ShowLogin | NavEvent::Logout => self.show_login(),
            NavEvent::ShowRegister => self.show_register(),
            NavEvent::ShowDashboard => self.show_member_page(PageId::Dashboard, &mut notices),
            NavEvent::ShowQuizMenu => self.show_member_page(PageId::QuizMenu, &mut notices),
            NavEvent::ShowProfile => self.show_profile(api, &mut notices),
            NavEvent::LoginSubmitted { username, password } => {
                self.submit_login(&username, &password, api, &mut notices)
            }
            NavEvent::RegisterSubmitted {
                username,
                email,
                password,
            } => self.submit_register(&username, &email, &password, api, &mut notices),
        }
        notices
    }

    fn enter(&mut self, page: PageId) {
        self.page = page;
        self.title = title_for(page, &self.session);
        log::debug!("Now showing the {} page", page);
    }

    /// Returning to login drops the identity and anything fetched under it.
    fn show_login(&mut self) {
        self.session.clear();
        self.profile = None;
        self.enter(PageId::Login);
    }

    /// The register page is part of the anonymous flow; a session never
    /// survives entering it.
    fn show_register(&mut self) {
        self.session.clear();
        self.profile = None;
        self.enter(PageId::Register);
    }

    /// Pages only meaningful with a logged-in user.
    fn show_member_page(&mut self, page: PageId, notices: &mut Vec<Notice>) {
        if !self.session.is_logged_in() {
            log::warn!("{} requested with no session", page);
            notices.push(Notice::Warning("Please log in first.".to_string()));
            self.show_login();
            return;
        }
        self.enter(page);
    }

    /// Profile entry is guarded: fetch first, switch only on success.
    fn show_profile(&mut self, api: &dyn QuizApi, notices: &mut Vec<Notice>) {
        let username = match self.session.username() {
            Some(user) => user.to_string(),
            None => {
                log::warn!("Profile requested with no session");
                notices.push(Notice::Warning("Please log in first.".to_string()));
                self.show_login();
                return;
            }
        };

        match api.fetch_profile(&username) {
            Ok(profile) => {
                self.profile = Some(profile);
                self.enter(PageId::Profile);
            }
            Err(e) => {
                log::warn!("Profile fetch failed: {}", e);
                notices.push(notice_for(&e));
            }
        }
    }

    fn submit_login(
        &mut self,
        username: &str,
        password: &str,
        api: &dyn QuizApi,
        notices: &mut Vec<Notice>,
    ) {
        match api.login(username, password) {
            Ok(ok) => {
                log::info!("Logged in as {}", ok.username);
                self.session.log_in(&ok.username);
                notices.push(Notice::Info(ok.message));
                self.enter(PageId::Dashboard);
            }
            Err(e) => {
                log::warn!("Login failed: {}", e);
                notices.push(notice_for(&e));
            }
        }
    }

    fn submit_register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
        api: &dyn QuizApi,
        notices: &mut Vec<Notice>,
    ) {
        match api.register(username, email, password) {
            Ok(ok) => {
                log::info!("Registered as {}", ok.username);
                self.session.log_in(&ok.username);
                notices.push(Notice::Info(ok.message));
                self.enter(PageId::Dashboard);
            }
            Err(e) => {
                log::warn!("Registration failed: {}", e);
                notices.push(notice_for(&e));
            }
        }
    }
}

/// Server rejections are something the user can usually fix, so they come
/// through as warnings; everything else is an error.
fn notice_for(error: &ApiError) -> Notice {
    match error {
        ApiError::Server { .. } => Notice::Warning(error.to_string()),
        _ => Notice::Error(error.to_string()),
    }
}

fn title_for(page: PageId, session: &Session) -> String {
    match page {
        PageId::Login => "QuizSmith Login".to_string(),
        PageId::Register => "QuizSmith Registration".to_string(),
        PageId::Dashboard => match session.username() {
            Some(user) => format!("QuizSmith Dashboard - {}", user),
            None => "QuizSmith Dashboard".to_string(),
        },
        PageId::Profile => match session.username() {
            Some(user) => format!("Profile of {}", user),
            None => "Profile".to_string(),
        },
        PageId::QuizMenu => "Quiz Main Menu".to_string(),
    }
}
