// Application context service
// Explicit auth/theme state owned by the shell and passed into views

use crate::models::user::User;

/// Process-wide application flags, held as an explicit value instead of a
/// global store. The shell owns one `AppContext` for its lifetime and
/// threads it into the presentation layer; the calendar navigator never
/// sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    user: Option<User>,
    dark_mode: bool,
}

impl AppContext {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            user: None,
            dark_mode,
        }
    }

    /// Detect the initial dark-mode preference from the OS.
    pub fn with_detected_theme() -> Self {
        let dark = matches!(dark_light::detect(), dark_light::Mode::Dark);
        log::info!("Detected system theme: {}", if dark { "dark" } else { "light" });
        Self::new(dark)
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Authentication is stubbed: a session is authenticated exactly while
    /// a user is set.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn set_user(&mut self, user: Option<User>) {
        match &user {
            Some(u) => log::info!("Signed in as {}", u.label()),
            None => log::info!("Signed out"),
        }
        self.user = user;
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        log::debug!("Dark mode toggled to {}", self.dark_mode);
    }
}
