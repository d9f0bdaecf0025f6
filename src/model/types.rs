//! Core type definitions for per-screen UI state

/// Which element of the login screen is currently focused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
    SignIn,
    Guest,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::SignIn,
            LoginField::SignIn => LoginField::Guest,
            LoginField::Guest => LoginField::Email,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LoginField::Email => LoginField::Guest,
            LoginField::Password => LoginField::Email,
            LoginField::SignIn => LoginField::Password,
            LoginField::Guest => LoginField::SignIn,
        }
    }

    /// Whether this element accepts text input
    pub fn is_input(self) -> bool {
        matches!(self, LoginField::Email | LoginField::Password)
    }
}

/// Which section of the browse screen is currently focused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BrowseSection {
    #[default]
    Search,
    Results,
}

impl BrowseSection {
    pub fn toggle(self) -> Self {
        match self {
            BrowseSection::Search => BrowseSection::Results,
            BrowseSection::Results => BrowseSection::Search,
        }
    }
}

/// Local state of the login screen. Field contents are never validated and
/// never leave the process; both actions ignore them entirely.
#[derive(Clone, Debug, Default)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
}

/// Local state of the browse screen. `search_query` lives only as long as
/// the screen is mounted; it starts empty on every entry.
#[derive(Clone, Debug, Default)]
pub struct BrowseState {
    pub search_query: String,
    pub selected: usize,
    pub section: BrowseSection,
}
