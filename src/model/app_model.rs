//! Main application model with state management

use std::sync::Arc;
use tokio::sync::Mutex;

use super::catalog::{self, Podcast};
use super::navigator::{Navigator, ScreenId};
use super::types::{BrowseSection, BrowseState, LoginField, LoginState};

/// Main application model containing all state
pub struct AppModel {
    navigator: Arc<Mutex<Navigator>>,
    login_state: Arc<Mutex<LoginState>>,
    browse_state: Arc<Mutex<BrowseState>>,
    should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            navigator: Arc::new(Mutex::new(Navigator::new())),
            login_state: Arc::new(Mutex::new(LoginState::default())),
            browse_state: Arc::new(Mutex::new(BrowseState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub async fn current_screen(&self) -> ScreenId {
        self.navigator.lock().await.current()
    }

    /// Switch to `to`, resetting the target screen's local state: a screen
    /// always mounts fresh, nothing survives from an earlier visit.
    pub async fn navigate_to(&self, to: ScreenId, replace_current: bool) {
        let mut nav = self.navigator.lock().await;
        tracing::debug!(from = ?nav.current(), to = ?to, replace_current, "navigating");
        nav.navigate(to, replace_current);
        drop(nav);

        self.reset_screen_state(to).await;
    }

    /// Pop back to the previous screen. The screen being left unmounts, so
    /// its local state is discarded.
    pub async fn go_back(&self) -> bool {
        let mut nav = self.navigator.lock().await;
        let departed = nav.current();
        let moved = nav.go_back();
        drop(nav);

        if moved {
            tracing::debug!(from = ?departed, "navigated back");
            self.reset_screen_state(departed).await;
        }
        moved
    }

    async fn reset_screen_state(&self, screen: ScreenId) {
        match screen {
            ScreenId::Login => *self.login_state.lock().await = LoginState::default(),
            ScreenId::Browse => *self.browse_state.lock().await = BrowseState::default(),
            ScreenId::Splash => {}
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // Login screen
    // ========================================================================

    pub async fn get_login_state(&self) -> LoginState {
        self.login_state.lock().await.clone()
    }

    pub async fn login_focus_next(&self) {
        let mut state = self.login_state.lock().await;
        state.focus = state.focus.next();
    }

    pub async fn login_focus_prev(&self) {
        let mut state = self.login_state.lock().await;
        state.focus = state.focus.prev();
    }

    pub async fn login_append(&self, c: char) {
        let mut state = self.login_state.lock().await;
        match state.focus {
            LoginField::Email => state.email.push(c),
            LoginField::Password => state.password.push(c),
            _ => {}
        }
    }

    pub async fn login_backspace(&self) {
        let mut state = self.login_state.lock().await;
        match state.focus {
            LoginField::Email => {
                state.email.pop();
            }
            LoginField::Password => {
                state.password.pop();
            }
            _ => {}
        }
    }

    /// Deliberately a stub: field contents are ignored and the browse screen
    /// is pushed. There is no backend to talk to.
    pub async fn sign_in(&self) {
        tracing::info!("sign in requested");
        self.navigate_to(ScreenId::Browse, false).await;
    }

    /// Identical effect to [`AppModel::sign_in`].
    pub async fn continue_as_guest(&self) {
        tracing::info!("continuing as guest");
        self.navigate_to(ScreenId::Browse, false).await;
    }

    // ========================================================================
    // Browse screen
    // ========================================================================

    pub async fn get_browse_state(&self) -> BrowseState {
        self.browse_state.lock().await.clone()
    }

    pub async fn browse_toggle_section(&self) {
        let mut state = self.browse_state.lock().await;
        state.section = state.section.toggle();
    }

    pub async fn set_browse_section(&self, section: BrowseSection) {
        let mut state = self.browse_state.lock().await;
        state.section = section;
    }

    pub async fn append_to_search(&self, c: char) {
        let mut state = self.browse_state.lock().await;
        state.search_query.push(c);
        state.selected = 0;
    }

    pub async fn backspace_search(&self) {
        let mut state = self.browse_state.lock().await;
        state.search_query.pop();
        state.selected = 0;
    }

    pub async fn clear_search(&self) {
        let mut state = self.browse_state.lock().await;
        state.search_query.clear();
        state.selected = 0;
    }

    pub async fn browse_move_up(&self) {
        let mut state = self.browse_state.lock().await;
        if state.selected > 0 {
            state.selected -= 1;
        }
    }

    pub async fn browse_move_down(&self) {
        let mut state = self.browse_state.lock().await;
        let visible = catalog::filter_catalog(&state.search_query).len();
        if state.selected < visible.saturating_sub(1) {
            state.selected += 1;
        }
    }

    /// The podcast currently selected in the filtered list, if any.
    pub async fn selected_podcast(&self) -> Option<&'static Podcast> {
        let state = self.browse_state.lock().await;
        catalog::filter_catalog(&state.search_query)
            .get(state.selected)
            .copied()
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn model_at_login() -> AppModel {
        let model = AppModel::new();
        model.navigate_to(ScreenId::Login, true).await;
        model
    }

    #[tokio::test]
    async fn sign_in_ignores_field_contents() {
        let model = model_at_login().await;
        model.login_append('n').await;
        model.login_focus_next().await;
        model.login_append('x').await;

        model.sign_in().await;
        assert_eq!(model.current_screen().await, ScreenId::Browse);
    }

    #[tokio::test]
    async fn guest_login_with_empty_fields_reaches_browse() {
        let model = model_at_login().await;
        model.continue_as_guest().await;
        assert_eq!(model.current_screen().await, ScreenId::Browse);
    }

    #[tokio::test]
    async fn typing_targets_the_focused_login_field() {
        let model = model_at_login().await;
        model.login_append('a').await;
        model.login_append('b').await;
        model.login_focus_next().await;
        model.login_append('s').await;
        model.login_backspace().await;
        model.login_append('t').await;

        let state = model.get_login_state().await;
        assert_eq!(state.email, "ab");
        assert_eq!(state.password, "t");
    }

    #[tokio::test]
    async fn search_query_does_not_survive_browse_remount() {
        let model = model_at_login().await;
        model.continue_as_guest().await;
        model.append_to_search('t').await;
        model.append_to_search('h').await;
        assert_eq!(model.get_browse_state().await.search_query, "th");

        // Leaving the browse screen discards its query
        assert!(model.go_back().await);
        assert_eq!(model.current_screen().await, ScreenId::Login);

        model.sign_in().await;
        assert_eq!(model.get_browse_state().await.search_query, "");
    }

    #[tokio::test]
    async fn query_edits_reset_the_selection() {
        let model = model_at_login().await;
        model.continue_as_guest().await;

        model.browse_move_down().await;
        model.browse_move_down().await;
        assert_eq!(model.get_browse_state().await.selected, 2);

        model.append_to_search('t').await;
        assert_eq!(model.get_browse_state().await.selected, 0);
    }

    #[tokio::test]
    async fn selection_is_clamped_to_the_filtered_list() {
        let model = model_at_login().await;
        model.continue_as_guest().await;
        for c in "daily".chars() {
            model.append_to_search(c).await;
        }

        // One visible entry: the selection cannot move past it
        model.browse_move_down().await;
        model.browse_move_down().await;
        assert_eq!(model.get_browse_state().await.selected, 0);

        let selected = model.selected_podcast().await.expect("one match");
        assert_eq!(selected.title, "The Daily");
    }

    #[tokio::test]
    async fn selection_follows_the_filtered_order() {
        let model = model_at_login().await;
        model.continue_as_guest().await;
        for c in "the".chars() {
            model.append_to_search(c).await;
        }

        model.browse_move_down().await;
        let selected = model.selected_podcast().await.expect("three matches");
        assert_eq!(selected.title, "The Joe Rogan Experience");
    }

    #[tokio::test]
    async fn no_selection_when_nothing_matches() {
        let model = model_at_login().await;
        model.continue_as_guest().await;
        for c in "zzz".chars() {
            model.append_to_search(c).await;
        }
        assert!(model.selected_podcast().await.is_none());
    }
}
