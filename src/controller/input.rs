//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::links;
use crate::model::{BrowseSection, LoginField, ScreenId};
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        // Only handle key press events, not release or repeat
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Ctrl+Q / Ctrl+C quit from anywhere, including text entry
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('q' | 'Q' | 'c' | 'C') = key.code {
                self.model.lock().await.set_should_quit(true).await;
                return Ok(());
            }
        }

        let screen = { self.model.lock().await.current_screen().await };

        match screen {
            ScreenId::Splash => {
                // Nothing to interact with while the splash is up
                if let KeyCode::Char('q' | 'Q') = key.code {
                    self.model.lock().await.set_should_quit(true).await;
                }
            }
            ScreenId::Login => self.handle_login_key(key).await,
            ScreenId::Browse => self.handle_browse_key(key).await,
        }

        Ok(())
    }

    async fn handle_login_key(&self, key: KeyEvent) {
        let model = self.model.lock().await;
        let focus = model.get_login_state().await.focus;

        match key.code {
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    model.login_focus_prev().await;
                } else {
                    model.login_focus_next().await;
                }
            }
            KeyCode::BackTab => {
                model.login_focus_prev().await;
            }
            KeyCode::Down => {
                model.login_focus_next().await;
            }
            KeyCode::Up => {
                model.login_focus_prev().await;
            }
            KeyCode::Backspace if focus.is_input() => {
                model.login_backspace().await;
            }
            KeyCode::Enter => match focus {
                // Enter inside a field moves on, like tabbing through a form
                LoginField::Email | LoginField::Password => model.login_focus_next().await,
                LoginField::SignIn => model.sign_in().await,
                LoginField::Guest => model.continue_as_guest().await,
            },
            KeyCode::Char(c) if focus.is_input() => {
                model.login_append(c).await;
            }
            KeyCode::Char('q' | 'Q') => {
                model.set_should_quit(true).await;
            }
            _ => {}
        }
    }

    async fn handle_browse_key(&self, key: KeyEvent) {
        let model = self.model.lock().await;
        let section = model.get_browse_state().await.section;

        // Handle search input when the search box is focused
        if section == BrowseSection::Search {
            match key.code {
                KeyCode::Tab | KeyCode::BackTab => {
                    model.browse_toggle_section().await;
                }
                KeyCode::Down | KeyCode::Enter => {
                    model.set_browse_section(BrowseSection::Results).await;
                }
                KeyCode::Esc => {
                    model.clear_search().await;
                }
                KeyCode::Backspace => {
                    model.backspace_search().await;
                }
                KeyCode::Char(c) => {
                    model.append_to_search(c).await;
                }
                _ => {}
            }
            return;
        }

        // Results list focused
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                model.browse_toggle_section().await;
            }
            KeyCode::Char('/') => {
                model.set_browse_section(BrowseSection::Search).await;
            }
            KeyCode::Up => {
                model.browse_move_up().await;
            }
            KeyCode::Down => {
                model.browse_move_down().await;
            }
            KeyCode::Enter => {
                // Open the selected podcast's website; fire-and-forget
                if let Some(podcast) = model.selected_podcast().await {
                    drop(model);
                    links::open_website(podcast.website_url);
                }
            }
            KeyCode::Esc | KeyCode::Backspace => {
                model.go_back().await;
            }
            KeyCode::Char('q' | 'Q') => {
                model.set_should_quit(true).await;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use tokio::sync::Mutex;

    use crate::model::{AppModel, BrowseSection, ScreenId};
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    async fn controller_at_login() -> AppController {
        let model = Arc::new(Mutex::new(AppModel::new()));
        model.lock().await.navigate_to(ScreenId::Login, true).await;
        AppController::new(model)
    }

    async fn controller_at_browse() -> AppController {
        let controller = controller_at_login().await;
        let model = controller.model.lock().await;
        model.continue_as_guest().await;
        model.set_browse_section(BrowseSection::Search).await;
        drop(model);
        controller
    }

    #[tokio::test]
    async fn typed_characters_land_in_the_focused_login_field() {
        let controller = controller_at_login().await;
        for c in "me@example.com".chars() {
            controller.handle_key_event(press(KeyCode::Char(c))).await.unwrap();
        }
        controller.handle_key_event(press(KeyCode::Tab)).await.unwrap();
        for c in "hunter2".chars() {
            controller.handle_key_event(press(KeyCode::Char(c))).await.unwrap();
        }

        let state = controller.model.lock().await.get_login_state().await;
        assert_eq!(state.email, "me@example.com");
        assert_eq!(state.password, "hunter2");
    }

    #[tokio::test]
    async fn enter_walks_the_form_and_signs_in() {
        let controller = controller_at_login().await;
        // Email -> Password -> Sign In -> pressed
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();

        let model = controller.model.lock().await;
        assert_eq!(model.current_screen().await, ScreenId::Browse);
    }

    #[tokio::test]
    async fn guest_button_reaches_browse_with_empty_fields() {
        let controller = controller_at_login().await;
        // Tab past email, password and sign-in to the guest button
        for _ in 0..3 {
            controller.handle_key_event(press(KeyCode::Tab)).await.unwrap();
        }
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();

        let model = controller.model.lock().await;
        assert_eq!(model.current_screen().await, ScreenId::Browse);
    }

    #[tokio::test]
    async fn typing_in_the_search_box_narrows_the_list() {
        let controller = controller_at_browse().await;
        for c in "daily".chars() {
            controller.handle_key_event(press(KeyCode::Char(c))).await.unwrap();
        }

        let model = controller.model.lock().await;
        let state = model.get_browse_state().await;
        assert_eq!(state.search_query, "daily");

        let selected = model.selected_podcast().await.expect("one match");
        assert_eq!(selected.title, "The Daily");
    }

    #[tokio::test]
    async fn escape_clears_the_query_in_search_focus() {
        let controller = controller_at_browse().await;
        for c in "zzz".chars() {
            controller.handle_key_event(press(KeyCode::Char(c))).await.unwrap();
        }
        controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();

        let state = controller.model.lock().await.get_browse_state().await;
        assert_eq!(state.search_query, "");
    }

    #[tokio::test]
    async fn arrows_move_the_selection_in_the_results_list() {
        let controller = controller_at_browse().await;
        controller.handle_key_event(press(KeyCode::Tab)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Down)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Down)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Up)).await.unwrap();

        let model = controller.model.lock().await;
        assert_eq!(model.get_browse_state().await.section, BrowseSection::Results);
        let selected = model.selected_podcast().await.expect("full catalog visible");
        assert_eq!(selected.title, "99% Invisible");
    }

    #[tokio::test]
    async fn escape_in_the_results_list_goes_back_to_login() {
        let controller = controller_at_browse().await;
        controller.handle_key_event(press(KeyCode::Tab)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();

        let model = controller.model.lock().await;
        assert_eq!(model.current_screen().await, ScreenId::Login);
    }

    #[tokio::test]
    async fn q_quits_outside_text_entry_but_types_inside_it() {
        let controller = controller_at_browse().await;
        controller.handle_key_event(press(KeyCode::Char('q'))).await.unwrap();

        let model = controller.model.lock().await;
        assert!(!model.should_quit().await);
        assert_eq!(model.get_browse_state().await.search_query, "q");
        drop(model);

        controller.handle_key_event(press(KeyCode::Tab)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Char('q'))).await.unwrap();
        assert!(controller.model.lock().await.should_quit().await);
    }
}
