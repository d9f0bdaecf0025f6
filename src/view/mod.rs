//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by screen:
//!
//! - `utils`: Shared utility functions (scrollable lists, truncation)
//! - `splash`: Branded splash screen
//! - `login`: Login form
//! - `browse`: Podcast search and card list

mod browse;
mod login;
mod splash;
mod utils;

use ratatui::Frame;

use crate::model::{BrowseState, LoginState, ScreenId};

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        screen: ScreenId,
        login_state: &LoginState,
        browse_state: &BrowseState,
    ) {
        match screen {
            ScreenId::Splash => splash::render(frame),
            ScreenId::Login => login::render(frame, login_state),
            ScreenId::Browse => browse::render(frame, browse_state),
        }
    }
}
