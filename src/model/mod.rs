//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the
//! application. It is organized into submodules by responsibility:
//!
//! - `types`: Per-screen UI state (login form, browse search/selection)
//! - `catalog`: The fixed podcast catalog and title filtering
//! - `navigator`: Current screen and back history
//! - `app_model`: Main application model with state management methods

mod app_model;
mod catalog;
mod navigator;
mod types;

// Re-export all public types for convenient access
pub use types::{BrowseSection, BrowseState, LoginField, LoginState};

pub use catalog::{catalog, filter_catalog, ImageRef, Podcast};

pub use navigator::ScreenId;

pub use app_model::AppModel;
