//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and drives screen transitions. It is organized into submodules by
//! responsibility:
//!
//! - `input`: Key event handling
//! - `splash`: One-shot splash-to-login transition timer

mod input;
mod splash;

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::model::AppModel;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) splash_timer: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>) -> Self {
        Self {
            model,
            splash_timer: Arc::new(Mutex::new(None)),
        }
    }
}
