//! Screen navigation state (current screen plus back history)

/// Identifies one full-page screen in the navigation graph
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenId {
    Splash,
    Login,
    Browse,
}

/// Current screen plus a stack-like history supporting back navigation
#[derive(Debug)]
pub struct Navigator {
    current: ScreenId,
    history: Vec<ScreenId>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: ScreenId::Splash,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    /// Switch to `to`. With `replace_current` the screen being left is not
    /// recorded in history, so back navigation can never return to it.
    pub fn navigate(&mut self, to: ScreenId, replace_current: bool) {
        if !replace_current {
            self.history.push(self.current);
        }
        self.current = to;
    }

    /// Pop back to the previous screen. Returns false when there is no
    /// history to return to; the current screen is left unchanged.
    pub fn go_back(&mut self) -> bool {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
            true
        } else {
            false
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
