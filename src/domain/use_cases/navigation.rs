use parking_lot::Mutex;

use crate::constants::NAV_SCROLL_THRESHOLD;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub mobile_menu_open: bool,
    pub scrolled: bool,
}

/// Top bar state: the mobile menu and the compact style once the page is scrolled.
#[derive(Default)]
pub struct NavigationState {
    inner: Mutex<NavigationSnapshot>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_mobile_menu(&self) -> bool {
        let mut inner = self.inner.lock();
        inner.mobile_menu_open = !inner.mobile_menu_open;
        inner.mobile_menu_open
    }

    /// Following a section link closes the mobile menu.
    pub fn close_mobile_menu(&self) {
        self.inner.lock().mobile_menu_open = false;
    }

    pub fn on_scroll(&self, offset_y: f64) -> bool {
        let mut inner = self.inner.lock();
        inner.scrolled = offset_y > NAV_SCROLL_THRESHOLD;
        inner.scrolled
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        *self.inner.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggles_and_closes() {
        let nav = NavigationState::new();
        assert!(nav.toggle_mobile_menu());
        assert!(!nav.toggle_mobile_menu());
        nav.toggle_mobile_menu();
        nav.close_mobile_menu();
        assert!(!nav.snapshot().mobile_menu_open);
    }

    #[test]
    fn scrolled_only_past_threshold() {
        let nav = NavigationState::new();
        assert!(!nav.on_scroll(20.0));
        assert!(nav.on_scroll(20.5));
        assert!(!nav.on_scroll(0.0));
    }
}
