use std::sync::Arc;

use parking_lot::Mutex;

use crate::entities::skill::Skill;
use crate::web::document::{Document, ScrollLock};

#[derive(Default)]
struct Selection {
    skill: Option<Skill>,
    scroll_lock: Option<ScrollLock>,
}

/// Skill grid overlay. Selecting a card opens the overlay from the already
/// loaded list; the body scroll is locked while it is open, same as the project popup.
pub struct SkillGallery {
    document: Arc<dyn Document>,
    selection: Mutex<Selection>,
}

impl SkillGallery {
    pub fn new(document: Arc<dyn Document>) -> Self {
        SkillGallery { document, selection: Mutex::new(Selection::default()) }
    }

    pub fn select(&self, skill: Skill) {
        let mut selection = self.selection.lock();
        tracing::debug!(skill_id = skill.id, "showing skill detail");
        selection.skill = Some(skill);
        if selection.scroll_lock.is_none() {
            selection.scroll_lock = Some(ScrollLock::acquire(self.document.clone()));
        }
    }

    pub fn close(&self) {
        let released = {
            let mut selection = self.selection.lock();
            selection.skill = None;
            selection.scroll_lock.take()
        };
        drop(released);
    }

    /// Clicking the dimmed backdrop closes; clicks inside the panel do not.
    pub fn overlay_click(&self, on_backdrop: bool) {
        if on_backdrop {
            self.close();
        }
    }

    pub fn selected(&self) -> Option<Skill> {
        self.selection.lock().skill.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_fixtures::skill;
    use crate::web::document::{HeadlessDocument, Overflow};

    #[test]
    fn selecting_opens_overlay_and_locks_scroll() {
        let doc = Arc::new(HeadlessDocument::new());
        let gallery = SkillGallery::new(doc.clone());

        gallery.select(skill(1, "Rust", 90.0));
        gallery.select(skill(2, "Go", 60.0));

        assert_eq!(gallery.selected().map(|s| s.name), Some("Go".to_string()));
        assert_eq!(doc.body_overflow(), Overflow::Hidden);
        assert_eq!(doc.scroll_lock_count(), 1);
    }

    #[test]
    fn clicks_inside_the_panel_keep_it_open() {
        let doc = Arc::new(HeadlessDocument::new());
        let gallery = SkillGallery::new(doc.clone());
        gallery.select(skill(1, "Rust", 90.0));

        gallery.overlay_click(false);
        assert!(gallery.selected().is_some());

        gallery.overlay_click(true);
        assert_eq!(gallery.selected(), None);
        assert_eq!(doc.body_overflow(), Overflow::Auto);
        assert_eq!(doc.scroll_unlock_count(), 1);
    }

    #[test]
    fn dropping_an_open_overlay_restores_scroll() {
        let doc = Arc::new(HeadlessDocument::new());
        {
            let gallery = SkillGallery::new(doc.clone());
            gallery.select(skill(1, "Rust", 90.0));
        }
        assert_eq!(doc.body_overflow(), Overflow::Auto);
    }
}
