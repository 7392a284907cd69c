use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::Mutex;

pub type ListenerId = u64;
pub type KeyListener = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Auto,
    Hidden,
}

/// The slice of the page every view may touch: the root element's classes,
/// the body's scroll behaviour and window-level keydown listeners.
pub trait Document: Send + Sync {
    fn set_root_class(&self, class: &str, enabled: bool);
    fn has_root_class(&self, class: &str) -> bool;
    /// Hides body overflow when the first lock is taken.
    fn acquire_scroll_lock(&self);
    /// Restores body overflow once the last lock is released.
    fn release_scroll_lock(&self);
    fn body_overflow(&self) -> Overflow;
    fn add_keydown_listener(&self, listener: KeyListener) -> ListenerId;
    fn remove_keydown_listener(&self, id: ListenerId) -> bool;
}

#[derive(Default)]
struct HeadlessState {
    root_classes: BTreeSet<String>,
    overflow: Overflow,
    listeners: Vec<(ListenerId, KeyListener)>,
    next_listener: ListenerId,
    held_scroll_locks: usize,
    scroll_locks: usize,
    scroll_unlocks: usize,
    deliveries: usize,
}

/// In-memory document used by the preview shell and tests.
#[derive(Default)]
pub struct HeadlessDocument {
    state: Mutex<HeadlessState>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers a keydown event to every attached listener.
    ///
    /// Listeners run without the document lock held, so they may detach themselves.
    pub fn dispatch_keydown(&self, key: &str) {
        let listeners: Vec<KeyListener> = {
            let state = self.state.lock();
            state.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            self.state.lock().deliveries += 1;
            listener(key);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.lock().listeners.len()
    }

    /// Number of listener invocations since creation.
    pub fn keydown_deliveries(&self) -> usize {
        self.state.lock().deliveries
    }

    pub fn scroll_lock_count(&self) -> usize {
        self.state.lock().scroll_locks
    }

    pub fn scroll_unlock_count(&self) -> usize {
        self.state.lock().scroll_unlocks
    }

    pub fn root_classes(&self) -> Vec<String> {
        self.state.lock().root_classes.iter().cloned().collect()
    }
}

impl Document for HeadlessDocument {
    fn set_root_class(&self, class: &str, enabled: bool) {
        let mut state = self.state.lock();
        if enabled {
            state.root_classes.insert(class.to_string());
        } else {
            state.root_classes.remove(class);
        }
    }

    fn has_root_class(&self, class: &str) -> bool {
        self.state.lock().root_classes.contains(class)
    }

    fn acquire_scroll_lock(&self) {
        let mut state = self.state.lock();
        state.held_scroll_locks += 1;
        if state.held_scroll_locks == 1 {
            state.scroll_locks += 1;
            state.overflow = Overflow::Hidden;
        }
    }

    fn release_scroll_lock(&self) {
        let mut state = self.state.lock();
        if state.held_scroll_locks == 0 {
            return;
        }
        state.held_scroll_locks -= 1;
        if state.held_scroll_locks == 0 {
            state.scroll_unlocks += 1;
            state.overflow = Overflow::Auto;
        }
    }

    fn body_overflow(&self) -> Overflow {
        self.state.lock().overflow
    }

    fn add_keydown_listener(&self, listener: KeyListener) -> ListenerId {
        let mut state = self.state.lock();
        state.next_listener += 1;
        let id = state.next_listener;
        state.listeners.push((id, listener));
        id
    }

    fn remove_keydown_listener(&self, id: ListenerId) -> bool {
        let mut state = self.state.lock();
        let before = state.listeners.len();
        state.listeners.retain(|(lid, _)| *lid != id);
        state.listeners.len() != before
    }
}

/// One hold on the body scroll lock. Scrolling comes back when the last hold drops.
pub struct ScrollLock {
    document: Arc<dyn Document>,
}

impl ScrollLock {
    pub fn acquire(document: Arc<dyn Document>) -> Self {
        document.acquire_scroll_lock();
        ScrollLock { document }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.document.release_scroll_lock();
    }
}

/// A window keydown listener that is detached when dropped.
pub struct KeydownSubscription {
    document: Arc<dyn Document>,
    id: ListenerId,
}

impl KeydownSubscription {
    pub fn attach(document: Arc<dyn Document>, listener: KeyListener) -> Self {
        let id = document.add_keydown_listener(listener);
        KeydownSubscription { document, id }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for KeydownSubscription {
    fn drop(&mut self) {
        self.document.remove_keydown_listener(self.id);
    }
}
