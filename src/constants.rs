use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Preference key holding the persisted dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Root class toggled on the document for dark mode.
pub const DARK_CLASS: &str = "dark";

pub const ESCAPE_KEY: &str = "Escape";

/// Tech tags shown on a project card before the `+N` overflow tag.
pub const CARD_TECH_PREVIEW: usize = 3;

/// Scroll offset past which the navigation bar switches to its compact style.
pub const NAV_SCROLL_THRESHOLD: f64 = 20.0;

pub const SECTION_IDS: [&str; 5] = ["about", "projects", "skills", "experience", "contact"];
