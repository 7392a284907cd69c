use crate::use_cases::theme::ThemeMode;

/// A light/dark pair of class lists.
#[derive(Debug, Clone, Copy)]
pub struct Tone {
    pub light: &'static str,
    pub dark: &'static str,
}

impl Tone {
    pub const fn new(light: &'static str, dark: &'static str) -> Self {
        Tone { light, dark }
    }

    pub fn pick(&self, mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Light => self.light,
            ThemeMode::Dark => self.dark,
        }
    }
}

pub const CONTAINER: Tone = Tone::new("bg-slate-50", "bg-gray-800");
pub const BUTTON: Tone = Tone::new("bg-slate-100 hover:bg-slate-200", "bg-gray-700 hover:bg-gray-600");
pub const BORDER: Tone = Tone::new("border-slate-200", "border-gray-700");
pub const TEXT: Tone = Tone::new("text-slate-800", "text-gray-200");
pub const HEADING: Tone = Tone::new("text-gray-900", "text-white");
pub const MUTED: Tone = Tone::new("text-gray-600", "text-gray-300");
pub const TAG: Tone = Tone::new("bg-gray-100 text-gray-800", "bg-gray-700 text-gray-200");
pub const CARD: Tone = Tone::new("bg-white hover:bg-gray-50", "bg-gray-800 hover:bg-gray-700");
pub const INPUT: Tone = Tone::new(
    "bg-white border-gray-300 text-gray-900 focus:border-blue-500",
    "bg-gray-700 border-gray-600 text-white focus:border-blue-500",
);
pub const OUTLINE_LINK: Tone = Tone::new(
    "border-blue-500 text-blue-500 hover:bg-blue-500 hover:text-white",
    "border-neon-blue text-neon-blue hover:bg-neon-blue hover:text-white",
);

pub const ERROR_TEXT: &str = "text-red-500";
pub const SUCCESS_BANNER: &str = "p-4 rounded-lg bg-green-100 text-green-800";
pub const FAILURE_BANNER: &str = "p-4 rounded-lg bg-red-100 text-red-800";
